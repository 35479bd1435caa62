//! `devdocs build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use devdocs_config::{CliSettings, Config};
use devdocs_search::build_indexes;
use devdocs_server::shell_config_from_config;
use devdocs_site::{ExportSummary, PageRenderer, Site, export_site};
use devdocs_source::Source;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover devdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    pub(crate) out_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, content cannot be loaded, or
    /// the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            out_dir: self.out_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.field("Source", config.docs_resolved.source_dir.display());
        output.field("Output", config.build_resolved.out_dir.display());

        let summary = build_site(&config)?;

        output.built(&summary);
        Ok(())
    }
}

/// Load content and export the static site described by `config`.
fn build_site(config: &Config) -> Result<ExportSummary, CliError> {
    let source = Arc::new(Source::load(
        &config.docs_resolved.source_dir,
        &config.docs_resolved.base_url,
    )?);
    let indexes = build_indexes(source.pages());
    tracing::debug!(entries = indexes.len(), "Built search index");
    let site = Site::new(source);
    let renderer = PageRenderer::new(shell_config_from_config(config));

    Ok(export_site(
        &site,
        &renderer,
        &indexes,
        &config.build_resolved.out_dir,
    )?)
}

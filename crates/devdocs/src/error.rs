//! CLI error types.

use devdocs_config::ConfigError;
use devdocs_site::ExportError;
use devdocs_source::SourceError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Export(#[from] ExportError),

    #[error("{0}")]
    Server(String),
}

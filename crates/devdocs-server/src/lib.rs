//! HTTP server for devdocs.
//!
//! Serves the documentation site with axum:
//! - `GET /docs` and `GET /docs/{*slug}`: rendered HTML pages
//! - `GET /api/pages/{*slug}`: page shell and metadata as JSON
//! - `GET /api/search?query=`: search results as JSON
//!
//! Content is loaded and indexed once, before the listener is bound. All
//! request handling reads immutable state shared through [`Arc`].
//!
//! # Quick Start
//!
//! ```ignore
//! use devdocs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         port: 3000,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use devdocs_config::{Config, SearchModeSetting};
use devdocs_search::{DEFAULT_LIMIT, SearchMode, build_indexes, create_search_api};
use devdocs_site::{EditTarget, PageRenderer, ShellConfig, Site};
use devdocs_source::{Source, SourceError};

pub use app::create_router;
pub use error::ServerError;
pub use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content directory.
    pub source_dir: PathBuf,
    /// URL prefix of documentation pages.
    pub base_url: String,
    /// Page shell settings.
    pub shell: ShellConfig,
    /// Search index flavour.
    pub search_mode: SearchMode,
    /// Maximum results per search query.
    pub search_limit: usize,
    /// Application version (for `ETag` invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            source_dir: PathBuf::from("content/docs"),
            base_url: "/docs".to_owned(),
            shell: ShellConfig::default(),
            search_mode: SearchMode::Advanced,
            search_limit: DEFAULT_LIMIT,
            version: String::new(),
        }
    }
}

/// Load content and build the shared application state.
///
/// # Errors
///
/// Returns [`SourceError`] if the content tree cannot be loaded.
pub fn build_state(config: &ServerConfig) -> Result<AppState, SourceError> {
    let source = Arc::new(Source::load(&config.source_dir, &config.base_url)?);
    let indexes = build_indexes(source.pages());
    let search = create_search_api(config.search_mode, indexes).with_limit(config.search_limit);

    Ok(AppState {
        site: Site::new(source),
        renderer: PageRenderer::new(config.shell.clone()),
        search,
        base_url: config.base_url.clone(),
        version: config.version.clone(),
    })
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the content cannot be loaded or the server fails to
/// start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(build_state(&config)?);
    tracing::info!(
        pages = state.site.source().len(),
        base_url = %state.base_url,
        "Site ready"
    );

    let app = create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Map the configured search mode onto the search crate's mode.
#[must_use]
pub fn search_mode_from_setting(setting: SearchModeSetting) -> SearchMode {
    match setting {
        SearchModeSetting::Simple => SearchMode::Simple,
        SearchModeSetting::Advanced => SearchMode::Advanced,
    }
}

/// Build page shell settings from devdocs config.
#[must_use]
pub fn shell_config_from_config(config: &Config) -> ShellConfig {
    ShellConfig {
        toc_style: config.toc.style.clone(),
        edit: EditTarget {
            owner: config.edit.owner.clone(),
            repo: config.edit.repo.clone(),
            sha: config.edit.branch.clone(),
            content_prefix: config.edit.content_prefix.clone(),
        },
    }
}

/// Create server configuration from devdocs config.
#[must_use]
pub fn server_config_from_config(config: &Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        base_url: config.docs_resolved.base_url.clone(),
        shell: shell_config_from_config(config),
        search_mode: search_mode_from_setting(config.search.mode),
        search_limit: config.search.limit,
        version,
    }
}

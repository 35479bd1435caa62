//! Configuration management for devdocs.
//!
//! Parses `devdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `edit.owner`
//! - `edit.repo`
//! - `edit.branch`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override static export output directory.
    pub out_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "devdocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Content configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// "Edit this page" link configuration.
    pub edit: EditConfig,
    /// Table of contents presentation.
    pub toc: TocConfig,
    /// Search endpoint configuration.
    pub search: SearchConfig,
    /// Static export configuration (paths are relative strings from TOML).
    build: BuildConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved static export configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    base_url: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Root of the content tree (`content/docs` by default).
    pub source_dir: PathBuf,
    /// URL prefix under which documentation pages are routed.
    pub base_url: String,
}

/// "Edit on GitHub" link target.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch or commit reference.
    pub branch: String,
    /// Repository-relative directory holding the content tree.
    pub content_prefix: String,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            owner: "FyraLabs".to_owned(),
            repo: "developer".to_owned(),
            branch: "main".to_owned(),
            content_prefix: "content/docs".to_owned(),
        }
    }
}

/// Table of contents presentation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Presentation style handed to the page shell.
    pub style: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            style: "clerk".to_owned(),
        }
    }
}

/// Search index flavour.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchModeSetting {
    /// Title-only matching.
    Simple,
    /// Title, heading and body matching.
    #[default]
    Advanced,
}

/// Search endpoint configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Index flavour.
    pub mode: SearchModeSetting,
    /// Maximum number of results per query.
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchModeSetting::Advanced,
            limit: 60,
        }
    }
}

/// Raw static export configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    out_dir: Option<String>,
}

/// Resolved static export configuration.
#[derive(Debug, Default)]
pub struct BuildConfig {
    /// Output directory for `devdocs build`.
    pub out_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`edit.owner`").
        field: String,
        /// Error message (e.g., "${`DOCS_OWNER`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `devdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, so CLI
    /// arguments take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(out_dir) = &settings.out_dir {
            self.build_resolved.out_dir.clone_from(out_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            docs: DocsConfigRaw::default(),
            edit: EditConfig::default(),
            toc: TocConfig::default(),
            search: SearchConfig::default(),
            build: BuildConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("content/docs"),
                base_url: "/docs".to_owned(),
            },
            build_resolved: BuildConfig {
                out_dir: base.join("out"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_docs()?;
        self.validate_edit()?;
        self.validate_search()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 lets the OS pick a port, which is never what a config file means
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        let base_url = &self.docs_resolved.base_url;
        if !base_url.starts_with('/') {
            return Err(ConfigError::Validation(
                "docs.base_url must start with /".to_owned(),
            ));
        }
        if base_url.len() > 1 && base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "docs.base_url must not end with /".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_edit(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.edit.owner, "edit.owner")?;
        require_non_empty(&self.edit.repo, "edit.repo")?;
        require_non_empty(&self.edit.branch, "edit.branch")?;
        Ok(())
    }

    fn validate_search(&self) -> Result<(), ConfigError> {
        if self.search.limit == 0 {
            return Err(ConfigError::Validation(
                "search.limit must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_fields(self.env_fields())
    }

    /// String settings that accept `${VAR}` references, keyed by TOML path.
    fn env_fields(&mut self) -> Vec<expand::EnvField<'_>> {
        let mut fields: Vec<expand::EnvField<'_>> = vec![
            ("server.host", &mut self.server.host),
            ("edit.owner", &mut self.edit.owner),
            ("edit.repo", &mut self.edit.repo),
            ("edit.branch", &mut self.edit.branch),
            ("edit.content_prefix", &mut self.edit.content_prefix),
        ];
        if let Some(source_dir) = self.docs.source_dir.as_mut() {
            fields.push(("docs.source_dir", source_dir));
        }
        if let Some(base_url) = self.docs.base_url.as_mut() {
            fields.push(("docs.base_url", base_url));
        }
        if let Some(out_dir) = self.build.out_dir.as_mut() {
            fields.push(("build.out_dir", out_dir));
        }
        fields
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "content/docs"),
            base_url: self
                .docs
                .base_url
                .clone()
                .unwrap_or_else(|| "/docs".to_owned()),
        };

        self.build_resolved = BuildConfig {
            out_dir: resolve(self.build.out_dir.as_deref(), "out"),
        };
    }
}

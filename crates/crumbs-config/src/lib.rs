//! Configuration management for crumbs.
//!
//! Parses `crumbs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [breadcrumbs]
//! builder = "simple"
//! separator = " &raquo; "
//! tag = "li"
//!
//! [site]
//! base_url = "${SITE_BASE_URL:-/}"
//! current = "/products"
//!
//! [helpers]
//! site_name = "Acme"
//! ```
//!
//! Keys under `[breadcrumbs]` other than `builder`, `separator` and `tag` are
//! passed to the selected builder as extensions.
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base_url`
//! - `site.current`
//!
//! `[helpers]` values are display text and are used verbatim, so `$` needs no
//! escaping there.

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crumbs_core::{HtmlContext, RenderOptions, is_valid_tag_name};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override builder name.
    pub builder: Option<String>,
    /// Override separator.
    pub separator: Option<String>,
    /// Override wrapper tag.
    pub tag: Option<String>,
    /// Override base URL for relative paths.
    pub base_url: Option<String>,
    /// Override current page location.
    pub current: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "crumbs.toml";

/// Current location assumed when none is configured.
const DEFAULT_CURRENT: &str = "/";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Builder selection and builder options.
    pub breadcrumbs: RenderOptions,
    /// Site settings for the standalone rendering context.
    pub site: SiteConfig,
    /// Named helpers resolved by identifier.
    pub helpers: BTreeMap<String, String>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix applied to relative literal paths.
    pub base_url: Option<String>,
    /// Location of the page being rendered.
    pub current: Option<String>,
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
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`SITE_BASE_URL`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `crumbs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
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
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(builder) = &settings.builder {
            self.breadcrumbs.builder = Some(builder.clone());
        }
        if let Some(separator) = &settings.separator {
            self.breadcrumbs.builder_options.separator = Some(separator.clone());
        }
        if let Some(tag) = &settings.tag {
            self.breadcrumbs.builder_options.tag = Some(tag.clone());
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url = Some(base_url.clone());
        }
        if let Some(current) = &settings.current {
            self.site.current = Some(current.clone());
        }
    }

    /// Location of the page being rendered, `/` when unset.
    #[must_use]
    pub fn current(&self) -> &str {
        self.site.current.as_deref().unwrap_or(DEFAULT_CURRENT)
    }

    /// Build a standalone rendering context from the site and helper settings.
    #[must_use]
    pub fn html_context(&self) -> HtmlContext {
        let mut ctx = HtmlContext::new(self.current()).with_helpers(self.helpers.clone());
        if let Some(base_url) = &self.site.base_url {
            ctx = ctx.with_base_url(base_url.clone());
        }
        ctx
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered configuration");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI settings
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(builder) = &self.breadcrumbs.builder {
            require_non_empty(builder, "breadcrumbs.builder")?;
        }
        if let Some(tag) = &self.breadcrumbs.builder_options.tag {
            require_tag_name(tag, "breadcrumbs.tag")?;
        }
        if let Some(current) = &self.site.current {
            require_non_empty(current, "site.current")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.site.base_url {
            self.site.base_url = Some(expand::expand_env(base_url, "site.base_url")?);
        }
        if let Some(current) = &self.site.current {
            self.site.current = Some(expand::expand_env(current, "site.current")?);
        }
        Ok(())
    }
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a field to be a plain element name such as `li` or `h1`.
fn require_tag_name(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if !is_valid_tag_name(value) {
        return Err(ConfigError::Validation(format!(
            "{field} must be an element name, got {value:?}"
        )));
    }
    Ok(())
}

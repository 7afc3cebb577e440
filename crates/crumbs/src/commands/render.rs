//! `crumbs render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use crumbs_config::{CliSettings, Config};
use crumbs_core::{BuilderRegistry, Markup};

use crate::error::CliError;
use crate::output::Output;
use crate::trail_file::{TrailFormat, parse_trail};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Trail file (TOML, or JSON with a `.json` extension). Reads TOML from
    /// stdin when omitted or `-`.
    trail: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover crumbs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Location of the page being rendered (overrides config).
    #[arg(long, env = "CRUMBS_CURRENT")]
    current: Option<String>,

    /// Prefix for relative paths (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Markup placed between crumbs (overrides config).
    #[arg(short, long)]
    separator: Option<String>,

    /// Tag wrapped around each crumb, e.g. `li` (overrides config).
    #[arg(short, long)]
    tag: Option<String>,

    /// Builder to render with (overrides config).
    #[arg(short, long)]
    builder: Option<String>,

    /// Write markup to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (debug logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, trail parsing or rendering fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            builder: self.builder,
            separator: self.separator,
            tag: self.tag,
            base_url: self.base_url,
            current: self.current,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let (content, format) = read_trail(self.trail.as_deref())?;
        let markup = render_trail(&config, &content, format)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, markup.as_str())?;
                output.success(&format!("Breadcrumbs written to {}", path.display()));
            }
            None => output.emit(markup.as_str())?,
        }

        Ok(())
    }
}

/// Read trail contents from `path`, or stdin for `None` and `-`.
fn read_trail(path: Option<&Path>) -> Result<(String, TrailFormat), CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "Reading trail file");
            Ok((std::fs::read_to_string(path)?, TrailFormat::from_path(path)))
        }
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok((content, TrailFormat::Toml))
        }
    }
}

/// Render trail contents with the context and options from `config`.
fn render_trail(config: &Config, content: &str, format: TrailFormat) -> Result<Markup, CliError> {
    let trail = parse_trail(content, format)?;
    let ctx = config.html_context();
    Ok(BuilderRegistry::default().render(&ctx, &trail, &config.breadcrumbs)?)
}

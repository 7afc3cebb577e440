//! crumbs CLI - breadcrumb trail renderer.
//!
//! Provides commands for:
//! - `render`: Render a trail file to breadcrumb markup
//! - `builders`: List the available breadcrumb builders

mod commands;
mod error;
mod output;
mod trail_file;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::RenderArgs;
use output::Output;

/// crumbs - breadcrumb trail renderer.
#[derive(Parser)]
#[command(name = "crumbs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a trail file to markup.
    Render(RenderArgs),
    /// List available builders.
    Builders,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Builders => commands::builders::execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

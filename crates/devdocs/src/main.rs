//! devdocs CLI - Documentation site server.
//!
//! Provides commands for:
//! - `serve`: Start the documentation server
//! - `build`: Export the site as static HTML plus a search index

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// devdocs - Documentation site server.
#[derive(Parser)]
#[command(name = "devdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation server.
    Serve(ServeArgs),
    /// Export the site as static files.
    Build(BuildArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Serve(args) => args.verbose,
            Self::Build(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Build(args) => args.execute(),
    };

    if let Err(err) = result {
        output.failure(&err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_args() {
        let cli = Cli::try_parse_from(["devdocs", "serve", "--port", "9000", "-v"]).unwrap();

        assert!(matches!(cli.command, Commands::Serve(_)));
        assert!(cli.command.verbose());
    }

    #[test]
    fn test_parse_build_args() {
        let cli = Cli::try_parse_from(["devdocs", "build", "--out-dir", "public"]).unwrap();

        assert!(!cli.command.verbose());
        let Commands::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.out_dir, Some(std::path::PathBuf::from("public")));
    }
}

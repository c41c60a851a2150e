//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod check;
mod export;
mod list;
mod serve;
mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::Catalog;
use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Server-rendered personal portfolio site")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content dataset (TOML, YAML or JSON). Overrides config and PORTFOLIO_CONTENT.
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:3030)
        #[arg(long, short)]
        bind: Option<String>,
    },

    /// List artifacts in the catalog
    List {
        /// Newest (highest id) first
        #[arg(long)]
        desc: bool,
    },

    /// Show the sections of one artifact
    Show {
        /// Artifact id
        id: String,
    },

    /// Render the whole site to static HTML files
    Export {
        /// Output directory
        dir: PathBuf,
    },

    /// Validate the content dataset and print a summary
    Check,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        content: cli.content,
    };
    let (settings, _config) = load_settings_with_options(options).await;
    let catalog = Catalog::load_or_builtin(settings.content_path.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(settings, catalog, &bind).await
        }
        Commands::List { desc } => list::cmd_list(&catalog, desc),
        Commands::Show { id } => show::cmd_show(&settings, &catalog, &id),
        Commands::Export { dir } => export::cmd_export(&settings, &catalog, &dir),
        Commands::Check => check::cmd_check(&settings, &catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "portfolio",
            "list",
            "--desc",
            "--content",
            "site.yaml",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.content, Some(PathBuf::from("site.yaml")));
        assert!(matches!(cli.command, Commands::List { desc: true }));
    }

    #[test]
    fn test_parse_serve_bind() {
        let cli = Cli::try_parse_from(["portfolio", "serve", "--bind", "8080"]).unwrap();
        match cli.command {
            Commands::Serve { bind } => assert_eq!(bind.as_deref(), Some("8080")),
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["portfolio", "show"]).is_err());
    }
}

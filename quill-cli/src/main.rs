//! Quill CLI - submit pull request reviews from the terminal
//!
//! Approve, request changes on, or comment on a pull request, either
//! directly through flags or through an interactive wizard.

mod commands;
mod terminal;

use clap::{Parser, Subcommand};
use quill_core::{Config, Secrets};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ReviewArgs;

/// Quill: submit pull request reviews from the terminal
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Editor command for review bodies (overrides config)
    #[arg(long, global = true, env = "QUILL_EDITOR")]
    editor: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Review a pull request
    #[command(visible_alias = "r")]
    Review(ReviewArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = Config::load_with_overrides(cli.editor.clone())?;

    match cli.command {
        Some(Commands::Version) => {
            println!("quill {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Review(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Config) => {
            println!("Quill Configuration");
            println!("===================");
            println!();
            println!("Editor:");
            println!("  command: {}", config.editor_command());
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
            if let Some(path) = Secrets::default_secrets_path() {
                println!("Secrets file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - set GITHUB_TOKEN instead)");
                }
            }
        }
        None => {
            println!("Quill - submit pull request reviews from the terminal");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

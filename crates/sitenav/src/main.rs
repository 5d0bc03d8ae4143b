//! sitenav CLI - validated sidebar configuration for Starlight docs sites.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod site;

use commands::emit::Format;

#[derive(Parser)]
#[command(name = "sitenav")]
#[command(about = "Validate and emit sidebar configuration for Starlight docs sites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml descriptor (built-in descriptor if missing)
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a site.toml containing the built-in descriptor
    Init {
        /// Overwrite an existing site.toml
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the descriptor
    Check {
        /// Content directory to resolve slugs against (e.g. src/content/docs)
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Emit the site framework configuration
    Emit {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the sidebar in rendering order
    Tree,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging on stderr so emitted config on stdout stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => commands::init::run(&cli.config, yes)?,
        Commands::Check { content } => commands::check::run(&cli.config, content)?,
        Commands::Emit { format, output } => commands::emit::run(&cli.config, format, output)?,
        Commands::Tree => commands::tree::run(&cli.config)?,
    }

    Ok(())
}

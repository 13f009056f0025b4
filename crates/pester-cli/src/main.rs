//! Pester Adapter CLI
//!
//! Lists Pester test scripts for host test runners and editor integrations.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::discover::OutputFormat;

/// Pester Adapter - test script discovery for PowerShell projects
#[derive(Parser)]
#[command(name = "pester")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List test scripts (*.Tests.ps1) under a project directory
    Discover {
        /// Project directory to search
        #[arg(env = "PESTER_PROJECT_DIR")]
        project_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Sort scripts by path instead of enumeration order
        #[arg(long)]
        sorted: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Discover {
            project_dir,
            format,
            sorted,
        } => {
            commands::discover::run(project_dir.as_deref(), format, sorted)?;
        }
    }

    Ok(())
}

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use memento_autofill::config::MementoConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "memento", version, about = "Infer a date and place for a memento from its photos")]
struct Cli {
    /// Config file (defaults to ~/.memento/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the date and coordinates extracted from each photo
    Extract {
        /// Image files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Aggregate photos and saved mementos into one date and named location
    Aggregate {
        /// JSON file holding an array of saved mementos
        #[arg(long)]
        records: Option<PathBuf>,
        /// Image files to read
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MementoConfig::load_from(path)?,
        None => MementoConfig::load()?,
    };

    // Log to stderr so stdout stays clean for JSON output.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Extract { files } => {
            cli::extract::extract(&files)?;
        }
        Command::Aggregate { records, files } => {
            cli::aggregate::aggregate(&config, &files, records.as_deref()).await?;
        }
    }

    Ok(())
}

//! InfoTools entry point.
//!
//! The original tool is a window with navigable pages; here each page is a
//! subcommand and the dispatcher below is the thin page-switching container.
//! Logging goes to stderr so page output stays clean on stdout.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use infotools_core::AppConfig;

mod pages;

#[derive(Parser)]
#[command(name = "infotools")]
#[command(version)]
#[command(about = "Site inspection utilities: alert ticker, favicon identification, header checks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the home page alert ticker in the terminal
    Home {
        /// Stop after this many animation frames (runs until interrupted when omitted)
        #[arg(long)]
        frames: Option<u64>,
    },
    /// Identify a favicon file against the hash database
    Identify {
        /// Path to a favicon.ico file
        file: std::path::PathBuf,
    },
    /// Fetch and display response headers for a URL
    Headers {
        /// Absolute URL to check
        url: String,
    },
    /// Read or change stored settings
    Settings {
        #[command(subcommand)]
        action: pages::settings::SettingsAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Command::Home { frames } => pages::home::run(&config, frames).await,
        Command::Identify { file } => pages::favicon_id::run(&config, &file),
        Command::Headers { url } => pages::site_headers::run(&config, &url).await,
        Command::Settings { action } => pages::settings::run(&config, action),
    }
}

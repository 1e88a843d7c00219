use anyhow::Result;
use clap::{Parser, Subcommand};
use pixgallery_client::{PixabayClient, SearchClient};
use pixgallery_core::GalleryConfig;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "pixgallery")]
#[command(about = "Image search gallery over the Pixabay API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search images and print the result cards
    Search {
        query: String,
        /// Number of pages to load (stops early when results run out)
        #[arg(short, long, default_value = "1")]
        pages: u32,
        /// Print the collected records as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Serve the gallery page for the browser
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
}

/// Builds the search client from `PIXABAY_API_KEY` and friends.
pub(crate) fn build_search_client() -> Result<SearchClient> {
    let config = GalleryConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");
    let source = PixabayClient::from_config(&config)?;
    Ok(SearchClient::new(Arc::new(source), config.page_size))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, pages, json } => {
            commands::search::run_search(&query, pages, json).await?;
        },
        Commands::Serve { port, host } => {
            commands::serve::run(port, host).await?;
        },
    }

    Ok(())
}

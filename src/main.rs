//! Imagery CLI entrypoint.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use imagery::config::ImageryConfig;
use imagery::scoring::rank_candidates;
use imagery::selection::{ImageSelector, ProductRequest};
use imagery::unsplash::{CandidateImage, RawPhoto, SearchResponse, UnsplashClient};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "imagery")]
#[command(about = "Find and score product images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the best image for one product
    Resolve {
        /// Product name
        name: String,

        /// Product category (e.g. "Electronics")
        #[arg(short, long, default_value = "")]
        category: String,

        /// Log the query, candidates and scoring breakdown
        #[arg(short, long)]
        debug: bool,
    },

    /// Resolve images for a JSON array of {"name", "category"} objects
    Batch {
        file: PathBuf,

        /// Log a summary once the batch completes
        #[arg(short, long)]
        debug: bool,
    },

    /// Rank saved Unsplash search results without calling the API
    Score {
        /// Search response body, or a JSON array of photos
        file: PathBuf,

        #[arg(short, long)]
        title: String,

        #[arg(short, long, default_value = "")]
        category: String,
    },

    /// Send one search and print the Unsplash rate limit it reports
    RateLimit,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SavedResults {
    Photos(Vec<RawPhoto>),
    Response(SearchResponse),
}

impl SavedResults {
    fn into_candidates(self) -> Vec<CandidateImage> {
        match self {
            SavedResults::Photos(photos) => photos.into_iter().map(CandidateImage::from).collect(),
            SavedResults::Response(response) => response.into_candidates(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(
        cli.command,
        Command::Resolve { debug: true, .. } | Command::Batch { debug: true, .. }
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(if verbose { "info" } else { "warn" })),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ImageryConfig::from_env()?;
    config.validate()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    match cli.command {
        Command::Resolve {
            name,
            category,
            debug,
        } => {
            let selector = ImageSelector::from_config(&config);
            let result = selector.get_product_image(&name, &category, debug).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Batch { file, debug } => {
            let items: Vec<ProductRequest> = read_json(&file)?;
            let selector = ImageSelector::from_config(&config);
            let results = selector.get_batch_product_images(&items, debug).await;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Score {
            file,
            title,
            category,
        } => {
            let saved: SavedResults = read_json(&file)?;
            let ranked = rank_candidates(&saved.into_candidates(), &title, &category);
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        Command::RateLimit => {
            if !config.has_api_key() {
                anyhow::bail!("UNSPLASH_ACCESS_KEY is not set; cannot query the rate limit");
            }
            let client = UnsplashClient::new(&config);
            let state = client
                .refresh_rate_limit()
                .await
                .context("rate-limit request failed")?;
            match state {
                Some(state) => println!("{state}"),
                None => println!("Unsplash returned no rate-limit headers"),
            }
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

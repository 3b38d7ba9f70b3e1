mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use revsense_core::AppConfig;
use revsense_scraper::ReviewFetcher;
use revsense_sentiment::{
    analyze_url, compare_urls, load_review_titles, normalize, CompareSettings,
    SentimentAnalyzer, SentimentModel, REVIEW_COLUMN,
};

#[derive(Debug, Parser)]
#[command(name = "revsense")]
#[command(about = "Product review sentiment analysis and comparison")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify every review in a CSV file and report the majority sentiment
    AnalyzeFile {
        path: PathBuf,

        /// Column holding one review per row
        #[arg(long, default_value = REVIEW_COLUMN)]
        column: String,

        #[arg(long)]
        json: bool,
    },
    /// Scrape one product page and summarize its reviews
    AnalyzeUrl {
        url: String,

        /// Cap on reviews taken per selector (defaults to REVSENSE_MAX_REVIEWS)
        #[arg(long)]
        max_reviews: Option<usize>,

        #[arg(long)]
        json: bool,
    },
    /// Scrape two product pages and report which has the better reviews
    Compare {
        url1: String,
        url2: String,

        #[arg(long)]
        json: bool,
    },
    /// Print the normalized token string for a piece of text
    Normalize { text: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.command).await
}

/// Loads config, installs the subscriber and loads the model.
///
/// Only the model-backed commands call this, so `normalize` and `--help` work
/// without a valid environment or model directory.
fn bootstrap() -> anyhow::Result<(AppConfig, SentimentAnalyzer)> {
    let config = revsense_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let model = SentimentModel::load(&config.model_dir).with_context(|| {
        format!(
            "failed to load sentiment model from {}",
            config.model_dir.display()
        )
    })?;
    Ok((config, SentimentAnalyzer::new(Arc::new(model))))
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Normalize { text } => println!("{}", normalize(&text)),
        Commands::AnalyzeFile { path, column, json } => {
            let (_, analyzer) = bootstrap()?;
            let reviews = load_review_titles(&path, &column)
                .with_context(|| format!("failed to read reviews from {}", path.display()))?;
            tracing::info!(path = %path.display(), count = reviews.len(), "reviews loaded");
            let summary = analyzer.analyze(&reviews);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", output::render_file_verdict(summary.as_ref()));
            }
        }
        Commands::AnalyzeUrl {
            url,
            max_reviews,
            json,
        } => {
            let (config, analyzer) = bootstrap()?;
            let fetcher = ReviewFetcher::new(config.scraper_request_timeout_secs)?;
            let max_reviews = max_reviews.unwrap_or(config.max_reviews);
            let summary = analyze_url(&fetcher, &analyzer, &url, max_reviews).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                match &summary {
                    Some(s) => print!("{}", output::render_summary("Product", s)),
                    None => anyhow::bail!("no reviews could be extracted from {url}"),
                }
            }
        }
        Commands::Compare { url1, url2, json } => {
            let (config, analyzer) = bootstrap()?;
            let fetcher = ReviewFetcher::new(config.scraper_request_timeout_secs)?;
            let settings = CompareSettings {
                max_reviews: config.max_reviews,
                min_reviews: config.min_reviews_for_compare,
            };
            let result = compare_urls(&fetcher, &analyzer, &url1, &url2, settings).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", output::render_comparison(&url1, &url2, &result));
            }
        }
    }
    Ok(())
}

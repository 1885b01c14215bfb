mod report;

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tweetpulse_core::TweetStore;
use tweetpulse_sentiment::{LexiconScorer, SentimentAggregator};

#[derive(Debug, Parser)]
#[command(name = "tweetpulse-cli")]
#[command(about = "Sentiment reports over collected tweets")]
struct Cli {
    /// Read tweets from a JSON fixture instead of MongoDB
    #[arg(long, global = true, value_name = "PATH")]
    fixture: Option<PathBuf>,

    /// Print the report as JSON, the same body the HTTP API returns
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Count positive, negative and neutral tweets
    Summary,
    /// Show one page of labelled tweets
    Page {
        /// Page number; values below 1 mean the first page
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,
    },
    /// Rank the most frequent words in strongly negative tweets
    NegativeWords,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = open_store(cli.fixture.as_deref()).await?;
    let aggregator = SentimentAggregator::new(store, Arc::new(LexiconScorer::new()));

    let output = run(&aggregator, &cli.command, cli.json).await?;
    println!("{output}");
    Ok(())
}

async fn open_store(fixture: Option<&std::path::Path>) -> anyhow::Result<Arc<dyn TweetStore>> {
    if let Some(path) = fixture {
        let store = tweetpulse_db::MemoryTweetStore::from_fixture(path).await?;
        return Ok(Arc::new(store));
    }

    let config = tweetpulse_core::load_app_config()?;
    let client_config = tweetpulse_db::ClientConfig::from_app_config(&config);
    let store = tweetpulse_db::connect_store(&config.mongodb_uri, &client_config).await?;
    tracing::debug!(
        database = %client_config.database_name,
        collection = %client_config.tweets_collection,
        "reading tweets from mongodb"
    );
    Ok(Arc::new(store))
}

/// Run one report and render it for the terminal.
///
/// # Errors
///
/// Returns an error if the report cannot be computed or serialized.
async fn run(
    aggregator: &SentimentAggregator,
    command: &Commands,
    json: bool,
) -> anyhow::Result<String> {
    let rendered = match command {
        Commands::Summary => {
            let counts = aggregator.summarize().await?;
            if json {
                serde_json::to_string_pretty(&counts)?
            } else {
                report::render_summary(&counts)
            }
        }
        Commands::Page { page } => {
            let result = aggregator.paginate(*page).await?;
            if json {
                serde_json::to_string_pretty(&result)?
            } else {
                report::render_page(&result)
            }
        }
        Commands::NegativeWords => {
            let table = aggregator.top_negative_words().await?;
            if json {
                serde_json::to_string_pretty(&table)?
            } else {
                report::render_negative_words(&table)
            }
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests;

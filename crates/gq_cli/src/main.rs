use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use gq_core::{QueueTransport, SearchQuery};
use gq_fetch::GuardianClient;
use gq_pipeline::Pipeline;
use gq_queue::{HttpQueue, MemoryQueue};
use tracing::info;

/// Fetch the newest Guardian articles for a query and publish them to a queue.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search terms for the Guardian API
    #[arg(long)]
    query: String,
    /// Optional start date in YYYY-MM-DD format
    #[arg(long)]
    from_date: Option<String>,
    /// Destination queue identifier
    #[arg(long)]
    queue: String,
    /// Queue transport backend
    #[arg(long, value_enum, default_value = "http")]
    transport: TransportKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum TransportKind {
    Http,
    /// In-memory transport for dry runs: the message goes nowhere
    Memory,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let query = SearchQuery::new(cli.query, cli.from_date)?;
    let api_key =
        env::var("GUARDIAN_API_KEY").context("GUARDIAN_API_KEY must be set (see .env)")?;

    let source = Arc::new(GuardianClient::new(api_key)?);
    let transport: Arc<dyn QueueTransport> = match cli.transport {
        TransportKind::Http => Arc::new(HttpQueue::from_env()?),
        TransportKind::Memory => Arc::new(MemoryQueue::new()),
    };

    info!("📰 Fetching articles mentioning {}", query.text);
    let pipeline = Pipeline::new(source, transport);
    let result = pipeline.run(&query, &cli.queue).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

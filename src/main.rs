//! Wikifacts - countries, continents and their large cities from Wikidata
//!
//! With no arguments this queries the public Wikidata endpoint for every
//! sovereign state and its continent, then prints the big cities of each.
//!
//! Usage:
//!   wikifacts
//!   wikifacts --limit 10 --lang de --concurrency 4
//!   wikifacts --data dump.ttl --format json

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use wikifacts::config::{EndpointConfig, HarvestConfig, WIKIDATA_SPARQL_URL};
use wikifacts::endpoint::{HttpSparqlEndpoint, LocalSparqlEndpoint, SparqlEndpoint};
use wikifacts::execution::{QueryExecutor, RetryPolicy};
use wikifacts::harvest::{CountryCities, CountryCityHarvester};
use wikifacts::output::{self, OutputFormat};
use wikifacts::vocabulary::Vocabulary;

#[derive(Parser, Debug)]
#[command(name = "wikifacts")]
#[command(
    about = "Retrieve countries, their continents and large cities from a SPARQL endpoint",
    long_about = None
)]
struct Args {
    /// SPARQL endpoint URL
    #[arg(long, default_value = WIKIDATA_SPARQL_URL)]
    endpoint: String,

    /// Query a local Turtle file instead of the remote endpoint
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON vocabulary table replacing the built-in Wikidata identifiers
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Label language
    #[arg(long, default_value = "en")]
    lang: String,

    /// Maximum number of country rows
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<i64>,

    /// City queries allowed in flight at once
    #[arg(long, default_value = "1")]
    concurrency: usize,

    /// Attempts per query, including the first
    #[arg(long, default_value = "5")]
    max_attempts: u32,

    /// Backoff time unit in milliseconds
    #[arg(long, default_value = "1000")]
    base_delay_ms: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "60")]
    timeout_secs: u64,

    /// Output format
    #[arg(long, default_value = "text", value_enum)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    let subscriber =
        tracing_subscriber::fmt().with_env_filter(output::log_filter(rust_log.as_deref()));
    // Keep stdout parseable when printing JSON
    match args.format {
        OutputFormat::Text => subscriber.init(),
        OutputFormat::Json => subscriber.with_writer(std::io::stderr).init(),
    }

    let vocabulary = match &args.vocabulary {
        Some(path) => Vocabulary::load(path)?,
        None => Vocabulary::wikidata(),
    };
    let policy = RetryPolicy::new(args.max_attempts, Duration::from_millis(args.base_delay_ms));
    let harvest_config = HarvestConfig {
        language: args.lang.clone(),
        country_limit: args.limit,
        concurrency: args.concurrency,
    };

    match &args.data {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading local data");
            let endpoint = LocalSparqlEndpoint::open(path)?;
            tracing::info!(triples = endpoint.len()?, "Local store ready");
            let executor = QueryExecutor::with_policy(endpoint, policy);
            run(executor, &vocabulary, harvest_config, args.format).await?;
        }
        None => {
            let endpoint = HttpSparqlEndpoint::new(EndpointConfig {
                url: args.endpoint.clone(),
                timeout_secs: args.timeout_secs,
                ..EndpointConfig::default()
            })?;
            tracing::info!(url = %endpoint.url(), "Querying remote endpoint");
            let executor = QueryExecutor::with_policy(endpoint, policy);
            run(executor, &vocabulary, harvest_config, args.format).await?;
        }
    }

    Ok(())
}

async fn run<E: SparqlEndpoint>(
    executor: QueryExecutor<E>,
    vocabulary: &Vocabulary,
    config: HarvestConfig,
    format: OutputFormat,
) -> wikifacts::Result<()> {
    let policy = executor.policy();
    tracing::debug!(
        max_attempts = policy.max_attempts(),
        base_delay_ms = policy.base_delay().as_millis() as u64,
        "Retry policy"
    );

    let harvester = CountryCityHarvester::new(&executor, vocabulary, config);
    harvester.run(|country_cities| print_country(country_cities, format)).await?;
    Ok(())
}

fn print_country(country_cities: &CountryCities, format: OutputFormat) {
    let mut stdout = std::io::stdout().lock();
    let written = output::write_country(&mut stdout, country_cities, format);
    if let Err(e) = written.and_then(|()| stdout.flush()) {
        tracing::error!(error = %e, "Failed to write country");
    }
}

// affsearch: search Scopus affiliations from the command line.
// Resolves configuration once, runs a single query and prints the results.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use affiliation_search::cli::{self, Cli};
use affiliation_search::{AffiliationSearch, Config, ScopusClient, cache};

fn init_tracing(log_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter));

    // stdout carries the results
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    let config = Config::from_env(cli.cache_dir.clone()).context("failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    if cli.clear {
        let path = cache::query_cache_path(&config.affiliation_search_dir(), &cli.query);
        cache::delete(&path).with_context(|| format!("failed to remove {}", path.display()))?;
        tracing::info!(path = %path.display(), "Removed cached results");
        return Ok(());
    }

    let client = ScopusClient::new(&config).context("failed to create HTTP client")?;
    if !client.has_api_key() {
        tracing::warn!("SCOPUS_API_KEY is not set; uncached queries will likely be rejected");
    }
    let search = AffiliationSearch::new(&client, &config, &cli.query, cli.search_params())
        .await
        .with_context(|| format!("affiliation search failed for {:?}", cli.query))?;

    println!("{}", cli::render(&search, cli.format)?);
    Ok(())
}

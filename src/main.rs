//! Portfolio Search MCP Server - Main entry point
//!
//! Serves ranked portfolio content search over the Model Context Protocol
//! on stdin/stdout.

use anyhow::Result;
use portfolio_search::{Catalog, Config, ContentSearchTools, PortfolioSearchServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_path(path)
        }
        None => {
            info!("Using built-in catalog");
            Catalog::builtin()
        }
    }
    .map_err(|e| {
        error!("Failed to load catalog: {}", e);
        e
    })?;

    // Fail fast on an unusable default locale instead of on the first request
    let default_locale = catalog.resolve_locale(&config.default_locale)?;
    info!(
        "Catalog ready: {} entries, locales {:?}, default {}",
        catalog.len(),
        catalog.locales.iter().map(|l| l.as_str()).collect::<Vec<_>>(),
        default_locale
    );

    let tools = ContentSearchTools::new(
        Arc::new(catalog),
        default_locale,
        config.ranking,
        config.suggestion_default_count,
        config.cache_ttl_secs(),
    );

    // Build the default corpus up front so catalog errors surface at startup
    tools.corpus_for(None)?;

    // Clones share counters with the tools moved into the server
    let metrics = tools.metrics().clone();

    let server = PortfolioSearchServer::new(tools, config.catalog_path.clone());
    info!(
        "Portfolio search server initialized (cache TTL: {} minutes)",
        config.cache_ttl_minutes
    );

    info!("Starting MCP server with stdio transport");
    portfolio_search::server::run_server(server).await?;

    info!("{}", metrics.summary());
    info!("Portfolio search server shutdown complete");
    Ok(())
}

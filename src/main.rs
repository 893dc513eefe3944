// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use clap::Parser;
use hotel_search::app::{create_router, AppState, VERSION};
use hotel_search::services::elasticsearch::{ElasticsearchClient, ElasticsearchConfig};
use hotel_search::services::hotel::HotelService;
use hotel_search::services::logging::init_tracing;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Hotel search HTTP service backed by Elasticsearch.
///
/// Elasticsearch settings are read from `ELASTICSEARCH_URL`, `HOTEL_INDEX`
/// and `ELASTICSEARCH_TIMEOUT_SECS`.
#[derive(Parser, Debug)]
#[command(name = "hotel-search", version = VERSION)]
struct Cli {
    /// Address the HTTP server listens on
    #[arg(long, env = "HOTEL_SEARCH_BIND", default_value = "0.0.0.0:8089")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ElasticsearchConfig::from_env()?;
    let client = ElasticsearchClient::new(&config)?;
    info!(url = %config.url, index = %config.index, "Using Elasticsearch");

    let state = AppState {
        hotel_service: Arc::new(HotelService::new(Arc::new(client))),
        index: config.index.clone(),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;

    info!("hotel-search v{} listening on {}", VERSION, cli.bind);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}

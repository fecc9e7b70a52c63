use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use app::App;
use clap::Parser;
use http_api::QueryServer;
use market_feed::{HitbtcSource, Snapshot};
use stock_data_providers::currency_feed::RefreshLoop;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

mod config;

#[derive(Parser)]
struct Opts {
    /// YAML config; built-in values are used when omitted.
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(%e, "Cannot install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn runner() -> anyhow::Result<()> {
    let cli_opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load(cli_opts.config_file.as_deref())?;
    info!(?config, "Loaded config");

    let source = Arc::new(HitbtcSource::new(
        config.rest_url.clone(),
        config.ws_url.clone(),
    ));
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Cannot listen on {}", config.listen))?;

    let app = App::build(Snapshot::default())
        .add_producer(RefreshLoop::new(
            config.refresh,
            config.symbols,
            source.clone(),
            source.clone(),
        ))
        .add_consumer(QueryServer::new(listener, source).with_graceful_shutdown(shutdown_signal()))
        .build();

    info!("run app");
    app.run().await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    runner().await
}

mod cli;
mod logging;
mod routes;

use crate::cli::Args;
use crate::logging::init_tracing;
use crate::routes::{build_router, AppState};
use anyhow::Context;
use clap::Parser;
use scorer::RiskScorer;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_tracing(args.log_dir.as_deref(), args.log_to_stderr)?;

    info!(
        listen_addr = %args.listen_addr,
        rules = ?args.rules,
        index_file = %args.index_file.display(),
        "phishguard starting"
    );
    let scorer = RiskScorer::load(args.rules.as_deref()).context("failed to build scorer")?;
    let state = AppState {
        scorer: Arc::new(scorer),
        index_file: Arc::new(args.index_file.clone()),
    };
    let app = build_router(state);
    let shutdown = CancellationToken::new();

    let listener = TcpListener::bind(&args.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", args.listen_addr))?;
    info!(addr = %args.listen_addr, "phishguard listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown.clone()))
        .await?;
    info!("phishguard shutting down");
    shutdown.cancel();
    Ok(())
}

async fn wait_for_shutdown(shutdown: CancellationToken) {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
    shutdown.cancel();
}

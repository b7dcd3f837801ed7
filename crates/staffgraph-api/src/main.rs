//! CLI entry point for the staffgraph REST API.

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{fmt, EnvFilter};

use staffgraph_api::config::AppConfig;
use staffgraph_api::{router, AppState};
use staffgraph_graph::GraphClient;

#[derive(Parser)]
#[command(name = "staffgraph-api")]
#[command(about = "REST API over the staffgraph employee/department directory")]
struct Cli {
    /// Config file prefix (default: staffgraph).
    #[arg(short, long, default_value = "staffgraph")]
    config: String,

    /// Override the listen address (e.g., 0.0.0.0:5000).
    #[arg(short, long)]
    bind: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    let graph = GraphClient::connect(&config.neo4j).await?;
    let state = AppState::new(Arc::new(graph), config.server.update_policy);
    let app = router(state);

    let listener = TcpListener::bind(&config.server.bind).await?;
    tracing::info!(
        addr = %config.server.bind,
        update_policy = ?config.server.update_policy,
        "staffgraph API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router, and with it the last handle on the Neo4j pool, is gone now.
    tracing::info!("Server stopped, Neo4j connections released");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}

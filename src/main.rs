//! Headless host for the arena simulation
//!
//! Spawns an authoritative session task and pumps line-delimited JSON
//! commands from stdin into it, streaming snapshots and combat events
//! back over stdout until the input closes or a shutdown signal lands.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strike_core::arena::ArenaSession;
use strike_core::config::Config;
use strike_core::host::stdio::run_host;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    let seed = config.seed.unwrap_or_else(rand::random::<u64>);

    info!("Starting arena host");
    info!(seed, "Simulation seed resolved");

    // Spawn the session task
    let (session, handle) = ArenaSession::new(seed);
    let msg_rx = handle.subscribe();
    let session_task = tokio::spawn(session.run());

    tokio::select! {
        result = run_host(handle, msg_rx) => {
            result?;
        }
        _ = shutdown_signal() => {}
    }

    session_task.await?;

    info!("Host shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    // Stdout carries the host protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        }
    }
}

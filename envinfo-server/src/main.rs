//! envinfo-server - Main entry point
//!
//! Reports the deployment tier (`ENVIRONMENT`) and build identifier
//! (`VERSION`) of the running instance at `GET /environment`.

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use envinfo_common::logging::init_tracing;
use envinfo_common::{EnvironmentInfo, ProcessEnvironment, StaticEnvironment};
use envinfo_server::{build_router, AppState, DEFAULT_LOG_DIRECTIVES};
use tokio::signal;
use tracing::{error, info};

/// Command-line arguments for envinfo-server
#[derive(Parser, Debug)]
#[command(name = "envinfo-server")]
#[command(about = "Environment info microservice")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "ENVINFO_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "ENVINFO_PORT")]
    port: u16,

    /// Resolve ENVIRONMENT and VERSION once at startup instead of per request
    ///
    /// From the environment, "0", "false", "no", "off" and "" mean off; anything else means on.
    #[arg(
        long,
        env = "ENVINFO_FREEZE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    freeze: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before tracing init so --help and --version print nothing else
    let args = Args::parse();

    init_tracing(DEFAULT_LOG_DIRECTIVES);

    info!(
        "Starting envinfo-server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let state = if args.freeze {
        let info = EnvironmentInfo::from_process_env();
        info!(
            "Serving frozen environment info: environment={} version={}",
            info.environment, info.version
        );
        AppState::new(StaticEnvironment::new(info))
    } else {
        info!("Resolving ENVIRONMENT and VERSION per request");
        AppState::new(ProcessEnvironment)
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", args.host, args.port))?;
    let addr = listener
        .local_addr()
        .context("Failed to read bound address")?;

    info!("envinfo-server listening on http://{}", addr);
    info!("Environment info: http://{}/environment", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}

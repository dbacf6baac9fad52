//! Message API server.
//!
//! - REST endpoints: /messages, /messages/{id}
//! - Ops endpoints: /, /health, /metrics
//! - Config: YAML file named by `MSGAPI_CONFIG` (default `msgapi.yaml`)
//! - Graceful shutdown on Ctrl+C / SIGTERM, with a metrics summary on exit

use std::process::ExitCode;

use msgapi_core::error::{MsgApiError, Result};
use msgapi_server::{app_state::AppState, config, obs, router};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "msgapi-server failed");
            eprintln!("msgapi-server: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = config::config_path();
    let (cfg, found) = config::load_or_default(&path)?;
    obs::init_tracing(&cfg.logging);
    if !found {
        tracing::warn!(%path, "config file not found, using defaults");
    }

    let listen = cfg.server.listen_addr()?;
    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    let app_cfg = &state.cfg().app;
    tracing::info!(name = %app_cfg.name, version = %app_cfg.version, %listen, "msgapi-server starting");

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MsgApiError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MsgApiError::Internal(format!("server failed: {e}")))?;

    state.metrics().log_summary();
    tracing::info!("shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}

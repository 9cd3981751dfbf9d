use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use readygate_core::ReadinessGate;

use crate::config::{ReadinessTrigger, WebConfig};
use crate::router::build_router;
use crate::state::AppState;

/// Build the gate from `config`, bind `0.0.0.0:PORT` and serve until SIGINT/SIGTERM.
pub async fn run(config: WebConfig) -> anyhow::Result<()> {
    let gate = Arc::new(ReadinessGate::new(config.warmup));
    let state = AppState::new(gate, config.trigger, &config.index_message);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    serve(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// With the startup trigger the gate is marked ready here, after the listener
/// is bound and every other initialization step has completed.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("listener has no local address")?;
    let gate = Arc::clone(&state.gate);
    let trigger = state.trigger;
    let router = build_router(state);

    info!(
        %addr,
        warmup_secs = gate.warmup().as_secs(),
        trigger = ?trigger,
        "web service listening"
    );

    if trigger == ReadinessTrigger::Startup {
        gate.mark_ready();
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    info!("web service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install ctrl+c handler");
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
                error!(error = %e, "failed to install SIGTERM handler");
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
    info!("shutdown signal received");
}

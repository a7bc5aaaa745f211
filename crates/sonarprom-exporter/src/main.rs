//! sonarprom exporter
//!
//! Polls the code-quality server on every scrape and republishes the
//! enabled measures as Prometheus gauges.
//! - `GET /metrics` (and `/api/prometheus/metrics`)
//! - `GET /healthz`, `GET /readyz`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sonarprom_exporter::{app_state, config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path).expect("config load failed");
    let listen = cfg.server.listen_addr().expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(&cfg).expect("state init failed");
    let app = router::build_router(state.clone());

    tracing::info!(%listen, config = %path, "sonarprom-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .expect("server failed");
}

async fn shutdown_signal(state: app_state::AppState) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}

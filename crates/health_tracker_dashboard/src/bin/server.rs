use std::sync::Arc;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::info;

use health_tracker_dashboard::{AppState, Config, DashboardAggregator, http};
use health_tracker_store::{DailyStore, SqliteDailyStore};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Configure logging from env var `HEALTH_TRACKER_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = std::env::var("HEALTH_TRACKER_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!(%log_env, "health_tracker:http: log filter");

    let handle = PrometheusBuilder::new().install_recorder()?;

    let config = Config::from_env()?;
    let store: Arc<dyn DailyStore> = Arc::new(
        SqliteDailyStore::open(&config.database_path)
            .with_context(|| format!("opening {}", config.database_path.display()))?,
    );
    let aggregator = DashboardAggregator::new(store, config.calendar);
    let app = http::router(AppState::new(aggregator, handle));

    let addr = config.address;
    info!(%addr, database = %config.database_path.display(), "starting HTTP server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to address {addr}"))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("failed to install ctrl+c handler: {e}");
            }
        })
        .await?;

    info!("server stopped");
    Ok(())
}

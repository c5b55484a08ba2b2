//! JSON HTTP surface over the aggregator.

use axum::debug_handler;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;

use crate::aggregator::DashboardSummary;
use crate::error::DashboardError;
use crate::missing::MissingDataReport;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthDto {
    status: &'static str,
    message: &'static str,
}

#[debug_handler]
async fn health() -> impl IntoResponse {
    Json(HealthDto {
        status: "healthy",
        message: "Health Tracker API is running",
    })
}

#[debug_handler]
async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let body = state.metrics.render();
    ([("content-type", "text/plain; version=0.0.4")], body)
}

#[debug_handler]
async fn dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, (StatusCode, String)> {
    state
        .aggregator
        .fetch_dashboard()
        .await
        .map(Json)
        .map_err(map_err)
}

#[debug_handler]
async fn missing_data(
    State(state): State<AppState>,
    Path(scope): Path<String>,
) -> Result<Json<MissingDataReport>, (StatusCode, String)> {
    state
        .aggregator
        .missing_data(&scope)
        .await
        .map(Json)
        .map_err(map_err)
}

fn map_err(e: DashboardError) -> (StatusCode, String) {
    metrics::counter!("store_errors_total").increment(1);
    tracing::warn!(error = %e, "dashboard request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/dashboard", get(dashboard))
        .route("/api/missing-data/{scope}", get(missing_data))
        .with_state(state)
}

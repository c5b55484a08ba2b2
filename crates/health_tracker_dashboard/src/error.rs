//! Error types for the dashboard.

use thiserror::Error;

/// Dashboard errors. Gaps and NULLs in the data are never errors; only storage
/// access and startup configuration can fail.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Storage error: {0}")]
    Store(#[from] health_tracker_store::StoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

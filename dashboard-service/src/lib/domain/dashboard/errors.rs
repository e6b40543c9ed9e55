use thiserror::Error;

/// Top-level error for dashboard operations
#[derive(Debug, Clone, Error)]
pub enum DashboardError {
    #[error("Dashboard record not found: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    StorageError(String),
}

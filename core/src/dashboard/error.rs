//! Error types for controller transitions

use thiserror::Error;

/// Events the dashboard controller rejects without changing state
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("selected row {country} {year} is not in the dataset")]
    MissingSelectionTarget { country: String, year: i32 },

    #[error("dataset load already resolved")]
    LoadAlreadyResolved,
}

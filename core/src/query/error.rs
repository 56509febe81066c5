//! Error types for derived-view queries

use thiserror::Error;

/// Conditions a query reports instead of producing an invalid result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("emission sources for {country} {year} sum to zero")]
    DegenerateComposition { country: String, year: i32 },
}

//! Error types for dataset loading

use thiserror::Error;

/// Errors while fetching or parsing the emissions CSV
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch dataset from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("dataset request to {url} returned HTTP {status}")]
    Http { url: String, status: u16 },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column {name}")]
    MissingColumn { name: &'static str },
}

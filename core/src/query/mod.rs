//! Aggregation utilities over the emissions dataset.
//!
//! Pure functions that derive chart inputs from the raw rows:
//! - Year and country domains for the heatmap axes
//! - Color domain for the heatmap scale
//! - Source composition of a single row (pie chart)
//! - Per-country time series (line chart)

mod composition;
mod domain;
mod error;
mod time_series;

pub use composition::composition;
pub use domain::{color_domain, country_order, year_domain};
pub use error::QueryError;
pub use time_series::time_series;

// Re-export view types from shared types crate
pub use emissions_types::{ColorDomain, CompositionSlice, TimeSeriesPoint, YearRange};

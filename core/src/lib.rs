pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod query;

// Re-exports for convenience
pub use config::{ConfigError, parse_config};
pub use dashboard::{
    Dashboard, DashboardError, DatasetState, HeatmapCell, HeatmapView, LineView, PieView,
    Selection,
};
pub use dataset::{LoadError, parse_csv};
pub use emissions_types::*;
pub use query::QueryError;

//! Dashboard controller
//!
//! This module provides:
//! - **Controller**: the dataset/selection state machine ([`Dashboard`])
//! - **Views**: per-chart inputs derived from that state on demand
//!
//! # Data flow
//!
//! loader → [`Dashboard::complete_load`] → [`Dashboard::heatmap_view`] → heatmap
//! click → [`Dashboard::select`] → [`Dashboard::pie_view`] / [`Dashboard::line_view`]

mod controller;
mod error;
mod views;


pub use controller::{Dashboard, DatasetState, Selection};
pub use error::DashboardError;
pub use views::{HeatmapCell, HeatmapView, LineView, PieView};

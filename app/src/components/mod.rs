//! UI Components
//!
//! One component per chart. All of them draw through the shared [`echarts`]
//! bindings.

pub mod echarts;
pub mod heatmap;
pub mod line_chart;
pub mod pie_chart;

pub use heatmap::Heatmap;
pub use line_chart::LineChart;
pub use pie_chart::PieChart;

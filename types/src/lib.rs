//! Shared data types for the emissions dashboard
//!
//! This crate contains serializable types that are shared between the
//! data pipeline (emissions-core) and the WASM frontend (emissions-ui).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Dataset Rows
// ─────────────────────────────────────────────────────────────────────────────

/// One (country, year) observation.
///
/// Every numeric field is finite and non-negative once the loader has coerced it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmissionRecord {
    pub country: String,
    pub year: i32,
    /// Total emissions (MT)
    pub total: f64,
    pub population: f64,
    /// GDP (hundred million)
    #[serde(rename = "GDP")]
    pub gdp: f64,

    // Emission sources
    pub coal: f64,
    pub oil: f64,
    pub gas: f64,
    pub cement: f64,
    pub flaring: f64,
    pub other: f64,
}

impl EmissionRecord {
    /// Value of the given heatmap metric
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Population => self.population,
            Metric::Gdp => self.gdp,
            Metric::Total => self.total,
        }
    }

    /// Value of one emission source
    pub fn source(&self, category: SourceCategory) -> f64 {
        match category {
            SourceCategory::Coal => self.coal,
            SourceCategory::Oil => self.oil,
            SourceCategory::Gas => self.gas,
            SourceCategory::Cement => self.cement,
            SourceCategory::Flaring => self.flaring,
            SourceCategory::Other => self.other,
        }
    }

    pub fn source_mut(&mut self, category: SourceCategory) -> &mut f64 {
        match category {
            SourceCategory::Coal => &mut self.coal,
            SourceCategory::Oil => &mut self.oil,
            SourceCategory::Gas => &mut self.gas,
            SourceCategory::Cement => &mut self.cement,
            SourceCategory::Flaring => &mut self.flaring,
            SourceCategory::Other => &mut self.other,
        }
    }

    /// Sum of the six source fields
    pub fn source_sum(&self) -> f64 {
        SourceCategory::ALL.iter().map(|c| self.source(*c)).sum()
    }

    /// True if both records describe the same (country, year) observation
    pub fn same_observation(&self, other: &EmissionRecord) -> bool {
        self.year == other.year && self.country == other.country
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metrics & Categories
// ─────────────────────────────────────────────────────────────────────────────

/// Metric that colors the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    Population,
    #[serde(rename = "GDP")]
    Gdp,
    Total,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Population => "Population",
            Metric::Gdp => "GDP",
            Metric::Total => "Total",
        }
    }

    pub fn all() -> &'static [Metric] {
        &[Metric::Population, Metric::Gdp, Metric::Total]
    }

    /// Parse a metric from its display label (used by the `<select>` element)
    pub fn from_label(label: &str) -> Option<Metric> {
        Metric::all()
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Emission source category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceCategory {
    Coal,
    Oil,
    Gas,
    Cement,
    Flaring,
    Other,
}

impl SourceCategory {
    /// All categories in the order the pie chart shows them
    pub const ALL: [SourceCategory; 6] = [
        SourceCategory::Coal,
        SourceCategory::Oil,
        SourceCategory::Gas,
        SourceCategory::Cement,
        SourceCategory::Flaring,
        SourceCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SourceCategory::Coal => "Coal",
            SourceCategory::Oil => "Oil",
            SourceCategory::Gas => "Gas",
            SourceCategory::Cement => "Cement",
            SourceCategory::Flaring => "Flaring",
            SourceCategory::Other => "Other",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived View Types (shared between core and frontend)
// ─────────────────────────────────────────────────────────────────────────────

/// One sector of the emission-source breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSlice {
    pub category: SourceCategory,
    pub value: f64,
    /// Share of the six-source sum, rounded to two decimals (0-100)
    pub percentage: f64,
}

impl CompositionSlice {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

/// One year of a country's history for the line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub year: i32,
    pub emission_value: f64,
    pub gdp_value: f64,
}

/// Numeric extent of a metric across the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorDomain {
    pub min: f64,
    pub max: f64,
}

/// Inclusive year window shown on the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    #[serde(default = "default_min_year")]
    pub min: i32,
    #[serde(default = "default_max_year")]
    pub max: i32,
}

fn default_min_year() -> i32 {
    2003
}
fn default_max_year() -> i32 {
    2023
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: default_min_year(),
            max: default_max_year(),
        }
    }
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/bettyzzzr/fall2024-iv-final-project/refs/heads/main/15%E5%9B%BD%E7%A2%B3%E6%8E%92%E6%94%BE.csv";

/// Dashboard configuration (embedded TOML, every field optional).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// CSV source for the dataset
    #[serde(default = "default_data_url")]
    pub data_url: String,
    /// Metric the heatmap shows on first render
    #[serde(default)]
    pub default_metric: Metric,
    #[serde(default)]
    pub year_range: YearRange,
}

fn default_data_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            default_metric: Metric::default(),
            year_range: YearRange::default(),
        }
    }
}

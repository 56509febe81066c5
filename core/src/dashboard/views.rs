//! Per-chart views derived from the dataset and the selection.
//!
//! Views are plain values rebuilt on every render; charts receive them as props
//! and never write back.

use emissions_types::{EmissionRecord, Metric};
use hashbrown::HashMap;

use crate::query::{
    self, ColorDomain, CompositionSlice, QueryError, TimeSeriesPoint, YearRange,
};

use super::Selection;

// ─────────────────────────────────────────────────────────────────────────────
// Heatmap
// ─────────────────────────────────────────────────────────────────────────────

/// One colored cell: a row positioned on the (year, country) grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCell {
    /// Index into [`HeatmapView::years`]
    pub year_idx: usize,
    /// Index into [`HeatmapView::countries`]
    pub country_idx: usize,
    pub value: f64,
    pub record: EmissionRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapView {
    pub metric: Metric,
    /// X axis, ascending
    pub years: Vec<i32>,
    /// Y axis, largest emitter first
    pub countries: Vec<String>,
    pub cells: Vec<HeatmapCell>,
    /// None when there is nothing to color
    pub color_domain: Option<ColorDomain>,
}

impl HeatmapView {
    pub fn build(rows: &[EmissionRecord], metric: Metric, range: YearRange) -> Self {
        let years = query::year_domain(rows, range);
        let countries = query::country_order(rows);

        // The index borrows `countries`, so it must not outlive this block
        let cells = {
            let country_index: HashMap<&str, usize> = countries
                .iter()
                .enumerate()
                .map(|(i, c)| (c.as_str(), i))
                .collect();

            rows.iter()
                .filter_map(|r| {
                    let year_idx = years.binary_search(&r.year).ok()?;
                    let country_idx = *country_index.get(r.country.as_str())?;
                    let value = r.metric(metric);
                    Some(HeatmapCell {
                        year_idx,
                        country_idx,
                        value: if value.is_finite() { value } else { 0.0 },
                        record: r.clone(),
                    })
                })
                .collect()
        };

        let color_domain = match query::color_domain(rows, metric) {
            Ok(domain) => Some(domain),
            Err(QueryError::EmptyDataset) => None,
            Err(e) => {
                tracing::warn!(error = %e, "unexpected color domain failure");
                None
            }
        };

        Self {
            metric,
            years,
            countries,
            cells,
            color_domain,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row behind the cell at `idx`, as reported by a chart click
    pub fn record_at(&self, idx: usize) -> Option<&EmissionRecord> {
        self.cells.get(idx).map(|c| &c.record)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pie Chart
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum PieView {
    /// Nothing has been clicked yet
    NoSelection,
    /// Selected row has no emission sources to break down
    Degenerate { country: String, year: i32 },
    Composition {
        country: String,
        year: i32,
        slices: Vec<CompositionSlice>,
    },
}

impl PieView {
    pub fn build(selection: &Selection) -> Self {
        let Selection::Selected(record) = selection else {
            return PieView::NoSelection;
        };

        match query::composition(record) {
            Ok(slices) => PieView::Composition {
                country: record.country.clone(),
                year: record.year,
                slices,
            },
            Err(e) => {
                tracing::debug!(error = %e, "pie chart falls back to placeholder");
                PieView::Degenerate {
                    country: record.country.clone(),
                    year: record.year,
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Line Chart
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineView {
    /// Selected country, None before the first click
    pub country: Option<String>,
    pub points: Vec<TimeSeriesPoint>,
}

impl LineView {
    pub fn build(rows: &[EmissionRecord], selection: &Selection) -> Self {
        match selection {
            Selection::None => LineView::default(),
            Selection::Selected(record) => LineView {
                country: Some(record.country.clone()),
                points: query::time_series(rows, &record.country),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest emission value, 0 when empty
    pub fn emission_max(&self) -> f64 {
        self.points.iter().map(|p| p.emission_value).fold(0.0, f64::max)
    }

    /// Largest GDP value, 0 when empty
    pub fn gdp_max(&self) -> f64 {
        self.points.iter().map(|p| p.gdp_value).fold(0.0, f64::max)
    }
}

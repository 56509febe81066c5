//! Dashboard controller state machine.

use std::sync::Arc;

use emissions_types::{DashboardConfig, EmissionRecord, Metric, YearRange};

use crate::dataset::LoadError;

use super::{DashboardError, HeatmapView, LineView, PieView};

/// Lifecycle of the session's dataset
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DatasetState {
    /// Load has not resolved yet
    #[default]
    Unloaded,
    Loaded(Arc<[EmissionRecord]>),
    /// Load failed; no partial data is kept
    Unavailable { reason: String },
}

/// Currently highlighted row
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(EmissionRecord),
}

/// Owns the dataset and the selection, and derives every chart's input from them.
///
/// Only two events mutate it: the one-shot load completion and heatmap clicks
/// (plus the heatmap metric selector). Views are recomputed in full on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    dataset: DatasetState,
    selection: Selection,
    metric: Metric,
    year_range: YearRange,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            dataset: DatasetState::Unloaded,
            selection: Selection::None,
            metric: config.default_metric,
            year_range: config.year_range,
        }
    }

    pub fn dataset(&self) -> &DatasetState {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn set_metric(&mut self, metric: Metric) {
        if self.metric != metric {
            tracing::debug!(metric = metric.label(), "heatmap metric changed");
            self.metric = metric;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.dataset, DatasetState::Unloaded)
    }

    /// Rows of the loaded dataset, empty in any other state
    pub fn rows(&self) -> &[EmissionRecord] {
        match &self.dataset {
            DatasetState::Loaded(rows) => &rows[..],
            _ => &[],
        }
    }

    /// Resolve the one-shot load.
    ///
    /// The first call moves `Unloaded` to `Loaded` or `Unavailable`; later calls
    /// are rejected and leave the state untouched.
    pub fn complete_load(
        &mut self,
        result: Result<Vec<EmissionRecord>, LoadError>,
    ) -> Result<(), DashboardError> {
        if !self.is_loading() {
            tracing::warn!("ignoring repeated dataset load completion");
            return Err(DashboardError::LoadAlreadyResolved);
        }

        self.dataset = match result {
            Ok(rows) => {
                tracing::info!(rows = rows.len(), "dataset loaded");
                DatasetState::Loaded(rows.into())
            }
            Err(e) => {
                tracing::error!(error = %e, "dataset unavailable");
                DatasetState::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        Ok(())
    }

    /// Heatmap click entry point.
    ///
    /// The dataset's own copy of the matching row becomes the selection. A row
    /// that is not in the dataset is rejected and the selection is unchanged.
    pub fn select(&mut self, record: &EmissionRecord) -> Result<(), DashboardError> {
        let Some(found) = self.rows().iter().find(|r| r.same_observation(record)) else {
            tracing::warn!(
                country = %record.country,
                year = record.year,
                "ignoring selection of unknown row"
            );
            return Err(DashboardError::MissingSelectionTarget {
                country: record.country.clone(),
                year: record.year,
            });
        };

        tracing::debug!(country = %found.country, year = found.year, "row selected");
        self.selection = Selection::Selected(found.clone());
        Ok(())
    }

    pub fn heatmap_view(&self) -> HeatmapView {
        HeatmapView::build(self.rows(), self.metric, self.year_range)
    }

    pub fn pie_view(&self) -> PieView {
        PieView::build(&self.selection)
    }

    pub fn line_view(&self) -> LineView {
        LineView::build(self.rows(), &self.selection)
    }
}

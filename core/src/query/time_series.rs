//! Per-country time series (emissions and GDP over years).

use emissions_types::EmissionRecord;

use super::TimeSeriesPoint;

/// All rows for `country`, ascending by year.
///
/// A country with no rows yields an empty series, which is not an error.
pub fn time_series(rows: &[EmissionRecord], country: &str) -> Vec<TimeSeriesPoint> {
    let mut points: Vec<TimeSeriesPoint> = rows
        .iter()
        .filter(|r| r.country == country)
        .map(|r| TimeSeriesPoint {
            year: r.year,
            emission_value: finite_or_zero(r.total),
            gdp_value: finite_or_zero(r.gdp),
        })
        .collect();
    points.sort_by_key(|p| p.year);
    points
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

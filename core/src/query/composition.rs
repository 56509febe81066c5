//! Emission-source composition of a single row (pie chart input).

use emissions_types::{EmissionRecord, SourceCategory};

use super::{CompositionSlice, QueryError};

/// Percentages are apportioned in hundredths of a percent
const SCALE: u32 = 10_000;

/// Break a row into its six emission sources with their percentage shares.
///
/// Slices come back in [`SourceCategory::ALL`] order. Percentages are rounded to
/// two decimals using largest-remainder apportionment, so they always add up to
/// exactly 100.00. A row whose sources sum to zero yields
/// [`QueryError::DegenerateComposition`].
pub fn composition(record: &EmissionRecord) -> Result<Vec<CompositionSlice>, QueryError> {
    let values = SourceCategory::ALL.map(|c| {
        let v = record.source(c);
        if v.is_finite() { v.max(0.0) } else { 0.0 }
    });
    let max = values.iter().copied().fold(0.0, f64::max);

    if max <= 0.0 {
        return Err(QueryError::DegenerateComposition {
            country: record.country.clone(),
            year: record.year,
        });
    }

    // Relative to the largest source so huge finite values cannot overflow the sum
    let relative = values.map(|v| v / max);
    let sum: f64 = relative.iter().sum();
    let shares = relative.map(|v| v / sum * SCALE as f64);
    let mut hundredths = shares.map(|s| s.floor() as u32);

    // Hand the leftover hundredths to the largest fractional parts
    let assigned: u32 = hundredths.iter().sum();
    let mut by_remainder: Vec<usize> = (0..shares.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let ra = shares[a] - shares[a].floor();
        let rb = shares[b] - shares[b].floor();
        rb.total_cmp(&ra)
    });
    for &i in by_remainder.iter().take(SCALE.saturating_sub(assigned) as usize) {
        hundredths[i] += 1;
    }

    Ok(SourceCategory::ALL
        .iter()
        .zip(values)
        .zip(hundredths)
        .map(|((category, value), h)| CompositionSlice {
            category: *category,
            value,
            percentage: h as f64 / 100.0,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(coal: f64, oil: f64, gas: f64, cement: f64, flaring: f64, other: f64) -> EmissionRecord {
        EmissionRecord {
            country: "Testland".to_string(),
            year: 2015,
            total: coal + oil + gas + cement + flaring + other,
            coal,
            oil,
            gas,
            cement,
            flaring,
            other,
            ..Default::default()
        }
    }

    fn percentages(slices: &[CompositionSlice]) -> Vec<f64> {
        slices.iter().map(|s| s.percentage).collect()
    }

    #[test]
    fn test_exact_percentages() {
        let slices = composition(&sources(40.0, 30.0, 20.0, 5.0, 3.0, 2.0)).unwrap();

        assert_eq!(percentages(&slices), vec![40.0, 30.0, 20.0, 5.0, 3.0, 2.0]);
        let labels: Vec<_> = slices.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Coal", "Oil", "Gas", "Cement", "Flaring", "Other"]);
        assert_eq!(slices[0].value, 40.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let cases = [
            sources(1.0, 1.0, 1.0, 0.0, 0.0, 0.0),
            sources(1.0, 1.0, 1.0, 1.0, 1.0, 1.0),
            sources(7.0, 0.3, 11.1, 0.01, 2.0, 5.5),
            sources(1e9, 1.0, 0.0, 0.0, 0.0, 3.0),
            sources(0.0, 0.0, 0.0, 0.0, 0.0, 0.1),
        ];

        for record in &cases {
            let slices = composition(record).unwrap();
            let total: f64 = slices.iter().map(|s| s.percentage).sum();
            assert!((total - 100.0).abs() < 0.01, "sum was {total} for {record:?}");
            for s in &slices {
                assert!(s.percentage.is_finite());
                assert!(s.percentage >= 0.0);
                // two decimals at most
                let scaled = s.percentage * 100.0;
                assert!((scaled - scaled.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_thirds_round_to_two_decimals() {
        let slices = composition(&sources(1.0, 1.0, 1.0, 0.0, 0.0, 0.0)).unwrap();
        let mut shares = percentages(&slices)[..3].to_vec();
        shares.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(shares, vec![33.33, 33.33, 33.34]);
    }

    #[test]
    fn test_zero_sum_is_degenerate() {
        let err = composition(&sources(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            QueryError::DegenerateComposition {
                country: "Testland".to_string(),
                year: 2015,
            }
        );
    }

    #[test]
    fn test_huge_finite_sources_do_not_overflow() {
        let slices = composition(&sources(1e308, 1e308, 0.0, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(percentages(&slices), vec![50.0, 50.0, 0.0, 0.0, 0.0, 0.0]);

        let slices = composition(&sources(f64::MAX, 0.0, 0.0, 0.0, 0.0, f64::MAX)).unwrap();
        let total: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_non_finite_sources_count_as_zero() {
        let mut record = sources(50.0, 50.0, 0.0, 0.0, 0.0, 0.0);
        record.gas = f64::NAN;
        record.cement = -10.0;

        let slices = composition(&record).unwrap();
        assert_eq!(percentages(&slices), vec![50.0, 50.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(slices.iter().all(|s| s.value.is_finite()));

        let mut all_bad = sources(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        all_bad.coal = f64::NAN;
        assert!(composition(&all_bad).is_err());
    }
}

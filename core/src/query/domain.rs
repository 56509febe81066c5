//! Axis and color domains for the heatmap.

use emissions_types::{EmissionRecord, Metric};
use hashbrown::HashMap;

use super::{ColorDomain, QueryError, YearRange};

/// Distinct years inside `range`, ascending.
pub fn year_domain(rows: &[EmissionRecord], range: YearRange) -> Vec<i32> {
    let mut years: Vec<i32> = rows
        .iter()
        .map(|r| r.year)
        .filter(|y| range.contains(*y))
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Distinct countries ordered by descending sum of `Total` over all years.
///
/// Countries with equal sums keep the order in which they first appear.
pub fn country_order(rows: &[EmissionRecord]) -> Vec<String> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let value = if row.total.is_finite() { row.total } else { 0.0 };
        match index.get(row.country.as_str()) {
            Some(&i) => totals[i].1 += value,
            None => {
                index.insert(row.country.as_str(), totals.len());
                totals.push((row.country.as_str(), value));
            }
        }
    }

    // sort_by is stable, which preserves first-seen order on ties
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals.into_iter().map(|(c, _)| c.to_string()).collect()
}

/// `[min, max]` of `metric` across all rows.
pub fn color_domain(rows: &[EmissionRecord], metric: Metric) -> Result<ColorDomain, QueryError> {
    let mut values = rows
        .iter()
        .map(|r| r.metric(metric))
        .filter(|v| v.is_finite());

    let first = values.next().ok_or(QueryError::EmptyDataset)?;
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Ok(ColorDomain { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, year: i32, total: f64) -> EmissionRecord {
        EmissionRecord {
            country: country.to_string(),
            year,
            total,
            population: total * 3.0,
            gdp: total / 2.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_year_domain_sorted_distinct_and_bounded() {
        let rows = vec![
            row("A", 2010, 1.0),
            row("B", 2005, 1.0),
            row("A", 2005, 1.0),
            row("C", 1999, 1.0),
            row("C", 2024, 1.0),
            row("C", 2023, 1.0),
            row("C", 2003, 1.0),
        ];

        let years = year_domain(&rows, YearRange::default());
        assert_eq!(years, vec![2003, 2005, 2010, 2023]);
    }

    #[test]
    fn test_year_domain_respects_custom_range() {
        let rows = vec![row("A", 2010, 1.0), row("A", 2015, 1.0), row("A", 2020, 1.0)];
        let years = year_domain(&rows, YearRange { min: 2011, max: 2020 });
        assert_eq!(years, vec![2015, 2020]);
    }

    #[test]
    fn test_country_order_descending_by_total() {
        let rows = vec![
            row("Small", 2020, 1.0),
            row("Big", 2020, 50.0),
            row("Mid", 2020, 10.0),
            row("Small", 2021, 2.0),
            row("Mid", 2021, 30.0),
        ];

        assert_eq!(country_order(&rows), vec!["Big", "Mid", "Small"]);
    }

    #[test]
    fn test_country_order_is_stable_on_ties() {
        let rows = vec![
            row("Second", 2020, 5.0),
            row("First", 2020, 10.0),
            row("Third", 2020, 3.0),
            row("Third", 2021, 2.0),
            row("Fourth", 2020, 5.0),
        ];

        // Second, Third and Fourth all total 5 and keep first-seen order
        assert_eq!(
            country_order(&rows),
            vec!["First", "Second", "Third", "Fourth"]
        );
    }

    #[test]
    fn test_country_order_is_permutation_of_distinct_countries() {
        let rows = vec![
            row("A", 2020, 3.0),
            row("B", 2020, 1.0),
            row("A", 2021, 3.0),
            row("C", 2020, 7.0),
            row("B", 2021, 9.0),
        ];

        let mut order = country_order(&rows);
        assert_eq!(order.len(), 3);
        order.sort();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_color_domain_extent() {
        let rows = vec![row("A", 2020, 4.0), row("B", 2020, 1.0), row("C", 2020, 9.0)];

        let domain = color_domain(&rows, Metric::Total).unwrap();
        assert_eq!(domain, ColorDomain { min: 1.0, max: 9.0 });

        let domain = color_domain(&rows, Metric::Population).unwrap();
        assert_eq!(domain, ColorDomain { min: 3.0, max: 27.0 });
    }

    #[test]
    fn test_color_domain_empty_dataset() {
        assert_eq!(
            color_domain(&[], Metric::Gdp),
            Err(QueryError::EmptyDataset)
        );
    }

    #[test]
    fn test_empty_rows_produce_empty_domains() {
        assert!(year_domain(&[], YearRange::default()).is_empty());
        assert!(country_order(&[]).is_empty());
    }
}

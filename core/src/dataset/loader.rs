//! CSV → EmissionRecord conversion with per-field numeric coercion.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use emissions_types::{EmissionRecord, SourceCategory};
use hashbrown::HashSet;

use super::LoadError;

/// Numeric columns of the dataset, in header order.
#[derive(Debug, Clone, Copy, PartialEq)]
enum NumericField {
    Total,
    Population,
    Gdp,
    Source(SourceCategory),
}

impl NumericField {
    const ALL: [NumericField; 9] = [
        NumericField::Total,
        NumericField::Population,
        NumericField::Gdp,
        NumericField::Source(SourceCategory::Coal),
        NumericField::Source(SourceCategory::Oil),
        NumericField::Source(SourceCategory::Gas),
        NumericField::Source(SourceCategory::Cement),
        NumericField::Source(SourceCategory::Flaring),
        NumericField::Source(SourceCategory::Other),
    ];

    fn header(self) -> &'static str {
        match self {
            NumericField::Total => "Total",
            NumericField::Population => "Population",
            NumericField::Gdp => "GDP",
            NumericField::Source(category) => category.label(),
        }
    }

    fn slot(self, record: &mut EmissionRecord) -> &mut f64 {
        match self {
            NumericField::Total => &mut record.total,
            NumericField::Population => &mut record.population,
            NumericField::Gdp => &mut record.gdp,
            NumericField::Source(category) => record.source_mut(category),
        }
    }
}

/// Header positions resolved once per file
struct ColumnMap {
    country: usize,
    year: usize,
    numeric: Vec<(NumericField, Option<usize>)>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers.iter().position(|h| {
                h.trim_start_matches('\u{feff}')
                    .trim()
                    .eq_ignore_ascii_case(name)
            })
        };

        let country = find("Country").ok_or(LoadError::MissingColumn { name: "Country" })?;
        let year = find("Year").ok_or(LoadError::MissingColumn { name: "Year" })?;

        let numeric = NumericField::ALL
            .iter()
            .map(|field| {
                let idx = find(field.header());
                if idx.is_none() {
                    tracing::warn!(column = field.header(), "column missing, values default to 0");
                }
                (*field, idx)
            })
            .collect();

        Ok(Self {
            country,
            year,
            numeric,
        })
    }
}

/// Coerce a raw CSV cell to a finite, non-negative number.
///
/// Empty, unparseable, non-finite and negative values all become `0.0`.
pub fn coerce_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    // Some exports write years as floats ("2020.0")
    let v: f64 = raw.parse().ok()?;
    (v.is_finite() && v.fract() == 0.0 && v.abs() <= i32::MAX as f64).then_some(v as i32)
}

/// Parse the dataset from CSV text.
pub fn parse_csv(text: &str) -> Result<Vec<EmissionRecord>, LoadError> {
    parse_reader(text.as_bytes())
}

/// Parse the dataset from any CSV byte source.
///
/// Rows without a country or a readable year are dropped, as are repeated
/// (country, year) pairs after the first. Numeric cells never fail a row.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<EmissionRecord>, LoadError> {
    let mut csv = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::resolve(csv.headers()?)?;

    let mut seen: HashSet<(String, i32)> = HashSet::new();
    let mut records = Vec::new();
    let mut coerced_cells = 0usize;

    for result in csv.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let country = row.get(columns.country).unwrap_or_default().trim();
        if country.is_empty() {
            tracing::warn!(line, "dropping row without a country");
            continue;
        }

        let raw_year = row.get(columns.year).unwrap_or_default();
        let Some(year) = parse_year(raw_year) else {
            tracing::warn!(line, country, year = raw_year, "dropping row with unreadable year");
            continue;
        };

        if !seen.insert((country.to_string(), year)) {
            tracing::warn!(line, country, year, "dropping duplicate country/year row");
            continue;
        }

        let mut record = EmissionRecord {
            country: country.to_string(),
            year,
            ..Default::default()
        };

        for (field, idx) in &columns.numeric {
            let raw = idx.and_then(|i| row.get(i)).unwrap_or_default();
            let value = coerce_number(raw);
            if value == 0.0 && !raw.trim().is_empty() && raw.trim().parse::<f64>() != Ok(0.0) {
                coerced_cells += 1;
                tracing::debug!(line, column = field.header(), raw, "coerced to 0");
            }
            *field.slot(&mut record) = value;
        }

        records.push(record);
    }

    tracing::info!(rows = records.len(), coerced_cells, "parsed emissions dataset");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Country,Year,Total,Population,GDP,Coal,Oil,Gas,Cement,Flaring,Other";

    #[test]
    fn test_parses_well_formed_rows() {
        let text = format!(
            "{HEADER}\nUSA,2020,100,300,20,40,30,20,5,3,2\nChina,2021,200,1400,150,120,40,20,15,2,3\n"
        );
        let rows = parse_csv(&text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "USA");
        assert_eq!(rows[0].year, 2020);
        assert_eq!(rows[0].total, 100.0);
        assert_eq!(rows[0].population, 300.0);
        assert_eq!(rows[0].gdp, 20.0);
        assert_eq!(rows[0].coal, 40.0);
        assert_eq!(rows[0].other, 2.0);
        assert_eq!(rows[1].country, "China");
    }

    #[test]
    fn test_malformed_numbers_coerce_to_zero_per_field() {
        let text = format!("{HEADER}\nUSA,2020,100,n/a,,40,-3,NaN,inf,3,2\n");
        let rows = parse_csv(&text).unwrap();

        let row = &rows[0];
        assert_eq!(row.total, 100.0);
        assert_eq!(row.population, 0.0);
        assert_eq!(row.gdp, 0.0);
        assert_eq!(row.coal, 40.0);
        assert_eq!(row.oil, 0.0, "negative values clamp to zero");
        assert_eq!(row.gas, 0.0);
        assert_eq!(row.cement, 0.0);
        assert_eq!(row.flaring, 3.0);
    }

    #[test]
    fn test_headers_match_case_insensitively_and_ignore_bom() {
        let text = "\u{feff}country, YEAR ,total,population,gdp,coal,oil,gas,cement,flaring,other,Extra\n\
                    India,2010,50,1200,30,30,10,5,3,1,1,ignored\n";
        let rows = parse_csv(text).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "India");
        assert_eq!(rows[0].year, 2010);
        assert_eq!(rows[0].gdp, 30.0);
    }

    #[test]
    fn test_missing_numeric_column_defaults_to_zero() {
        let text = "Country,Year,Total,Coal\nUSA,2020,100,40\n";
        let rows = parse_csv(text).unwrap();

        assert_eq!(rows[0].total, 100.0);
        assert_eq!(rows[0].coal, 40.0);
        assert_eq!(rows[0].gdp, 0.0);
        assert_eq!(rows[0].population, 0.0);
    }

    #[test]
    fn test_missing_key_column_is_an_error() {
        let err = parse_csv("Nation,Year,Total\nUSA,2020,1\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { name: "Country" }));

        let err = parse_csv("Country,Total\nUSA,1\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { name: "Year" }));
    }

    #[test]
    fn test_drops_unkeyed_and_duplicate_rows() {
        let text = format!(
            "{HEADER}\n\
             ,2020,1,1,1,1,1,1,1,1,1\n\
             USA,twenty,1,1,1,1,1,1,1,1,1\n\
             USA,2020.0,5,1,1,1,1,1,1,1,1\n\
             USA,2020,9,1,1,1,1,1,1,1,1\n"
        );
        let rows = parse_csv(&text).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, 2020);
        assert_eq!(rows[0].total, 5.0, "first occurrence wins");
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let text = format!("{HEADER}\nUSA,2020,100\n");
        let rows = parse_csv(&text).unwrap();

        assert_eq!(rows[0].total, 100.0);
        assert_eq!(rows[0].source_sum(), 0.0);
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let rows = parse_csv(&format!("{HEADER}\n")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(" 12.5 "), 12.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("-1"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
    }
}

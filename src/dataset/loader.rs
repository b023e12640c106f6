//! CSV series loading
//!
//! Parses the two-column `Date,Price` files the dashboard consumes. Dates
//! use the `%d-%b-%Y` format (`1-Jan-2013`). Rows that fail to parse are
//! skipped and reported rather than failing the whole file.

use std::io;
use std::path::Path;

use chrono::NaiveDate;

use super::error::{DatasetError, DatasetResult};
use super::types::{Family, Series, SeriesPoint, SeriesStore};

/// Default timestamp format: day, abbreviated month, four-digit year
const DEFAULT_DATE_FORMAT: &str = "%d-%b-%Y";

/// CSV loader for the fixed `Date,Price` layout
pub struct SeriesLoader {
    date_format: String,
}

/// Result of loading one series, including per-row failures
#[derive(Debug)]
pub struct LoadReport {
    pub series: Series,
    pub rows_loaded: usize,
    pub rows_skipped: usize,
    pub errors: Vec<String>,
}

impl Default for SeriesLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesLoader {
    pub fn new() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Override the date format string
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Load a series from a CSV file on disk
    pub fn load_path(&self, family: Family, path: &Path) -> DatasetResult<LoadReport> {
        let file = std::fs::File::open(path)?;
        self.load_reader(family, file)
    }

    /// Load a series from any reader (the WASM frontend passes fetched bytes)
    pub fn load_reader<R: io::Read>(&self, family: Family, rdr: R) -> DatasetResult<LoadReport> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);

        let headers = reader.headers()?.clone();
        let date_col = find_column(&headers, "date").ok_or(DatasetError::MissingColumn("Date"))?;
        let value_col =
            find_column(&headers, "price").ok_or(DatasetError::MissingColumn("Price"))?;

        let mut points = Vec::new();
        let mut rows_skipped = 0;
        let mut errors = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            // +2: one for the header, one for 1-based numbering
            let line = row_idx + 2;

            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    errors.push(format!("Line {}: {}", line, e));
                    rows_skipped += 1;
                    continue;
                }
            };

            let date_str = match record.get(date_col) {
                Some(s) if !s.trim().is_empty() => s.trim(),
                _ => {
                    errors.push(format!("Line {}: missing date", line));
                    rows_skipped += 1;
                    continue;
                }
            };

            let date = match NaiveDate::parse_from_str(date_str, &self.date_format) {
                Ok(d) => d,
                Err(e) => {
                    errors.push(format!("Line {}: bad date '{}': {}", line, date_str, e));
                    rows_skipped += 1;
                    continue;
                }
            };

            let value_str = match record.get(value_col) {
                Some(s) if !s.trim().is_empty() => s.trim(),
                _ => {
                    errors.push(format!("Line {}: missing value", line));
                    rows_skipped += 1;
                    continue;
                }
            };

            let value = match value_str.parse::<f64>() {
                Ok(v) => v,
                Err(e) => {
                    errors.push(format!("Line {}: bad value '{}': {}", line, value_str, e));
                    rows_skipped += 1;
                    continue;
                }
            };

            points.push(SeriesPoint::new(date, value));
        }

        if points.is_empty() {
            return Err(DatasetError::Empty);
        }

        let rows_loaded = points.len();
        Ok(LoadReport {
            series: Series::new(family, points),
            rows_loaded,
            rows_skipped,
            errors,
        })
    }

    /// Load all three family files from a data directory
    ///
    /// Load failures are logged and swallowed; the slot stays empty and the
    /// UI renders the empty-chart state for it. No retry, no fallback.
    pub fn load_all(&self, data_dir: &Path) -> SeriesStore {
        let mut store = SeriesStore::new();

        for family in Family::all() {
            let path = data_dir.join(family.file_name());
            match self.load_path(*family, &path) {
                Ok(report) => {
                    if report.rows_skipped > 0 {
                        tracing::warn!(
                            family = family.name(),
                            skipped = report.rows_skipped,
                            "some rows failed to parse: {:?}",
                            report.errors
                        );
                    }
                    tracing::info!(
                        family = family.name(),
                        rows = report.rows_loaded,
                        "loaded series from {:?}",
                        path
                    );
                    store.insert(report.series);
                }
                Err(e) => {
                    tracing::warn!(family = family.name(), "failed to load {:?}: {}", path, e);
                }
            }
        }

        store
    }
}

/// Find a column index by case-insensitive name
fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Date,Price
1-Jan-2013,3.32
1-Feb-2013,3.56
1-Mar-2013,3.65
";

    #[test]
    fn test_load_reader_parses_dates_and_values() {
        let report = SeriesLoader::new()
            .load_reader(Family::Gas, SAMPLE.as_bytes())
            .unwrap();

        assert_eq!(report.rows_loaded, 3);
        assert_eq!(report.rows_skipped, 0);
        assert!(report.errors.is_empty());

        let points = report.series.points();
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2013, 1, 1).unwrap());
        assert_eq!(points[0].value, 3.32);
        assert_eq!(points[2].date, NaiveDate::from_ymd_opt(2013, 3, 1).unwrap());
    }

    #[test]
    fn test_malformed_rows_are_skipped_not_fatal() {
        let input = "\
Date,Price
1-Jan-2013,3.32
not-a-date,3.56
1-Mar-2013,oops
1-Apr-2013,3.55
";
        let report = SeriesLoader::new()
            .load_reader(Family::Gas, input.as_bytes())
            .unwrap();

        assert_eq!(report.rows_loaded, 2);
        assert_eq!(report.rows_skipped, 2);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("Line 3"));
    }

    #[test]
    fn test_missing_price_column() {
        let input = "Date,Cost\n1-Jan-2013,3.32\n";
        let err = SeriesLoader::new()
            .load_reader(Family::Gas, input.as_bytes())
            .unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Price")));
    }

    #[test]
    fn test_missing_date_column() {
        let input = "Month,Price\n1-Jan-2013,3.32\n";
        let err = SeriesLoader::new()
            .load_reader(Family::Gas, input.as_bytes())
            .unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Date")));
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let input = "Date,Price\n";
        let err = SeriesLoader::new()
            .load_reader(Family::Gas, input.as_bytes())
            .unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_column_lookup_is_case_insensitive() {
        let input = "DATE,price\n1-Jan-2013,3.32\n";
        let report = SeriesLoader::new()
            .load_reader(Family::Gas, input.as_bytes())
            .unwrap();
        assert_eq!(report.rows_loaded, 1);
    }

    #[test]
    fn test_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gas_prices.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let report = SeriesLoader::new().load_path(Family::Gas, &path).unwrap();
        assert_eq!(report.rows_loaded, 3);
    }

    #[test]
    fn test_load_all_leaves_missing_files_empty() {
        let dir = tempfile::tempdir().unwrap();
        // Only the gas file exists
        let path = dir.path().join(Family::Gas.file_name());
        std::fs::write(&path, SAMPLE).unwrap();

        let store = SeriesLoader::new().load_all(dir.path());
        assert_eq!(store.loaded_count(), 1);
        assert!(store.is_loaded(Family::Gas));
        assert!(!store.is_loaded(Family::Crude));
        assert!(!store.is_loaded(Family::Inflation));
    }
}

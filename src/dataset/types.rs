//! Core dataset types
//!
//! `Family` identifies one of the three tracked economic series and carries
//! the static chart metadata the original dashboard hardcoded per series:
//! title, unit, y-axis ceiling, CSV file name, and source links.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Timeline of oil dependence events used for every family's annotations
pub const EVENT_SOURCE_URL: &str =
    "https://www.cfr.org/timeline/oil-dependence-and-us-foreign-policy";

/// One of the three tracked economic series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Gas,
    Crude,
    Inflation,
}

impl Family {
    /// All families in display order
    pub fn all() -> &'static [Family] {
        &[Family::Gas, Family::Crude, Family::Inflation]
    }

    /// Chart title shown above the plot
    pub fn title(&self) -> &'static str {
        match self {
            Family::Gas => "Gasoline Prices",
            Family::Crude => "Crude Oil Prices",
            Family::Inflation => "Inflation Percentage",
        }
    }

    /// Value unit for axis labels and tooltips
    pub fn unit(&self) -> Unit {
        match self {
            Family::Gas | Family::Crude => Unit::Dollars,
            Family::Inflation => Unit::Percent,
        }
    }

    /// Fixed y-axis maximum for this family's chart
    pub fn y_max(&self) -> f64 {
        match self {
            Family::Gas => 5.0,
            Family::Crude => 120.0,
            Family::Inflation => 7.0,
        }
    }

    /// CSV file name under the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Family::Gas => "gas_prices.csv",
            Family::Crude => "crude_oil_prices.csv",
            Family::Inflation => "inflation.csv",
        }
    }

    /// Where the underlying data comes from
    pub fn data_source_url(&self) -> &'static str {
        match self {
            Family::Gas => "https://data.bls.gov/timeseries/APU000074714",
            Family::Crude => {
                "https://www.eia.gov/dnav/pet/hist/LeafHandler.ashx?n=PET&s=RWTC&f=M"
            }
            Family::Inflation => {
                "https://data.bls.gov/timeseries/CUUR0000SA0L1E?output_view=pct_12mths"
            }
        }
    }

    /// Parse a family from its manifest/URL name
    pub fn from_name(name: &str) -> Option<Family> {
        match name.to_lowercase().as_str() {
            "gas" => Some(Family::Gas),
            "crude" => Some(Family::Crude),
            "inflation" => Some(Family::Inflation),
            _ => None,
        }
    }

    /// Manifest/URL name for this family
    pub fn name(&self) -> &'static str {
        match self {
            Family::Gas => "gas",
            Family::Crude => "crude",
            Family::Inflation => "inflation",
        }
    }
}

/// How a family's values are denominated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Dollars,
    Percent,
}

impl Unit {
    /// Y-axis caption
    pub fn axis_label(&self) -> &'static str {
        match self {
            Unit::Dollars => "Price (in $)",
            Unit::Percent => "Percent",
        }
    }
}

/// A single monthly observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar month the value was recorded for
    pub date: NaiveDate,
    /// Price in dollars, or percent for the inflation series
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// An ordered, immutable run of monthly observations for one family
///
/// Loaded once at startup and never mutated afterwards; there is no
/// mutating API past construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    family: Family,
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(family: Family, points: Vec<SeriesPoint>) -> Self {
        Self { family, points }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last observation dates, in file order
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.date, last.date))
    }
}

/// The three series slots
///
/// A slot stays `None` when its file failed to load; callers render the
/// empty-chart state for a missing slot rather than erroring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    gas: Option<Series>,
    crude: Option<Series>,
    inflation: Option<Series>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, family: Family) -> Option<&Series> {
        match family {
            Family::Gas => self.gas.as_ref(),
            Family::Crude => self.crude.as_ref(),
            Family::Inflation => self.inflation.as_ref(),
        }
    }

    /// Fill a slot; each slot is written at most once, at load time
    pub fn insert(&mut self, series: Series) {
        let slot = match series.family() {
            Family::Gas => &mut self.gas,
            Family::Crude => &mut self.crude,
            Family::Inflation => &mut self.inflation,
        };
        *slot = Some(series);
    }

    pub fn is_loaded(&self, family: Family) -> bool {
        self.get(family).is_some()
    }

    /// Number of slots that loaded successfully
    pub fn loaded_count(&self) -> usize {
        Family::all().iter().filter(|f| self.is_loaded(**f)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_family_metadata() {
        assert_eq!(Family::Gas.y_max(), 5.0);
        assert_eq!(Family::Crude.y_max(), 120.0);
        assert_eq!(Family::Inflation.y_max(), 7.0);
        assert_eq!(Family::Gas.unit(), Unit::Dollars);
        assert_eq!(Family::Inflation.unit(), Unit::Percent);
        assert_eq!(Family::Crude.title(), "Crude Oil Prices");
    }

    #[test]
    fn test_family_from_name() {
        assert_eq!(Family::from_name("gas"), Some(Family::Gas));
        assert_eq!(Family::from_name("Crude"), Some(Family::Crude));
        assert_eq!(Family::from_name("cpi"), None);
        for family in Family::all() {
            assert_eq!(Family::from_name(family.name()), Some(*family));
        }
    }

    #[test]
    fn test_series_date_extent() {
        let series = Series::new(
            Family::Gas,
            vec![
                SeriesPoint::new(date(2013, 1, 1), 3.32),
                SeriesPoint::new(date(2013, 2, 1), 3.56),
                SeriesPoint::new(date(2023, 6, 1), 3.57),
            ],
        );
        assert_eq!(
            series.date_extent(),
            Some((date(2013, 1, 1), date(2023, 6, 1)))
        );

        let empty = Series::new(Family::Gas, Vec::new());
        assert_eq!(empty.date_extent(), None);
    }

    #[test]
    fn test_store_slots_are_independent() {
        let mut store = SeriesStore::new();
        assert_eq!(store.loaded_count(), 0);

        let gas = Series::new(Family::Gas, vec![SeriesPoint::new(date(2013, 1, 1), 3.32)]);
        store.insert(gas.clone());
        assert_eq!(store.loaded_count(), 1);
        assert!(store.is_loaded(Family::Gas));
        assert!(!store.is_loaded(Family::Crude));

        // Filling another slot leaves the first untouched
        store.insert(Series::new(
            Family::Crude,
            vec![SeriesPoint::new(date(2013, 1, 1), 94.76)],
        ));
        assert_eq!(store.get(Family::Gas), Some(&gas));
        assert_eq!(store.loaded_count(), 2);
    }
}

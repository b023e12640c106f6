//! Hover tooltip formatting

use chrono::NaiveDate;

use crate::dataset::Unit;

/// Formatted tooltip text for a hovered point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// `Date: 01-Jun-22`
    pub date_line: String,
    /// `Price: $5.03` or `Percent: 6.5%`
    pub value_line: String,
}

impl Tooltip {
    pub fn new(date: NaiveDate, value: f64, unit: Unit) -> Self {
        let value_line = match unit {
            Unit::Dollars => format!("Price: ${:.2}", value),
            Unit::Percent => format!("Percent: {:.1}%", value),
        };
        Self {
            date_line: format!("Date: {}", format_date(date)),
            value_line,
        }
    }
}

/// Tooltip date format: day, abbreviated month, two-digit year
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%b-%y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dollar_tooltip() {
        let tip = Tooltip::new(date(2022, 6, 1), 5.03, Unit::Dollars);
        assert_eq!(tip.date_line, "Date: 01-Jun-22");
        assert_eq!(tip.value_line, "Price: $5.03");
    }

    #[test]
    fn test_percent_tooltip() {
        let tip = Tooltip::new(date(2022, 9, 1), 6.5, Unit::Percent);
        assert_eq!(tip.date_line, "Date: 01-Sep-22");
        assert_eq!(tip.value_line, "Percent: 6.5%");
    }
}

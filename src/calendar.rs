//! Dates for the project tracker
//!
//! A [`Calendar`] bundles the date text format with a [`Clock`] and is
//! handed to every operation that needs "today" or has to parse or render
//! a date. Nothing here is process-global.

use crate::error::{Result, TrackerError};
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use std::fmt;
use std::sync::Arc;

/// chrono pattern for MM/dd/yyyy
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Source of the current date
pub trait Clock: fmt::Debug + Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        local_date_today()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Strict date text format
///
/// Parsing only accepts input that renders back to exactly the same text,
/// so unpadded fields and out-of-calendar dates are both rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DateFormat {
    /// Build a format from a chrono pattern
    ///
    /// The pattern must round-trip a sample date, which rules out patterns
    /// that drop the year, month or day.
    pub fn new(pattern: &str) -> Result<Self> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TrackerError::Config(format!(
                "date format '{}' is not a valid pattern",
                pattern
            )));
        }
        let format = Self {
            pattern: pattern.to_string(),
        };
        let sample = NaiveDate::from_ymd_opt(2099, 12, 31)
            .ok_or_else(|| TrackerError::Config("sample date out of range".to_string()))?;
        match format.parse(&format.format(sample)) {
            Ok(parsed) if parsed == sample => Ok(format),
            _ => Err(TrackerError::Config(format!(
                "date format '{}' cannot represent a full calendar date",
                pattern
            ))),
        }
    }

    /// Human readable form of the pattern, e.g. "MM/dd/yyyy"
    pub fn hint(&self) -> String {
        self.pattern
            .replace("%m", "MM")
            .replace("%d", "dd")
            .replace("%Y", "yyyy")
    }

    pub fn parse(&self, input: &str) -> Result<NaiveDate> {
        let invalid = || TrackerError::invalid(format!("Invalid date format. Use {}", self.hint()));
        let date = NaiveDate::parse_from_str(input, &self.pattern).map_err(|_| invalid())?;
        if self.format(date) != input {
            return Err(invalid());
        }
        Ok(date)
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.pattern).to_string()
    }
}

/// Date format plus clock
#[derive(Debug, Clone)]
pub struct Calendar {
    format: DateFormat,
    clock: Arc<dyn Clock>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DateFormat::default(), Arc::new(SystemClock))
    }
}

impl Calendar {
    pub fn new(format: DateFormat, clock: Arc<dyn Clock>) -> Self {
        Self { format, clock }
    }

    /// Default format with a clock pinned to `today`
    pub fn fixed(today: NaiveDate) -> Self {
        Self::new(DateFormat::default(), Arc::new(FixedClock(today)))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.format
    }

    pub fn parse_date(&self, input: &str) -> Result<NaiveDate> {
        self.format.parse(input)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        self.format.format(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_default_format() {
        let format = DateFormat::default();
        assert_eq!(format.parse("12/31/2099").unwrap(), date(2099, 12, 31));
        assert_eq!(format.parse("01/05/2099").unwrap(), date(2099, 1, 5));
    }

    #[test]
    fn test_parse_rejects_invalid_dates() {
        let format = DateFormat::default();
        for input in ["13/45/2099", "02/30/2099", "1/5/2099", "2099-12-31", "", "12/31/2099 "] {
            let err = format.parse(input).unwrap_err();
            assert_eq!(
                err,
                TrackerError::InvalidArgument("Invalid date format. Use MM/dd/yyyy".to_string()),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_format_round_trip_text() {
        let format = DateFormat::default();
        assert_eq!(format.format(date(2099, 3, 7)), "03/07/2099");
    }

    #[test]
    fn test_custom_pattern() {
        let format = DateFormat::new("%Y-%m-%d").unwrap();
        assert_eq!(format.parse("2099-12-31").unwrap(), date(2099, 12, 31));
        assert_eq!(format.hint(), "yyyy-MM-dd");
        assert!(format.parse("12/31/2099").is_err());
    }

    #[test]
    fn test_pattern_without_year_is_rejected() {
        assert!(matches!(DateFormat::new("%m/%d"), Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        assert!(matches!(DateFormat::new("%Q/%d/%Y"), Err(TrackerError::Config(_))));
    }

    #[test]
    fn test_fixed_calendar_today() {
        let calendar = Calendar::fixed(date(2030, 6, 1));
        assert_eq!(calendar.today(), date(2030, 6, 1));
        assert_eq!(calendar.format_date(calendar.today()), "06/01/2030");
    }
}

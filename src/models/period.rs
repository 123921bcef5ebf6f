//! Report period representation
//!
//! A calendar month or calendar year, validated on construction so every
//! aggregation receives a well-formed, inclusive date window.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// Granularity of a report period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PeriodKind {
    /// Calendar month (e.g., "2024-10")
    Month { year: i32, month: u32 },
    /// Calendar year (e.g., "2024")
    Year { year: i32 },
}

/// A validated calendar window with inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    kind: PeriodKind,
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    /// Create a monthly period
    ///
    /// Months outside 1..=12, or years chrono cannot represent, are rejected.
    pub fn month(year: i32, month: u32) -> LedgerResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::InvalidArgument(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| year_out_of_range(year))?;
        let next_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end = next_start
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| year_out_of_range(year))?;

        Ok(Self {
            kind: PeriodKind::Month { year, month },
            start,
            end,
        })
    }

    /// Create a yearly period
    pub fn year(year: i32) -> LedgerResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| year_out_of_range(year))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| year_out_of_range(year))?;

        Ok(Self {
            kind: PeriodKind::Year { year },
            start,
            end,
        })
    }

    /// The month containing the given date
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = Self::month(date.year(), date.month())
            .map(|p| p.end)
            .unwrap_or(date);
        Self {
            kind: PeriodKind::Month {
                year: date.year(),
                month: date.month(),
            },
            start,
            end,
        }
    }

    /// Get the current monthly period
    pub fn current_month() -> Self {
        Self::month_of(chrono::Local::now().date_naive())
    }

    /// Granularity and calendar coordinates
    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// Calendar year of the period
    pub fn year_number(&self) -> i32 {
        match self.kind {
            PeriodKind::Month { year, .. } | PeriodKind::Year { year } => year,
        }
    }

    /// First day of the period
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Monthly: "2024-10"
    /// - Yearly: "2024"
    pub fn parse(s: &str) -> LedgerResult<Self> {
        let s = s.trim();
        let invalid = || {
            LedgerError::InvalidArgument(format!(
                "invalid period '{}', expected YYYY-MM or YYYY",
                s
            ))
        };

        match s.split_once('-') {
            Some((year, month)) => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let month: u32 = month.parse().map_err(|_| invalid())?;
                Self::month(year, month)
            }
            None => {
                let year: i32 = s.parse().map_err(|_| invalid())?;
                Self::year(year)
            }
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PeriodKind::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            PeriodKind::Year { year } => write!(f, "{:04}", year),
        }
    }
}

fn year_out_of_range(year: i32) -> LedgerError {
    LedgerError::InvalidArgument(format!("year {} is outside the supported calendar", year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_bounds() {
        let period = ReportPeriod::month(2024, 2).unwrap();
        assert_eq!(period.start_date(), date(2024, 2, 1));
        assert_eq!(period.end_date(), date(2024, 2, 29));

        let december = ReportPeriod::month(2024, 12).unwrap();
        assert_eq!(december.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_yearly_bounds() {
        let period = ReportPeriod::year(2024).unwrap();
        assert_eq!(period.start_date(), date(2024, 1, 1));
        assert_eq!(period.end_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_year_number() {
        assert_eq!(ReportPeriod::year(2023).unwrap().year_number(), 2023);
        assert_eq!(ReportPeriod::month(2024, 2).unwrap().year_number(), 2024);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(matches!(
            ReportPeriod::month(2024, 13),
            Err(LedgerError::InvalidArgument(_))
        ));
        assert!(ReportPeriod::month(2024, 0).is_err());
        assert!(ReportPeriod::year(i32::MAX).is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let october = ReportPeriod::month(2024, 10).unwrap();
        assert!(october.contains(date(2024, 10, 1)));
        assert!(october.contains(date(2024, 10, 31)));
        assert!(!october.contains(date(2024, 11, 1)));
        assert!(!october.contains(date(2024, 9, 30)));
    }

    #[test]
    fn test_month_of() {
        let period = ReportPeriod::month_of(date(2024, 10, 17));
        assert_eq!(period, ReportPeriod::month(2024, 10).unwrap());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            ReportPeriod::parse("2024-10").unwrap(),
            ReportPeriod::month(2024, 10).unwrap()
        );
        assert_eq!(
            ReportPeriod::parse("2024").unwrap(),
            ReportPeriod::year(2024).unwrap()
        );
        assert!(ReportPeriod::parse("2024-13").is_err());
        assert!(ReportPeriod::parse("October").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ReportPeriod::month(2024, 3).unwrap().to_string(), "2024-03");
        assert_eq!(ReportPeriod::year(2024).unwrap().to_string(), "2024");
    }
}

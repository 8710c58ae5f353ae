use super::domain::RecessError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// External date layouts accepted at the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `dd/mm/yyyy`, as typed in forms and printed in notes.
    DayMonthYear,
    /// `yyyy-mm-dd`, as stored.
    Iso,
}

impl DateFormat {
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthYear => "%d/%m/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DayMonthYear => "dd/mm/yyyy",
            Self::Iso => "yyyy-mm-dd",
        }
    }

    fn from_separator(raw: &str) -> Option<Self> {
        if raw.contains('/') {
            Some(Self::DayMonthYear)
        } else if raw.contains('-') {
            Some(Self::Iso)
        } else {
            None
        }
    }
}

/// Parse a date in either boundary format. The separator selects the layout;
/// no other layout is attempted.
pub fn parse_date(raw: &str) -> Result<NaiveDate, RecessError> {
    let trimmed = raw.trim();
    match DateFormat::from_separator(trimmed) {
        Some(format) => parse_date_with(trimmed, format),
        None => Err(RecessError::DateFormat {
            value: raw.to_string(),
            expected: "dd/mm/yyyy or yyyy-mm-dd",
        }),
    }
}

pub fn parse_date_with(raw: &str, format: DateFormat) -> Result<NaiveDate, RecessError> {
    NaiveDate::parse_from_str(raw.trim(), format.pattern()).map_err(|_| RecessError::DateFormat {
        value: raw.to_string(),
        expected: format.label(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DateFormat::DayMonthYear.pattern()).to_string()
}

/// Calendar days from `start` to `end`.
pub fn elapsed_days(start: NaiveDate, end: NaiveDate) -> Result<i64, RecessError> {
    if end < start {
        return Err(RecessError::InvalidRange { start, end });
    }
    Ok((end - start).num_days())
}

/// Whole months from `start` to `end` for the legacy table.
///
/// The month difference is bumped by one when the end day-of-month is strictly
/// past the start day-of-month. Never negative.
pub fn elapsed_whole_months(start: NaiveDate, end: NaiveDate) -> u32 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    let mut total = years * 12 + months;

    if end.day() > start.day() {
        total += 1;
    }

    u32::try_from(total).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parse_date_supports_both_boundary_formats() {
        assert_eq!(parse_date("06/01/2023").expect("dmy"), date(2023, 1, 6));
        assert_eq!(parse_date(" 2025-05-31 ").expect("iso"), date(2025, 5, 31));
    }

    #[test]
    fn parse_date_rejects_malformed_input() {
        for raw in ["", "31/02/2024", "2024/13/01", "06.01.2023", "yesterday"] {
            match parse_date(raw) {
                Err(RecessError::DateFormat { value, .. }) => assert_eq!(value, raw),
                other => panic!("expected date format error for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_date_with_does_not_fall_back() {
        let error = parse_date_with("2023-01-06", DateFormat::DayMonthYear).expect_err("strict");
        assert_eq!(
            error,
            RecessError::DateFormat {
                value: "2023-01-06".to_string(),
                expected: "dd/mm/yyyy",
            }
        );
    }

    #[test]
    fn format_date_renders_day_month_year() {
        assert_eq!(format_date(date(2024, 1, 5)), "05/01/2024");
    }

    #[test]
    fn elapsed_days_counts_leap_days() {
        assert_eq!(
            elapsed_days(date(2024, 2, 1), date(2024, 12, 1)).expect("ordered"),
            304
        );
        assert_eq!(
            elapsed_days(date(2023, 1, 6), date(2025, 5, 31)).expect("ordered"),
            876
        );
        assert_eq!(
            elapsed_days(date(2023, 1, 6), date(2023, 1, 6)).expect("ordered"),
            0
        );
    }

    #[test]
    fn elapsed_days_rejects_reversed_range() {
        assert!(matches!(
            elapsed_days(date(2024, 1, 2), date(2024, 1, 1)),
            Err(RecessError::InvalidRange { .. })
        ));
    }

    #[test]
    fn whole_months_counts_partial_month_only_past_start_day() {
        assert_eq!(elapsed_whole_months(date(2024, 2, 1), date(2024, 12, 1)), 10);
        assert_eq!(elapsed_whole_months(date(2024, 2, 1), date(2024, 12, 2)), 11);
        assert_eq!(elapsed_whole_months(date(2024, 1, 31), date(2024, 2, 29)), 1);
        assert_eq!(elapsed_whole_months(date(2023, 1, 6), date(2025, 5, 31)), 29);
    }

    #[test]
    fn whole_months_is_clamped_at_zero() {
        assert_eq!(elapsed_whole_months(date(2024, 3, 20), date(2024, 3, 5)), 0);
        assert_eq!(elapsed_whole_months(date(2024, 3, 20), date(2024, 3, 20)), 0);
    }
}

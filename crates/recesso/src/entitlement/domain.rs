use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Table used to turn an acquisition period into entitlement days.
///
/// The caller always names the rule; nothing in the engine picks one on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntitlementRule {
    /// Inclusive calendar-day bands applied per acquisition cycle.
    CalendarDays,
    /// Whole-month bands applied to the full contract, without segmentation.
    LegacyMonths,
}

impl EntitlementRule {
    pub const fn ordered() -> [Self; 2] {
        [Self::CalendarDays, Self::LegacyMonths]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CalendarDays => "calendar-days",
            Self::LegacyMonths => "legacy-months",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "calendar-days" | "calendar_days" | "days" => Some(Self::CalendarDays),
            "legacy-months" | "legacy_months" | "legacy" | "months" => Some(Self::LegacyMonths),
            _ => None,
        }
    }
}

/// Errors raised by the entitlement engine and the date boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecessError {
    #[error("'{value}' is not a valid date (expected {expected})")]
    DateFormat {
        value: String,
        expected: &'static str,
    },
    #[error("contract end {end} precedes its start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("taken days{} cannot be negative (found {value})", cycle_suffix(.cycle))]
    NegativeInput { cycle: Option<usize>, value: i64 },
    #[error("taken days{} exceed any possible entitlement (found {value})", cycle_suffix(.cycle))]
    TakenOutOfRange { cycle: Option<usize>, value: i64 },
}

impl RecessError {
    /// Attach the 1-based cycle number a taken count was supplied for.
    pub(crate) fn for_cycle(self, number: usize) -> Self {
        match self {
            RecessError::NegativeInput { value, .. } => RecessError::NegativeInput {
                cycle: Some(number),
                value,
            },
            RecessError::TakenOutOfRange { value, .. } => RecessError::TakenOutOfRange {
                cycle: Some(number),
                value,
            },
            other => other,
        }
    }
}

fn cycle_suffix(cycle: &Option<usize>) -> String {
    match cycle {
        Some(number) => format!(" for cycle {number}"),
        None => String::new(),
    }
}

/// Validated contract period. `end_date >= start_date` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContractSpan {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl ContractSpan {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, RecessError> {
        if end_date < start_date {
            return Err(RecessError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn elapsed_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// One acquisition cycle of a contract.
///
/// `taken_days` and `owed_days` stay `None` until [`net_owed`](super::net_owed)
/// produces a netted copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub elapsed_days: i64,
    pub entitlement_days: u32,
    pub taken_days: Option<u32>,
    pub owed_days: Option<u32>,
}

impl Cycle {
    /// Calendar days covered, counting both ends.
    pub fn covered_days(&self) -> i64 {
        self.elapsed_days + 1
    }

    /// Owed days, or the full entitlement when nothing was netted yet.
    pub fn owed_or_entitlement(&self) -> u32 {
        self.owed_days.unwrap_or(self.entitlement_days)
    }
}

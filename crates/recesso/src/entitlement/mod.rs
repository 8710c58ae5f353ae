//! Recess ("recesso") entitlement engine for fixed-term intern contracts.
//!
//! A contract span is split into one or two acquisition cycles, each cycle is
//! mapped to an entitlement through a banded table, entitlement is netted
//! against the days already taken, and the outcome is narrated for the
//! technical note. Every step is pure and returns fresh values.

mod assessment;
pub mod dates;
pub mod domain;
mod netting;
mod segmentation;
pub mod summary;
pub mod table;

pub use assessment::{assess, assess_recorded, EntitlementResult, RecordedCycle};
pub use dates::{
    elapsed_days, elapsed_whole_months, format_date, parse_date, parse_date_with, DateFormat,
};
pub use domain::{ContractSpan, Cycle, EntitlementRule, RecessError};
pub use netting::net_owed;
pub use segmentation::{segment_contract, segment_with_rule, SINGLE_CYCLE_MAX_DAYS};
pub use summary::{summarize, SummaryTemplate};

//! Banded entitlement tables.
//!
//! Earlier revisions of the calendar-day table disagreed on band edges (day 210
//! fell into the 18-day band in one and the 20-day band in another). The
//! inclusive bands below are the canonical ones. The whole-month table is kept
//! for records issued before acquisition cycles were split.

use serde::Serialize;

/// Inclusive range of elapsed days mapped to an entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntitlementBand {
    pub from_day: i64,
    pub to_day: i64,
    pub entitlement_days: u32,
}

impl EntitlementBand {
    const fn new(from_day: i64, to_day: i64, entitlement_days: u32) -> Self {
        Self {
            from_day,
            to_day,
            entitlement_days,
        }
    }

    pub const fn contains(&self, elapsed_days: i64) -> bool {
        elapsed_days >= self.from_day && elapsed_days <= self.to_day
    }
}

/// Anything outside these bands (under 180 or over 366 days) earns nothing.
pub const CALENDAR_DAY_BANDS: [EntitlementBand; 7] = [
    EntitlementBand::new(180, 180, 15),
    EntitlementBand::new(181, 210, 18),
    EntitlementBand::new(211, 240, 20),
    EntitlementBand::new(241, 270, 23),
    EntitlementBand::new(271, 300, 25),
    EntitlementBand::new(301, 330, 28),
    EntitlementBand::new(331, 366, 30),
];

pub fn entitlement_for_elapsed_days(elapsed_days: i64) -> u32 {
    CALENDAR_DAY_BANDS
        .iter()
        .find(|band| band.contains(elapsed_days))
        .map_or(0, |band| band.entitlement_days)
}

pub const fn entitlement_for_elapsed_months(months: u32) -> u32 {
    match months {
        0..=5 => 0,
        6 => 15,
        7 => 18,
        8 => 20,
        9 => 23,
        10 => 25,
        11 => 28,
        _ => 30,
    }
}

use super::dates::elapsed_whole_months;
use super::domain::{ContractSpan, Cycle, EntitlementRule, RecessError};
use super::table::{entitlement_for_elapsed_days, entitlement_for_elapsed_months};
use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};

/// Longest span, in elapsed days, that stays a single acquisition cycle.
pub const SINGLE_CYCLE_MAX_DAYS: i64 = 364;

/// Offset from the contract start at which the second cycle begins.
const SECOND_CYCLE_OFFSET_DAYS: i64 = 365;

/// Split a contract into acquisition cycles using the calendar-day table.
pub fn segment_contract(start: NaiveDate, end: NaiveDate) -> Result<Vec<Cycle>, RecessError> {
    let span = ContractSpan::new(start, end)?;
    Ok(segment_with_rule(&span, EntitlementRule::CalendarDays))
}

/// Build the cycles of `span` under an explicitly selected rule.
///
/// `LegacyMonths` skips segmentation and evaluates the whole contract as one
/// cycle.
pub fn segment_with_rule(span: &ContractSpan, rule: EntitlementRule) -> Vec<Cycle> {
    match rule {
        EntitlementRule::CalendarDays => split_acquisition_cycles(span),
        EntitlementRule::LegacyMonths => {
            warn!(
                start = %span.start_date(),
                end = %span.end_date(),
                "evaluating contract with the legacy whole-month table"
            );
            vec![acquire_cycle(span.start_date(), span.end_date(), rule)]
        }
    }
}

fn split_acquisition_cycles(span: &ContractSpan) -> Vec<Cycle> {
    let start = span.start_date();
    let end = span.end_date();
    let total_days = span.elapsed_days();

    if total_days <= SINGLE_CYCLE_MAX_DAYS {
        debug!(%start, %end, total_days, "contract fits a single acquisition cycle");
        return vec![acquire_cycle(start, end, EntitlementRule::CalendarDays)];
    }

    let first_end = start + Duration::days(SINGLE_CYCLE_MAX_DAYS);
    let second_start = start + Duration::days(SECOND_CYCLE_OFFSET_DAYS);
    debug!(%start, %first_end, %second_start, %end, total_days, "contract split into two acquisition cycles");

    vec![
        acquire_cycle(start, first_end, EntitlementRule::CalendarDays),
        acquire_cycle(second_start, end, EntitlementRule::CalendarDays),
    ]
}

/// Measure a cycle and attach its entitlement. Callers guarantee `start <= end`.
pub(crate) fn acquire_cycle(start: NaiveDate, end: NaiveDate, rule: EntitlementRule) -> Cycle {
    let elapsed_days = (end - start).num_days();
    let entitlement_days = match rule {
        EntitlementRule::CalendarDays => entitlement_for_elapsed_days(elapsed_days),
        EntitlementRule::LegacyMonths => {
            entitlement_for_elapsed_months(elapsed_whole_months(start, end))
        }
    };

    Cycle {
        start_date: start,
        end_date: end,
        elapsed_days,
        entitlement_days,
        taken_days: None,
        owed_days: None,
    }
}

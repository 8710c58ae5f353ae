use super::domain::{ContractSpan, Cycle, EntitlementRule, RecessError};
use super::netting::{checked_taken, net_owed};
use super::segmentation::{acquire_cycle, segment_with_rule};
use super::summary::{summarize, SummaryTemplate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Netted cycles, their owed total and the narrated conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitlementResult {
    pub cycles: Vec<Cycle>,
    pub total_owed_days: u32,
    pub summary_text: String,
}

impl EntitlementResult {
    fn from_netted(
        cycles: Vec<Cycle>,
        person_name: &str,
        template: SummaryTemplate,
    ) -> EntitlementResult {
        let total_owed_days = cycles.iter().map(Cycle::owed_or_entitlement).sum();
        let summary_text = summarize(person_name, &cycles, template);

        EntitlementResult {
            cycles,
            total_owed_days,
            summary_text,
        }
    }
}

/// Cycle bounds stored on records issued before contracts were segmented
/// automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedCycle {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub taken_days: Option<i64>,
}

/// Segment `span` under `rule`, net each cycle against the matching entry of
/// `taken` (missing entries mean nothing taken) and narrate the outcome.
///
/// Every supplied taken count is validated, including counts for cycles the
/// contract does not reach, so a bad input never yields a partial result.
/// Under [`EntitlementRule::LegacyMonths`] the whole contract is one cycle, so
/// all supplied counts are summed into it.
pub fn assess(
    span: &ContractSpan,
    rule: EntitlementRule,
    taken: &[Option<i64>],
    person_name: &str,
    template: SummaryTemplate,
) -> Result<EntitlementResult, RecessError> {
    for (index, value) in taken.iter().enumerate() {
        if let Some(value) = value {
            checked_taken(*value).map_err(|error| error.for_cycle(index + 1))?;
        }
    }

    let acquired = segment_with_rule(span, rule);
    let taken_per_cycle = match rule {
        EntitlementRule::CalendarDays => {
            for (index, extra) in taken.iter().enumerate().skip(acquired.len()) {
                match extra {
                    Some(value) if *value > 0 => warn!(
                        cycle = index + 1,
                        taken = value,
                        "taken days reported for a cycle the contract does not reach"
                    ),
                    _ => debug!(cycle = index + 1, "ignoring taken entry beyond the last cycle"),
                }
            }
            taken.to_vec()
        }
        EntitlementRule::LegacyMonths => {
            let combined = taken.iter().flatten().copied().reduce(i64::saturating_add);
            debug!(
                entries = taken.len(),
                taken = ?combined,
                "summing taken days into the whole-contract cycle"
            );
            vec![combined]
        }
    };

    let cycles = acquired
        .iter()
        .enumerate()
        .map(|(index, cycle)| {
            net_owed(cycle, taken_per_cycle.get(index).copied().flatten())
                .map_err(|error| error.for_cycle(index + 1))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EntitlementResult::from_netted(cycles, person_name, template))
}

/// Re-evaluate cycles whose bounds were recorded by hand. Entitlement is
/// recomputed per recorded cycle under `rule`.
pub fn assess_recorded(
    recorded: &[RecordedCycle],
    rule: EntitlementRule,
    person_name: &str,
    template: SummaryTemplate,
) -> Result<EntitlementResult, RecessError> {
    let cycles = recorded
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let span = ContractSpan::new(record.start_date, record.end_date)?;
            let cycle = acquire_cycle(span.start_date(), span.end_date(), rule);
            net_owed(&cycle, record.taken_days).map_err(|error| error.for_cycle(index + 1))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EntitlementResult::from_netted(cycles, person_name, template))
}

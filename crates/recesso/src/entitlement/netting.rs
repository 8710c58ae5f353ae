use super::domain::{Cycle, RecessError};
use tracing::debug;

/// Net a cycle's entitlement against the days already taken.
///
/// `None` means nothing was reported as taken, so the full entitlement is owed.
/// Negative or unrepresentable counts are rejected rather than clamped; only
/// the result is floored.
pub fn net_owed(cycle: &Cycle, taken_days: Option<i64>) -> Result<Cycle, RecessError> {
    let taken_days = taken_days.map(checked_taken).transpose()?;

    let owed_days = cycle
        .entitlement_days
        .saturating_sub(taken_days.unwrap_or(0));

    debug!(
        start = %cycle.start_date,
        end = %cycle.end_date,
        entitlement = cycle.entitlement_days,
        taken = ?taken_days,
        owed = owed_days,
        "netted acquisition cycle"
    );

    Ok(Cycle {
        taken_days,
        owed_days: Some(owed_days),
        ..cycle.clone()
    })
}

/// Validate a caller-supplied taken count without rewriting it.
pub(crate) fn checked_taken(value: i64) -> Result<u32, RecessError> {
    if value < 0 {
        return Err(RecessError::NegativeInput { cycle: None, value });
    }
    u32::try_from(value).map_err(|_| RecessError::TakenOutOfRange { cycle: None, value })
}

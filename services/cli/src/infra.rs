use chrono::NaiveDate;
use recesso::entitlement::{
    parse_date as parse_boundary_date, EntitlementRule, RecordedCycle, SummaryTemplate,
};

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_boundary_date(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_rule(raw: &str) -> Result<EntitlementRule, String> {
    EntitlementRule::parse(raw)
        .ok_or_else(|| format!("unknown rule '{raw}' (use calendar-days or legacy-months)"))
}

pub(crate) fn parse_template(raw: &str) -> Result<SummaryTemplate, String> {
    SummaryTemplate::parse(raw)
        .ok_or_else(|| format!("unknown template '{raw}' (use detailed or compact)"))
}

/// `START,END[,TAKEN]`, e.g. `06/01/2023,05/01/2024,30`.
pub(crate) fn parse_recorded_cycle(raw: &str) -> Result<RecordedCycle, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let (start, end, taken) = match parts.as_slice() {
        [start, end] => (*start, *end, None),
        [start, end, taken] => (*start, *end, Some(*taken)),
        _ => return Err(format!("expected START,END[,TAKEN] but got '{raw}'")),
    };

    let taken_days = match taken {
        Some(value) if !value.is_empty() => Some(
            value
                .parse::<i64>()
                .map_err(|err| format!("invalid taken days '{value}' ({err})"))?,
        ),
        _ => None,
    };

    Ok(RecordedCycle {
        start_date: parse_date(start)?,
        end_date: parse_date(end)?,
        taken_days,
    })
}

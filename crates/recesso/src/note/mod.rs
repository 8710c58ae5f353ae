//! Technical note ("nota técnica") issued for a former intern.

use crate::entitlement::{
    assess, ContractSpan, Cycle, EntitlementRule, RecessError, SummaryTemplate,
};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::info;

/// Official note number, rendered as `001/2025 - DDVP/DRH/PCPA`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteNumber {
    pub sequence: u32,
    pub year: i32,
    pub issuing_unit: Option<String>,
}

impl NoteNumber {
    pub fn new(sequence: u32, year: i32, issuing_unit: Option<String>) -> Self {
        Self {
            sequence,
            year,
            issuing_unit,
        }
    }

    /// The following number in the same year and unit, or `None` once the
    /// sequence is exhausted.
    pub fn next(&self) -> Option<Self> {
        let sequence = self.sequence.checked_add(1)?;
        Some(Self {
            sequence,
            ..self.clone()
        })
    }
}

impl fmt::Display for NoteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}/{}", self.sequence, self.year)?;
        if let Some(unit) = &self.issuing_unit {
            write!(f, " - {unit}")?;
        }
        Ok(())
    }
}

impl Serialize for NoteNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Identification block of the note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternProfile {
    pub name: String,
    pub occupation: String,
    pub registration: String,
    pub process_number: String,
    pub contract: ContractSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicalNote {
    pub number: NoteNumber,
    pub intern: InternProfile,
    pub rule: EntitlementRule,
    pub periods: Vec<Cycle>,
    pub total_owed_days: u32,
    pub conclusion: String,
}

impl TechnicalNote {
    /// Assess the intern's contract and assemble the note. `taken` holds the
    /// days taken per acquisition cycle, in order.
    pub fn issue(
        number: NoteNumber,
        intern: InternProfile,
        taken: &[Option<i64>],
        rule: EntitlementRule,
        template: SummaryTemplate,
    ) -> Result<Self, RecessError> {
        let result = assess(&intern.contract, rule, taken, &intern.name, template)?;

        info!(
            note = %number,
            cycles = result.cycles.len(),
            owed = result.total_owed_days,
            rule = rule.label(),
            "technical note assembled"
        );

        Ok(Self {
            number,
            intern,
            rule,
            periods: result.cycles,
            total_owed_days: result.total_owed_days,
            conclusion: result.summary_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn intern() -> InternProfile {
        let start = NaiveDate::from_ymd_opt(2022, 3, 10).expect("valid date");
        let end = NaiveDate::from_ymd_opt(2024, 2, 15).expect("valid date");
        InternProfile {
            name: "Maria Clara Silva".to_string(),
            occupation: "Estágio".to_string(),
            registration: "99887766/1".to_string(),
            process_number: "2022/554433".to_string(),
            contract: ContractSpan::new(start, end).expect("valid span"),
        }
    }

    #[test]
    fn note_number_renders_sequence_year_and_unit() {
        let number = NoteNumber::new(1, 2025, Some("DDVP/DRH/PCPA".to_string()));
        assert_eq!(number.to_string(), "001/2025 - DDVP/DRH/PCPA");
        let following = number.next().expect("sequence continues");
        assert_eq!(following.to_string(), "002/2025 - DDVP/DRH/PCPA");
        assert_eq!(NoteNumber::new(1234, 2025, None).to_string(), "1234/2025");
    }

    #[test]
    fn note_number_stops_at_the_last_sequence() {
        let last = NoteNumber::new(u32::MAX, 2025, None);
        assert_eq!(last.next(), None);
        assert_eq!(last.to_string(), "4294967295/2025");
    }

    #[test]
    fn issue_fills_periods_and_conclusion() {
        let note = TechnicalNote::issue(
            NoteNumber::new(7, 2025, None),
            intern(),
            &[Some(20), Some(10)],
            EntitlementRule::CalendarDays,
            SummaryTemplate::Detailed,
        )
        .expect("note issues");

        assert_eq!(note.periods.len(), 2);
        assert_eq!(note.periods[0].entitlement_days, 30);
        assert_eq!(note.periods[0].owed_days, Some(10));
        assert_eq!(note.periods[1].elapsed_days, 342);
        assert_eq!(note.periods[1].owed_days, Some(20));
        assert_eq!(note.total_owed_days, 30);
        assert!(note.conclusion.starts_with(
            "Conclui-se que o(a) ex-estagiário(a) Maria Clara Silva faz jus"
        ));
    }

    #[test]
    fn note_serializes_number_as_text() {
        let note = TechnicalNote::issue(
            NoteNumber::new(3, 2025, Some("DDVP/DRH/PCPA".to_string())),
            intern(),
            &[],
            EntitlementRule::LegacyMonths,
            SummaryTemplate::Compact,
        )
        .expect("note issues");

        let json = serde_json::to_value(&note).expect("serializes");
        assert_eq!(json["number"], "003/2025 - DDVP/DRH/PCPA");
        assert_eq!(json["rule"], "legacy-months");
        assert_eq!(json["intern"]["contract"]["start_date"], "2022-03-10");
        assert_eq!(json["periods"].as_array().map(Vec::len), Some(1));
    }
}

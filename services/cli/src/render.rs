use crate::commands::AssessmentReport;
use recesso::entitlement::{format_date, Cycle};
use recesso::note::TechnicalNote;
use std::fmt::Write;

pub(crate) fn render_assessment(report: &AssessmentReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Recess assessment for {}", report.name);
    let _ = writeln!(
        out,
        "Rule: {} | Template: {}",
        report.rule.label(),
        report.template.label()
    );

    write_cycles(&mut out, &report.result.cycles);

    let _ = writeln!(out, "\nTotal owed: {} days", report.result.total_owed_days);
    let _ = writeln!(out, "\n{}", report.result.summary_text);
    out
}

pub(crate) fn render_notes(notes: &[TechnicalNote]) -> String {
    let mut out = String::new();

    if notes.is_empty() {
        let _ = writeln!(out, "Roster contained no interns");
        return out;
    }

    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "Nota Técnica nº {}", note.number);
        let _ = writeln!(
            out,
            "{} ({}) | matrícula {} | processo {}",
            note.intern.name,
            note.intern.occupation,
            note.intern.registration,
            note.intern.process_number
        );
        let _ = writeln!(
            out,
            "Contract: {} -> {} | rule {}",
            format_date(note.intern.contract.start_date()),
            format_date(note.intern.contract.end_date()),
            note.rule.label()
        );
        write_cycles(&mut out, &note.periods);
        let _ = writeln!(out, "Total owed: {} days", note.total_owed_days);
        let _ = writeln!(out, "{}", note.conclusion);
    }

    out
}

fn write_cycles(out: &mut String, cycles: &[Cycle]) {
    if cycles.is_empty() {
        let _ = writeln!(out, "\nAcquisition cycles: none");
        return;
    }

    let _ = writeln!(out, "\nAcquisition cycles");
    for cycle in cycles {
        let taken = match cycle.taken_days {
            Some(days) => days.to_string(),
            None => "not informed".to_string(),
        };
        let _ = writeln!(
            out,
            "- {} -> {} | {} days elapsed | entitled {} | taken {} | owed {}",
            format_date(cycle.start_date),
            format_date(cycle.end_date),
            cycle.elapsed_days,
            cycle.entitlement_days,
            taken,
            cycle.owed_or_entitlement()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use recesso::entitlement::{assess, ContractSpan, EntitlementRule, SummaryTemplate};

    fn report() -> AssessmentReport {
        let start = NaiveDate::from_ymd_opt(2023, 1, 6).expect("valid date");
        let end = NaiveDate::from_ymd_opt(2025, 5, 31).expect("valid date");
        let span = ContractSpan::new(start, end).expect("valid span");
        let result = assess(
            &span,
            EntitlementRule::CalendarDays,
            &[Some(30)],
            "Lauro",
            SummaryTemplate::Detailed,
        )
        .expect("assesses");

        AssessmentReport {
            name: "Lauro".to_string(),
            rule: EntitlementRule::CalendarDays,
            template: SummaryTemplate::Detailed,
            result,
        }
    }

    #[test]
    fn assessment_lists_each_cycle() {
        let text = render_assessment(&report());
        assert!(text.contains(
            "- 06/01/2023 -> 05/01/2024 | 364 days elapsed | entitled 30 | taken 30 | owed 0"
        ));
        assert!(text.contains(
            "- 06/01/2024 -> 31/05/2025 | 511 days elapsed | entitled 0 | taken not informed | owed 0"
        ));
        assert!(text.contains("Total owed: 0 days"));
    }

    #[test]
    fn empty_roster_renders_placeholder() {
        assert_eq!(render_notes(&[]), "Roster contained no interns\n");
    }
}

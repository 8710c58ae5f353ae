use chrono::{Duration, NaiveDate};
use recesso::entitlement::{
    assess, net_owed, parse_date, segment_contract, segment_with_rule, summarize,
    table::entitlement_for_elapsed_days, ContractSpan, EntitlementRule, RecessError,
    SummaryTemplate,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn ten_month_contract_is_one_cycle_with_28_days() {
    let start = parse_date("01/02/2024").expect("start parses");
    let end = parse_date("01/12/2024").expect("end parses");

    let cycles = segment_contract(start, end).expect("segments");

    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].elapsed_days, 304);
    assert_eq!(cycles[0].entitlement_days, 28);
}

#[test]
fn long_contract_splits_and_nets_each_cycle() {
    let span = ContractSpan::new(
        parse_date("06/01/2023").expect("start parses"),
        parse_date("31/05/2025").expect("end parses"),
    )
    .expect("valid span");

    let result = assess(
        &span,
        EntitlementRule::CalendarDays,
        &[Some(30), Some(14)],
        "Lauro José Nascimento Spinelli",
        SummaryTemplate::Detailed,
    )
    .expect("assesses");

    let first = &result.cycles[0];
    assert_eq!(first.start_date, date(2023, 1, 6));
    assert_eq!(first.end_date, date(2024, 1, 5));
    assert_eq!(first.elapsed_days, 364);
    assert_eq!(first.entitlement_days, 30);
    assert_eq!(first.owed_days, Some(0));

    let second = &result.cycles[1];
    assert_eq!(second.start_date, date(2024, 1, 6));
    assert_eq!(second.end_date, date(2025, 5, 31));
    assert_eq!(second.elapsed_days, 511);
    assert_eq!(
        second.entitlement_days,
        entitlement_for_elapsed_days(second.elapsed_days)
    );
    assert_eq!(second.taken_days, Some(14));
    assert_eq!(
        second.owed_days,
        Some(second.entitlement_days.saturating_sub(14))
    );

    assert_eq!(result.total_owed_days, 0);
    assert_eq!(
        result.summary_text,
        "Conclui-se que o(a) ex-estagiário(a) Lauro José Nascimento Spinelli faz jus ao \
         recebimento dos dias de recesso não gozados referentes aos períodos: \
         06/01/2023 a 05/01/2024 – 0 dias | 06/01/2024 a 31/05/2025 – 0 dias."
    );
}

#[test]
fn taking_more_than_entitled_owes_nothing() {
    let cycles = segment_contract(date(2024, 2, 1), date(2024, 12, 1)).expect("segments");
    let netted = net_owed(&cycles[0], Some(45)).expect("nets");

    assert_eq!(netted.entitlement_days, 28);
    assert_eq!(netted.owed_days, Some(0));
}

#[test]
fn end_before_start_is_rejected_without_result() {
    let error = segment_contract(date(2024, 12, 1), date(2024, 2, 1)).expect_err("rejected");
    assert_eq!(
        error,
        RecessError::InvalidRange {
            start: date(2024, 12, 1),
            end: date(2024, 2, 1),
        }
    );

    assert!(ContractSpan::new(date(2024, 12, 1), date(2024, 2, 1)).is_err());
}

#[test]
fn segmentation_boundary_between_364_and_365_days() {
    let start = date(2024, 3, 1);

    let single = segment_contract(start, start + Duration::days(364)).expect("segments");
    assert_eq!(single.len(), 1);

    let split = segment_contract(start, start + Duration::days(365)).expect("segments");
    assert_eq!(split.len(), 2);
    assert!(split.iter().all(|cycle| cycle.covered_days() > 0));
    assert_eq!(split[0].end_date + Duration::days(1), split[1].start_date);
}

#[test]
fn canonical_table_matches_inclusive_bands_for_every_day() {
    for elapsed in -5..=400_i64 {
        let expected = match elapsed {
            180 => 15,
            181..=210 => 18,
            211..=240 => 20,
            241..=270 => 23,
            271..=300 => 25,
            301..=330 => 28,
            331..=366 => 30,
            _ => 0,
        };
        assert_eq!(
            entitlement_for_elapsed_days(elapsed),
            expected,
            "elapsed {elapsed}"
        );
    }
}

#[test]
fn legacy_rule_is_selectable_for_the_same_contract() {
    let span = ContractSpan::new(date(2022, 3, 10), date(2024, 2, 15)).expect("valid span");

    let calendar = segment_with_rule(&span, EntitlementRule::CalendarDays);
    let legacy = segment_with_rule(&span, EntitlementRule::LegacyMonths);

    assert_eq!(calendar.len(), 2);
    assert_eq!(legacy.len(), 1);
    assert_eq!(legacy[0].elapsed_days, span.elapsed_days());
    assert_eq!(legacy[0].entitlement_days, 30);
}

#[test]
fn both_templates_are_available_to_callers() {
    let cycles = segment_contract(date(2024, 2, 1), date(2024, 12, 1)).expect("segments");
    let netted = vec![net_owed(&cycles[0], Some(8)).expect("nets")];

    let detailed = summarize("João Pedro Almeida", &netted, SummaryTemplate::Detailed);
    let compact = summarize("João Pedro Almeida", &netted, SummaryTemplate::Compact);

    assert!(detailed.ends_with("períodos: 01/02/2024 a 01/12/2024 – 20 dias."));
    assert!(compact.ends_with("recebimento de 20 dias de recesso não gozados."));
}

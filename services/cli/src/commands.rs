use crate::render::{render_assessment, render_notes};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use recesso::config::EngineConfig;
use recesso::entitlement::{
    assess, assess_recorded, ContractSpan, EntitlementResult, EntitlementRule, RecordedCycle,
    SummaryTemplate,
};
use recesso::error::AppError;
use recesso::note::{NoteNumber, TechnicalNote};
use recesso::roster::{RosterImporter, RosterOptions};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Former intern's full name, as printed in the conclusion
    #[arg(long)]
    pub(crate) name: String,
    /// Contract start date (dd/mm/yyyy or yyyy-mm-dd)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start: NaiveDate,
    /// Contract end date (dd/mm/yyyy or yyyy-mm-dd)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) end: NaiveDate,
    /// Days already taken, one flag per acquisition cycle in order (summed under legacy-months)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) taken: Vec<i64>,
    /// Entitlement table (calendar-days or legacy-months); defaults to configuration
    #[arg(long, value_parser = crate::infra::parse_rule)]
    pub(crate) rule: Option<EntitlementRule>,
    /// Conclusion template (detailed or compact); defaults to configuration
    #[arg(long, value_parser = crate::infra::parse_template)]
    pub(crate) template: Option<SummaryTemplate>,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecordedArgs {
    /// Former intern's full name, as printed in the conclusion
    #[arg(long)]
    pub(crate) name: String,
    /// Recorded cycle as START,END[,TAKEN]; repeat per cycle in chronological order
    #[arg(long = "cycle", value_parser = crate::infra::parse_recorded_cycle)]
    pub(crate) cycles: Vec<RecordedCycle>,
    /// Entitlement table (calendar-days or legacy-months); defaults to configuration
    #[arg(long, value_parser = crate::infra::parse_rule)]
    pub(crate) rule: Option<EntitlementRule>,
    /// Conclusion template (detailed or compact); defaults to configuration
    #[arg(long, value_parser = crate::infra::parse_template)]
    pub(crate) template: Option<SummaryTemplate>,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// CSV roster (nome,ocupacao,matricula,processo_pae,inicio,fim,ciclo1_gozados,ciclo2_gozados)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Sequence number of the first note issued
    #[arg(long, default_value_t = 1)]
    pub(crate) first_sequence: u32,
    /// Year stamped on note numbers (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Issuing unit appended to note numbers; defaults to configuration
    #[arg(long)]
    pub(crate) issuing_unit: Option<String>,
    /// Entitlement table (calendar-days or legacy-months); defaults to configuration
    #[arg(long, value_parser = crate::infra::parse_rule)]
    pub(crate) rule: Option<EntitlementRule>,
    /// Conclusion template (detailed or compact); defaults to configuration
    #[arg(long, value_parser = crate::infra::parse_template)]
    pub(crate) template: Option<SummaryTemplate>,
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

/// Output of the `assess` and `recorded` commands.
#[derive(Debug, Serialize)]
pub(crate) struct AssessmentReport {
    pub(crate) name: String,
    pub(crate) rule: EntitlementRule,
    pub(crate) template: SummaryTemplate,
    #[serde(flatten)]
    pub(crate) result: EntitlementResult,
}

pub(crate) fn build_assessment(
    args: &AssessArgs,
    engine: &EngineConfig,
) -> Result<AssessmentReport, AppError> {
    let rule = args.rule.unwrap_or(engine.rule);
    let template = args.template.unwrap_or(engine.template);
    let span = ContractSpan::new(args.start, args.end)?;
    let taken: Vec<Option<i64>> = args.taken.iter().copied().map(Some).collect();
    let result = assess(&span, rule, &taken, &args.name, template)?;

    Ok(AssessmentReport {
        name: args.name.clone(),
        rule,
        template,
        result,
    })
}

pub(crate) fn build_recorded(
    args: &RecordedArgs,
    engine: &EngineConfig,
) -> Result<AssessmentReport, AppError> {
    let rule = args.rule.unwrap_or(engine.rule);
    let template = args.template.unwrap_or(engine.template);
    let result = assess_recorded(&args.cycles, rule, &args.name, template)?;

    Ok(AssessmentReport {
        name: args.name.clone(),
        rule,
        template,
        result,
    })
}

pub(crate) fn build_roster(
    args: &RosterArgs,
    engine: &EngineConfig,
    current_year: i32,
) -> Result<Vec<TechnicalNote>, AppError> {
    let issuing_unit = match &args.issuing_unit {
        Some(unit) if unit.trim().is_empty() => None,
        Some(unit) => Some(unit.trim().to_string()),
        None => engine.issuing_unit.clone(),
    };
    let options = RosterOptions {
        first_number: NoteNumber::new(
            args.first_sequence,
            args.year.unwrap_or(current_year),
            issuing_unit,
        ),
        rule: args.rule.unwrap_or(engine.rule),
        template: args.template.unwrap_or(engine.template),
    };

    Ok(RosterImporter::from_path(&args.csv, &options)?)
}

pub(crate) fn run_assess(args: AssessArgs, engine: &EngineConfig) -> Result<(), AppError> {
    let report = build_assessment(&args, engine)?;
    emit(&report, args.json, render_assessment)
}

pub(crate) fn run_recorded(args: RecordedArgs, engine: &EngineConfig) -> Result<(), AppError> {
    let report = build_recorded(&args, engine)?;
    emit(&report, args.json, render_assessment)
}

pub(crate) fn run_roster(args: RosterArgs, engine: &EngineConfig) -> Result<(), AppError> {
    let notes = build_roster(&args, engine, Local::now().year())?;
    emit(&notes, args.json, |notes: &Vec<TechnicalNote>| render_notes(notes))
}

fn emit<T, F>(value: &T, json: bool, render: F) -> Result<(), AppError>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", render(value));
    }
    Ok(())
}

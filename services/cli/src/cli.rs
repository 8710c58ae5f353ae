use crate::commands::{
    run_assess, run_recorded, run_roster, AssessArgs, RecordedArgs, RosterArgs,
};
use clap::{Parser, Subcommand};
use recesso::config::AppConfig;
use recesso::error::AppError;
use recesso::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "recesso",
    about = "Compute unused intern recess days and issue technical note conclusions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess one contract and print its acquisition cycles and conclusion
    Assess(AssessArgs),
    /// Re-evaluate cycles recorded by hand before contracts were segmented
    Recorded(RecordedArgs),
    /// Issue a technical note for every intern listed in a CSV roster
    Roster(RosterArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, rule = config.engine.rule.label(), "configuration loaded");

    match cli.command {
        Command::Assess(args) => run_assess(args, &config.engine),
        Command::Recorded(args) => run_recorded(args, &config.engine),
        Command::Roster(args) => run_roster(args, &config.engine),
    }
}

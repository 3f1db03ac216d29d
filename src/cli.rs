use crate::render;
use clap::{Args, Parser, Subcommand};
use reimbursement::batch::{load_cases, BatchScorer};
use reimbursement::config::AppConfig;
use reimbursement::error::AppError;
use reimbursement::{telemetry, ReimbursementEngine, TripInput};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "calculate-reimbursement",
    about = "Compute a travel reimbursement from trip duration, miles traveled, and receipts",
    version,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true,
    allow_negative_numbers = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    trip: TripArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show which rule or fallback produced the amount
    #[command(allow_negative_numbers = true)]
    Explain(ExplainArgs),
    /// Replay a CSV or JSON case file and score it against expected outputs
    Batch(BatchArgs),
    /// Print the active rule table as JSON
    Rules,
}

#[derive(Args, Debug)]
struct TripArgs {
    /// Trip duration in whole days
    #[arg(value_name = "TRIP_DURATION_DAYS", required = true, value_parser = parse_days)]
    days: Option<i64>,
    /// Miles traveled
    #[arg(value_name = "MILES_TRAVELED", required = true)]
    miles: Option<f64>,
    /// Total receipts amount
    #[arg(value_name = "TOTAL_RECEIPTS_AMOUNT", required = true)]
    receipts: Option<f64>,
}

impl TripArgs {
    fn into_input(self) -> Result<TripInput, AppError> {
        match (self.days, self.miles, self.receipts) {
            (Some(days), Some(miles), Some(receipts)) => Ok(TripInput::new(days, miles, receipts)),
            _ => Err(AppError::Usage(
                "expected <TRIP_DURATION_DAYS> <MILES_TRAVELED> <TOTAL_RECEIPTS_AMOUNT>".to_string(),
            )),
        }
    }
}

#[derive(Args, Debug)]
struct ExplainArgs {
    #[command(flatten)]
    trip: TripArgs,
    /// Emit the assessment as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Case file (.json for JSON, CSV otherwise)
    path: PathBuf,
    /// Emit the full report as JSON
    #[arg(long, conflicts_with = "outputs")]
    json: bool,
    /// Print only the computed amount for each case, one per line
    #[arg(long)]
    outputs: bool,
    /// Number of largest-error cases to list
    #[arg(long, default_value_t = 5)]
    worst: usize,
}

fn parse_days(raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .map_err(|err| format!("'{raw}' is not a whole number of days ({err})"))
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = ReimbursementEngine::from_config(&config.rules)?;

    match cli.command {
        None => {
            let input = cli.trip.into_input()?;
            debug!(?input, "evaluating trip");
            println!("{}", engine.evaluate(input));
        }
        Some(Command::Explain(args)) => {
            let assessment = engine.assess(args.trip.into_input()?);
            if args.json {
                render::json(&assessment)?;
            } else {
                render::assessment(&assessment);
            }
        }
        Some(Command::Batch(args)) => {
            let cases = load_cases(&args.path)?;
            info!(path = %args.path.display(), cases = cases.len(), "loaded case file");
            let report = BatchScorer::new(&engine, config.batch).score(&cases, args.worst);
            if args.outputs {
                render::outputs(&report);
            } else if args.json {
                render::json(&report)?;
            } else {
                render::batch_summary(&report, &config.batch);
            }
        }
        Some(Command::Rules) => {
            let mut stdout = std::io::stdout().lock();
            engine.table().to_json_writer(&mut stdout)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

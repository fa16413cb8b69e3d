mod commands;
mod helpers;

use clap::Parser;
use mbal_core::domain::EngineError;
use tracing_subscriber::EnvFilter;

pub fn run_from_env() -> i32 {
    init_tracing();

    match run(std::env::args().skip(1)) {
        Ok(code) => code,
        Err(error) => {
            let engine_error = error.as_engine_error();
            tracing::debug!(
                class = engine_error.category().class(),
                code = engine_error.code(),
                exit_code = engine_error.exit_code(),
                "command failed"
            );
            eprintln!("{}", engine_error.diagnostic_line());
            if let Some(summary_line) = engine_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            engine_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("mbal".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

/// Logs go to stderr; stdout carries only the JSON report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "mbal",
    version,
    about = "Mass-balance engine for forced-degradation studies"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Compute all closure methods, intervals and the recommended result for one sample
    Calculate(commands::CalculateArgs),
    /// Analyse UV/ELSD/MS/GC-MS detector coverage
    Hybrid(commands::InputArgs),
    /// Update a prior mass-balance estimate with new replicate data
    Bayes(commands::InputArgs),
    /// Predict the closure expected from predicted degradation products
    Predict(commands::InputArgs),
    /// Optimise the confidence-index alert threshold from historical outcomes
    Roc(commands::InputArgs),
    /// Print the 95% t critical value used for the intervals
    #[command(name = "t-table")]
    TTable(commands::TTableArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Calculate(args) => commands::run_calculate_command(args),
        CliCommand::Hybrid(args) => commands::run_hybrid_command(args),
        CliCommand::Bayes(args) => commands::run_bayes_command(args),
        CliCommand::Predict(args) => commands::run_predict_command(args),
        CliCommand::Roc(args) => commands::run_roc_command(args),
        CliCommand::TTable(args) => commands::run_t_table_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(EngineError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_engine_error(&self) -> EngineError {
        match self {
            Self::Usage(message) => EngineError::invalid_input("INPUT.CLI_USAGE", message.clone()),
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => EngineError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

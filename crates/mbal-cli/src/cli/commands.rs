use super::CliError;
use super::helpers::{print_json, read_json_input, resolve_engine_config};
use mbal_core::common::{DEFAULT_DEGREES_OF_FREEDOM, EngineConfig, TCriticalPolicy};
use mbal_core::domain::{DetectionInput, SampleInput};
use mbal_core::modules::{
    BayesianUpdateInput, HistoricalOutcome, PredictionInput, analyze_hybrid_detection,
    analyze_sample, bayesian_update, optimize_ci_threshold, predict_mass_balance,
};
use mbal_core::numerics::t_critical_95;
use serde::Serialize;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct CalculateArgs {
    /// Sample JSON with initial/stressed API and degradant assays
    #[arg(long)]
    input: PathBuf,

    /// Detector-channel JSON; adds the hybrid detection section
    #[arg(long)]
    detection: Option<PathBuf>,

    /// Engine config JSON (analytical RSD, degrees of freedom, t policy)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    output: OutputFlags,
}

#[derive(clap::Args)]
pub(super) struct InputArgs {
    /// Input JSON path
    #[arg(long)]
    input: PathBuf,

    #[command(flatten)]
    output: OutputFlags,
}

#[derive(clap::Args)]
pub(super) struct TTableArgs {
    /// Degrees of freedom
    #[arg(long, default_value_t = DEFAULT_DEGREES_OF_FREEDOM)]
    df: u32,

    /// Lookup policy for untabulated degrees of freedom
    #[arg(long, value_enum, default_value_t = PolicyArg::TabulatedFloor)]
    policy: PolicyArg,

    #[command(flatten)]
    output: OutputFlags,
}

#[derive(clap::Args)]
pub(super) struct OutputFlags {
    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub(super) enum PolicyArg {
    TabulatedFloor,
    LinearInterpolation,
}

impl From<PolicyArg> for TCriticalPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::TabulatedFloor => Self::TabulatedFloor,
            PolicyArg::LinearInterpolation => Self::LinearInterpolation,
        }
    }
}

#[derive(Serialize)]
struct TCriticalReport {
    degrees_of_freedom: u32,
    policy: TCriticalPolicy,
    t_critical: f64,
}

pub(super) fn run_calculate_command(args: CalculateArgs) -> Result<i32, CliError> {
    let config = resolve_engine_config(args.config.as_deref())?;
    let sample: SampleInput = read_json_input(&args.input)?;
    let detection: Option<DetectionInput> = args
        .detection
        .as_deref()
        .map(read_json_input::<DetectionInput>)
        .transpose()?;

    let report = analyze_sample(&sample, detection.as_ref(), &config).map_err(CliError::Compute)?;
    tracing::info!(
        method = %report.mass_balance.recommended_method,
        value = report.mass_balance.recommended_value,
        "mass balance calculated"
    );
    print_json(&report, args.output.pretty)
}

pub(super) fn run_hybrid_command(args: InputArgs) -> Result<i32, CliError> {
    let detection: DetectionInput = read_json_input(&args.input)?;
    print_json(&analyze_hybrid_detection(&detection), args.output.pretty)
}

pub(super) fn run_bayes_command(args: InputArgs) -> Result<i32, CliError> {
    let input: BayesianUpdateInput = read_json_input(&args.input)?;
    let posterior = bayesian_update(&input).map_err(CliError::Compute)?;
    print_json(&posterior, args.output.pretty)
}

pub(super) fn run_predict_command(args: InputArgs) -> Result<i32, CliError> {
    let input: PredictionInput = read_json_input(&args.input)?;
    let prediction = predict_mass_balance(&input).map_err(CliError::Compute)?;
    print_json(&prediction, args.output.pretty)
}

pub(super) fn run_roc_command(args: InputArgs) -> Result<i32, CliError> {
    let history: Vec<HistoricalOutcome> = read_json_input(&args.input)?;
    let optimization = optimize_ci_threshold(&history).map_err(CliError::Compute)?;
    print_json(&optimization, args.output.pretty)
}

pub(super) fn run_t_table_command(args: TTableArgs) -> Result<i32, CliError> {
    let config = EngineConfig {
        degrees_of_freedom: args.df,
        t_critical_policy: args.policy.into(),
        ..EngineConfig::default()
    };
    config.validate().map_err(CliError::Compute)?;

    let report = TCriticalReport {
        degrees_of_freedom: config.degrees_of_freedom,
        policy: config.t_critical_policy,
        t_critical: t_critical_95(config.degrees_of_freedom, config.t_critical_policy),
    };
    print_json(&report, args.output.pretty)
}

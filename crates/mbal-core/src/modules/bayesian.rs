//! Normal-Normal conjugate update of a mass-balance estimate with known
//! variance, e.g. folding a new triplicate into a historical prior.

use crate::domain::{EngineError, EngineResult};
use crate::numerics::NORMAL_APPROXIMATION_T;
use serde::{Deserialize, Serialize};

/// Precision substituted when a standard deviation is zero or negative.
pub const VAGUE_PRECISION: f64 = 1.0e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BayesianUpdateInput {
    pub prior_mean: f64,
    pub prior_std: f64,
    pub data_mean: f64,
    pub data_std: f64,
    #[serde(default = "default_replicates")]
    pub n: u32,
}

fn default_replicates() -> u32 {
    3
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PosteriorEstimate {
    pub posterior_mean: f64,
    pub posterior_std: f64,
    pub credible_interval_95: [f64; 2],
    pub prior_weight: f64,
    pub data_weight: f64,
}

fn precision(count: f64, std: f64) -> f64 {
    if std > 0.0 {
        count / (std * std)
    } else {
        VAGUE_PRECISION
    }
}

pub fn bayesian_update(input: &BayesianUpdateInput) -> EngineResult<PosteriorEstimate> {
    for (field, value) in [
        ("prior_mean", input.prior_mean),
        ("prior_std", input.prior_std),
        ("data_mean", input.data_mean),
        ("data_std", input.data_std),
    ] {
        crate::domain::errors::require_finite("INPUT.BAYES_FIELD", field, value)?;
    }
    if input.n == 0 {
        return Err(EngineError::invalid_input(
            "INPUT.BAYES_REPLICATES",
            "replicate count 'n' must be >= 1, got 0",
        ));
    }

    let prior_precision = precision(1.0, input.prior_std);
    let data_precision = precision(f64::from(input.n), input.data_std);
    let posterior_precision = prior_precision + data_precision;
    let posterior_std = (1.0 / posterior_precision).sqrt();
    let posterior_mean = (prior_precision * input.prior_mean + data_precision * input.data_mean)
        / posterior_precision;
    let half_width = NORMAL_APPROXIMATION_T * posterior_std;

    Ok(PosteriorEstimate {
        posterior_mean,
        posterior_std,
        credible_interval_95: [posterior_mean - half_width, posterior_mean + half_width],
        prior_weight: prior_precision / posterior_precision,
        data_weight: data_precision / posterior_precision,
    })
}

//! The five closure formulas. All values stay in the units of the input.

use crate::domain::{CorrectionFactors, EngineError, EngineResult, SampleInput};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosurePoints {
    pub delta_api: f64,
    pub delta_degradants: f64,
    pub degradation_level: f64,
    pub smb: f64,
    pub amb: f64,
    pub rmb: Option<f64>,
    pub lk_imb: f64,
    pub cimb: f64,
}

pub fn simple_mass_balance(sample: &SampleInput) -> f64 {
    sample.stressed_api + sample.stressed_degradants
}

pub fn absolute_mass_balance(sample: &SampleInput) -> f64 {
    let initial_total = sample.initial_api + sample.initial_degradants;
    (sample.stressed_api + sample.stressed_degradants) / initial_total * 100.0
}

/// Undefined when the API content did not change.
pub fn relative_mass_balance(sample: &SampleInput) -> Option<f64> {
    let delta_api = sample.delta_api();
    if delta_api == 0.0 {
        None
    } else {
        Some(sample.delta_degradants() / delta_api * 100.0)
    }
}

/// Shared form of LK-IMB and CIMB: degradants scaled by a correction weight.
pub fn weighted_closure(sample: &SampleInput, degradant_weight: f64) -> f64 {
    (sample.stressed_api + sample.stressed_degradants * degradant_weight) / sample.initial_api
        * 100.0
}

pub fn closure_points(
    sample: &SampleInput,
    factors: &CorrectionFactors,
) -> EngineResult<ClosurePoints> {
    if !(sample.initial_api > 0.0) {
        return Err(EngineError::invalid_input(
            "INPUT.INITIAL_API",
            format!(
                "'initial_api' must be greater than zero, got {}",
                sample.initial_api
            ),
        ));
    }

    let initial_total = sample.initial_api + sample.initial_degradants;
    if !(initial_total > 0.0) {
        return Err(EngineError::invalid_input(
            "INPUT.INITIAL_TOTAL",
            format!(
                "'initial_api + initial_degradants' must be greater than zero, got {initial_total}"
            ),
        ));
    }

    let delta_api = sample.delta_api();
    Ok(ClosurePoints {
        delta_api,
        delta_degradants: sample.delta_degradants(),
        degradation_level: delta_api / sample.initial_api * 100.0,
        smb: simple_mass_balance(sample),
        amb: absolute_mass_balance(sample),
        rmb: relative_mass_balance(sample),
        lk_imb: weighted_closure(sample, factors.lk_imb_weight()),
        cimb: weighted_closure(sample, factors.cimb_weight()),
    })
}

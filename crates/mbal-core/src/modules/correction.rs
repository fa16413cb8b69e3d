//! λ (detector response), ω (molecular weight) and S (reaction stoichiometry)
//! correction factors.
//!
//! Every factor follows the same neutral-correction policy: when its inputs
//! are absent or not positive, the factor is [`CorrectionFactor::NEUTRAL`]
//! and reports `CorrectionBasis::Neutral`.

use crate::domain::{CorrectionFactor, CorrectionFactors, SampleInput, StressType, positive};

/// Mass of water added by hydrolysis.
pub const WATER_MW: f64 = 18.0;
/// Mass of the oxygen atom added by oxidation.
pub const OXYGEN_MW: f64 = 16.0;

pub fn neutral_or(measured: Option<f64>) -> CorrectionFactor {
    measured.map_or(CorrectionFactor::NEUTRAL, CorrectionFactor::measured)
}

pub fn response_correction(rrf: Option<f64>) -> CorrectionFactor {
    neutral_or(positive(rrf).map(|rrf| 1.0 / rrf))
}

pub fn molecular_weight_correction(
    degradant_mw: Option<f64>,
    parent_mw: Option<f64>,
) -> CorrectionFactor {
    let ratio = molecular_weight_pair(degradant_mw, parent_mw)
        .map(|(degradant, parent)| parent / degradant);
    neutral_or(ratio)
}

pub fn stoichiometric_correction(
    degradant_mw: Option<f64>,
    parent_mw: Option<f64>,
    stress_type: StressType,
) -> CorrectionFactor {
    let Some((degradant_mw, parent_mw)) = molecular_weight_pair(degradant_mw, parent_mw) else {
        return CorrectionFactor::NEUTRAL;
    };

    let adduct_mw = match stress_type {
        StressType::Acid | StressType::Base => WATER_MW,
        StressType::Oxidative => OXYGEN_MW,
        // Fragmentation pathways keep the plain molecular-weight ratio.
        StressType::Photolytic | StressType::Thermal | StressType::Unknown => 0.0,
    };
    CorrectionFactor::measured((parent_mw + adduct_mw) / degradant_mw)
}

pub fn correction_factors(sample: &SampleInput) -> CorrectionFactors {
    let factors = CorrectionFactors {
        lambda: response_correction(sample.rrf),
        omega: molecular_weight_correction(sample.degradant_mw, sample.parent_mw),
        stoichiometric_factor: stoichiometric_correction(
            sample.degradant_mw,
            sample.parent_mw,
            sample.stress_type,
        ),
    };
    tracing::debug!(
        lambda = factors.lambda.value,
        omega = factors.omega.value,
        stoichiometric_factor = factors.stoichiometric_factor.value,
        stress_type = %sample.stress_type,
        "derived correction factors"
    );
    factors
}

fn molecular_weight_pair(
    degradant_mw: Option<f64>,
    parent_mw: Option<f64>,
) -> Option<(f64, f64)> {
    Some((positive(degradant_mw)?, positive(parent_mw)?))
}

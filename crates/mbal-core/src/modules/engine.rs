//! Entry points composing correction → closures → uncertainty → interval →
//! recommendation → diagnostics into one outcome record.

use super::correction::correction_factors;
use super::diagnostics::{diagnostic_message, rationale};
use super::hybrid::analyze_hybrid_detection;
use super::interval::interval_estimate;
use super::methods::closure_points;
use super::recommender::recommend;
use super::uncertainty::combined_standard_deviation;
use crate::common::EngineConfig;
use crate::domain::{
    AnalysisReport, CalculationOutcome, DetectionInput, EngineResult, MethodResults, SampleInput,
};

pub fn calculate_mass_balance(sample: &SampleInput) -> EngineResult<CalculationOutcome> {
    calculate_mass_balance_with_config(sample, &EngineConfig::default())
}

pub fn calculate_mass_balance_with_config(
    sample: &SampleInput,
    config: &EngineConfig,
) -> EngineResult<CalculationOutcome> {
    config.validate()?;
    sample.validate()?;

    let factors = correction_factors(sample);
    let points = closure_points(sample, &factors)?;

    let rsd = config.analytical_rsd;
    let lk_imb_std = combined_standard_deviation(sample, factors.lk_imb_weight(), rsd);
    let cimb_std = combined_standard_deviation(sample, factors.cimb_weight(), rsd);
    let methods = MethodResults {
        smb: points.smb,
        amb: points.amb,
        rmb: points.rmb,
        lk_imb: interval_estimate(points.lk_imb, lk_imb_std, config),
        cimb: interval_estimate(points.cimb, cimb_std, config),
    };
    tracing::debug!(
        delta_api = points.delta_api,
        degradation_level = points.degradation_level,
        lk_imb = points.lk_imb,
        cimb = points.cimb,
        "computed closure estimates"
    );

    let recommendation = recommend(points.delta_api, points.degradation_level, &methods);
    Ok(CalculationOutcome {
        sample_id: sample.sample_id.clone(),
        timestamp: sample.timestamp.clone(),
        delta_api: points.delta_api,
        delta_degradants: points.delta_degradants,
        degradation_level: points.degradation_level,
        correction_factors: factors,
        methods,
        recommended_method: recommendation.method,
        recommended_value: recommendation.value,
        recommendation_reason: recommendation.reason,
        confidence_index: recommendation.confidence_index,
        status: recommendation.status,
        diagnostic_message: diagnostic_message(recommendation.value).to_string(),
        rationale: rationale(&recommendation),
    })
}

/// Mass balance plus, when detector readings are supplied, the hybrid
/// detection section.
pub fn analyze_sample(
    sample: &SampleInput,
    detection: Option<&DetectionInput>,
    config: &EngineConfig,
) -> EngineResult<AnalysisReport> {
    let mass_balance = calculate_mass_balance_with_config(sample, config)?;
    Ok(AnalysisReport {
        mass_balance,
        hybrid_detection: detection.map(analyze_hybrid_detection),
    })
}

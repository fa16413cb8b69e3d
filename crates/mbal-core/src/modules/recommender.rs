//! Decision policy choosing the authoritative closure method.

use crate::domain::{
    MassBalanceMethod, MethodResults, RecommendationReason, RiskLevel, SampleStatus,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub method: MassBalanceMethod,
    pub value: f64,
    pub reason: RecommendationReason,
    pub confidence_index: u8,
    pub status: SampleStatus,
}

/// First match wins; the branch order is part of the contract.
pub fn select_method(
    delta_api: f64,
    degradation_level: f64,
    cimb_risk: RiskLevel,
) -> (MassBalanceMethod, RecommendationReason) {
    if delta_api < 2.0 {
        (MassBalanceMethod::Amb, RecommendationReason::LowDegradation)
    } else if (5.0..=20.0).contains(&delta_api) {
        (
            MassBalanceMethod::Rmb,
            RecommendationReason::ModerateDegradationWindow,
        )
    } else if degradation_level > 20.0 || cimb_risk == RiskLevel::High {
        (
            MassBalanceMethod::Cimb,
            RecommendationReason::HighDegradationOrRisk,
        )
    } else {
        (
            MassBalanceMethod::LkImb,
            RecommendationReason::DefaultModerateDegradation,
        )
    }
}

/// Analyst-confidence heuristic, independent of the statistical interval.
pub fn confidence_index(degradation_level: f64) -> u8 {
    if degradation_level < 5.0 {
        70
    } else if degradation_level < 10.0 {
        85
    } else {
        95
    }
}

pub fn sample_status(recommended_value: f64) -> SampleStatus {
    if (98.0..=102.0).contains(&recommended_value) {
        SampleStatus::Pass
    } else if (95.0..=105.0).contains(&recommended_value) {
        SampleStatus::Alert
    } else {
        SampleStatus::Oos
    }
}

pub fn recommend(
    delta_api: f64,
    degradation_level: f64,
    results: &MethodResults,
) -> Recommendation {
    let (method, reason) = select_method(delta_api, degradation_level, results.cimb.risk_level);
    let value = match results.get(method).point() {
        Some(value) => value,
        None => {
            tracing::warn!(
                method = %method,
                "recommended method has no value; falling back to SMB"
            );
            results.smb
        }
    };

    tracing::debug!(method = %method, value, ?reason, "selected mass-balance method");
    Recommendation {
        method,
        value,
        reason,
        confidence_index: confidence_index(degradation_level),
        status: sample_status(value),
    }
}

//! Composite relative response factor across UV, ELSD and MS channels.

use crate::domain::{DetectionChannel, DetectionInput, positive};
use crate::numerics::{round_to, stable_weighted_mean};

pub const UV_WEIGHT: f64 = 1.0;
pub const ELSD_WEIGHT: f64 = 2.0;
pub const MS_WEIGHT: f64 = 0.5;
/// Counts at which the MS response factor is 1.0.
pub const MS_REFERENCE_INTENSITY: f64 = 1.0e6;
pub const MS_FACTOR_RANGE: (f64, f64) = (0.5, 2.0);
pub const ELSD_COVERAGE_BONUS: f64 = 20.0;
pub const MS_COVERAGE_BONUS: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CompositeResponse {
    pub composite_rrf: f64,
    /// Baseline 100 plus redundancy bonuses; deliberately not clamped.
    pub coverage_pct: f64,
    pub channels: Vec<DetectionChannel>,
}

pub fn ms_response_factor(ms_intensity: f64) -> f64 {
    let (low, high) = MS_FACTOR_RANGE;
    (ms_intensity / MS_REFERENCE_INTENSITY).clamp(low, high)
}

pub fn composite_response(input: &DetectionInput) -> CompositeResponse {
    let uv_rrf = positive(input.uv_rrf).unwrap_or(1.0);
    let elsd_rrf = positive(input.elsd_rrf);
    let ms_intensity = positive(input.ms_intensity);

    let mut channels = vec![DetectionChannel::Uv];
    if elsd_rrf.is_none() && ms_intensity.is_none() {
        return CompositeResponse {
            composite_rrf: uv_rrf,
            coverage_pct: 100.0,
            channels,
        };
    }

    let mut values = vec![uv_rrf];
    let mut weights = vec![UV_WEIGHT];
    let mut coverage_pct = 100.0;
    if let Some(elsd_rrf) = elsd_rrf {
        values.push(elsd_rrf);
        weights.push(ELSD_WEIGHT);
        coverage_pct += ELSD_COVERAGE_BONUS;
        channels.push(DetectionChannel::Elsd);
    }
    if let Some(ms_intensity) = ms_intensity {
        values.push(ms_response_factor(ms_intensity));
        weights.push(MS_WEIGHT);
        coverage_pct += MS_COVERAGE_BONUS;
        channels.push(DetectionChannel::Ms);
    }

    let composite_rrf = stable_weighted_mean(&values, &weights).unwrap_or(uv_rrf);
    CompositeResponse {
        composite_rrf: round_to(composite_rrf, 2),
        coverage_pct,
        channels,
    }
}

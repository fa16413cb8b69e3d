//! Degradants seen by the universal detector (ELSD/CAD) but missed by UV.

use crate::domain::{ImpactLevel, UvSilentAnalysis};
use crate::numerics::{ratio_or_zero, round_to};

pub const DETECTION_THRESHOLD: f64 = 0.5;
pub const SIGNIFICANT_THRESHOLD: f64 = 2.0;

pub fn uv_silent_analysis(
    stressed_degradants_uv: f64,
    stressed_degradants_elsd: f64,
    stressed_degradants_total: f64,
) -> UvSilentAnalysis {
    let gap = (stressed_degradants_elsd - stressed_degradants_uv).max(0.0);
    let pct_of_total = if stressed_degradants_total > 0.0 {
        ratio_or_zero(gap, stressed_degradants_total) * 100.0
    } else {
        0.0
    };
    let detected = gap > DETECTION_THRESHOLD;
    let impact = if gap > SIGNIFICANT_THRESHOLD {
        ImpactLevel::Significant
    } else if gap > DETECTION_THRESHOLD {
        ImpactLevel::Moderate
    } else {
        ImpactLevel::Negligible
    };

    let recommendation = if detected {
        format!(
            "UV-silent degradants account for {:.1}% of total degradants. Quantify with ELSD/CAD response and add a universal detector to the stability-indicating method.",
            pct_of_total
        )
    } else {
        "No significant UV-silent degradants. UV response is adequate for degradant quantitation."
            .to_string()
    };

    UvSilentAnalysis {
        detected,
        gap: round_to(gap, 2),
        pct_of_total: round_to(pct_of_total, 2),
        impact,
        recommendation,
    }
}

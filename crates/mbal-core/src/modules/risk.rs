use crate::domain::RiskLevel;

/// Total over all reals: `[98, 102]` is LOW, `[95, 98)` and `(102, 105]` are
/// MODERATE, everything else (NaN included) is HIGH.
pub fn classify(point: f64) -> RiskLevel {
    if (98.0..=102.0).contains(&point) {
        RiskLevel::Low
    } else if (95.0..=105.0).contains(&point) {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

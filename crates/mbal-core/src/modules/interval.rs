//! Two-sided 95% interval around a weighted closure.

use super::risk::classify;
use crate::common::EngineConfig;
use crate::domain::IntervalEstimate;
use crate::numerics::t_critical_95;

pub fn interval_estimate(point: f64, combined_std: f64, config: &EngineConfig) -> IntervalEstimate {
    let t_critical = t_critical_95(config.degrees_of_freedom, config.t_critical_policy);
    let margin_of_error = t_critical * combined_std;
    IntervalEstimate {
        point,
        combined_std,
        t_critical,
        margin_of_error,
        lower_ci: point - margin_of_error,
        upper_ci: point + margin_of_error,
        risk_level: classify(point),
    }
}

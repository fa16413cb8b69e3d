use super::recommender::Recommendation;

pub const MASS_LOSS_MESSAGE: &str =
    "Significant mass loss detected. Investigate volatile degradants, non-chromophoric species, or adsorption to container surfaces.";
pub const MASS_EXCESS_MESSAGE: &str =
    "Mass balance exceeds the theoretical maximum. Check for co-elution, response factor bias, or integration errors.";
pub const MINOR_DEFICIT_MESSAGE: &str =
    "Minor mass deficit. Consider undetected minor degradants or response factor differences.";
pub const MINOR_EXCESS_MESSAGE: &str =
    "Slight mass excess. Verify relative response factors and peak integration.";
pub const ACCEPTABLE_MESSAGE: &str =
    "Mass balance within acceptance criteria. Degradation pathway adequately characterized.";

pub fn diagnostic_message(recommended_value: f64) -> &'static str {
    if recommended_value < 95.0 {
        MASS_LOSS_MESSAGE
    } else if recommended_value > 105.0 {
        MASS_EXCESS_MESSAGE
    } else if recommended_value < 98.0 {
        MINOR_DEFICIT_MESSAGE
    } else if recommended_value > 102.0 {
        MINOR_EXCESS_MESSAGE
    } else {
        ACCEPTABLE_MESSAGE
    }
}

pub fn rationale(recommendation: &Recommendation) -> String {
    format!(
        "{} recommended: {}. Accounts for {}.",
        recommendation.method,
        recommendation.reason.describe(),
        recommendation.method.corrections()
    )
}

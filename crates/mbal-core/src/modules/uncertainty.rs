//! First-order, uncorrelated propagation of the analytical RSD through the
//! weighted closure `(api + degradants·w) / initial_api · 100`.

use crate::domain::SampleInput;

pub fn combined_standard_deviation(
    sample: &SampleInput,
    degradant_weight: f64,
    analytical_rsd: f64,
) -> f64 {
    let api_variance = (sample.stressed_api * analytical_rsd).powi(2);
    let degradant_variance = (sample.stressed_degradants * analytical_rsd).powi(2);
    let combined_variance = api_variance + degradant_variance * degradant_weight.powi(2);
    combined_variance.sqrt() / sample.initial_api * 100.0
}

//! Expected closure from a set of predicted degradation products, split evenly
//! across the products. CIMB is approximated by LK-IMB (S ≈ ω).

use crate::domain::{EngineError, EngineResult};
use crate::numerics::round_to;
use serde::{Deserialize, Serialize};

pub const NO_PRODUCTS_NOTE: &str = "No degradation products predicted";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedProduct {
    pub omega: f64,
    #[serde(default)]
    pub pathway: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    #[serde(default = "default_degradation_percent")]
    pub degradation_percent: f64,
    #[serde(default)]
    pub products: Vec<PredictedProduct>,
}

fn default_degradation_percent() -> f64 {
    10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassBalancePrediction {
    pub predicted_lk_imb: f64,
    pub predicted_cimb: f64,
    pub degradation_percent: f64,
    pub num_products_predicted: usize,
    pub major_products: Vec<PredictedProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub fn predict_mass_balance(input: &PredictionInput) -> EngineResult<MassBalancePrediction> {
    let degradation_percent = input.degradation_percent;
    if !degradation_percent.is_finite() || !(0.0..=100.0).contains(&degradation_percent) {
        return Err(EngineError::invalid_input(
            "INPUT.PREDICTION_DEGRADATION",
            format!("degradation_percent must lie in [0, 100], got {degradation_percent}"),
        ));
    }
    if let Some(product) = input.products.iter().find(|product| !product.omega.is_finite()) {
        return Err(EngineError::invalid_input(
            "INPUT.PREDICTION_OMEGA",
            format!(
                "product '{}' has a non-finite omega {}",
                product.pathway, product.omega
            ),
        ));
    }

    let remaining_api = 100.0 - degradation_percent;
    if input.products.is_empty() {
        return Ok(MassBalancePrediction {
            predicted_lk_imb: remaining_api,
            predicted_cimb: remaining_api,
            degradation_percent,
            num_products_predicted: 0,
            major_products: Vec::new(),
            note: Some(NO_PRODUCTS_NOTE.to_string()),
        });
    }

    let share = degradation_percent / input.products.len() as f64;
    let degradant_contribution: f64 = input
        .products
        .iter()
        .map(|product| share * product.omega)
        .sum();
    let predicted_lk_imb = round_to(remaining_api + degradant_contribution, 2);

    Ok(MassBalancePrediction {
        predicted_lk_imb,
        predicted_cimb: predicted_lk_imb,
        degradation_percent,
        num_products_predicted: input.products.len(),
        major_products: input.products.clone(),
        note: None,
    })
}

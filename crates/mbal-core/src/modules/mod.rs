pub mod bayesian;
pub mod correction;
pub mod diagnostics;
pub mod hybrid;
pub mod interval;
pub mod methods;
pub mod prediction;
pub mod recommender;
pub mod risk;
pub mod roc;
pub mod uncertainty;

mod engine;

pub use bayesian::{BayesianUpdateInput, PosteriorEstimate, bayesian_update};
pub use engine::{analyze_sample, calculate_mass_balance, calculate_mass_balance_with_config};
pub use hybrid::analyze_hybrid_detection;
pub use prediction::{
    MassBalancePrediction, PredictedProduct, PredictionInput, predict_mass_balance,
};
pub use roc::{HistoricalOutcome, ThresholdOptimization, optimize_ci_threshold};

//! Mass-balance engine for pharmaceutical forced-degradation studies.
//!
//! [`calculate_mass_balance`] turns one stressed sample into the five closure
//! estimates (SMB, AMB, RMB, LK-IMB, CIMB), 95% intervals for the corrected
//! methods, a recommended method with its confidence index, and a diagnostic.
//! [`analyze_hybrid_detection`] scores multi-detector coverage independently.

pub mod common;
pub mod domain;
pub mod modules;
pub mod numerics;

pub use common::{EngineConfig, TCriticalPolicy, load_engine_config};
pub use domain::{
    AnalysisReport, CalculationOutcome, DetectionInput, EngineError, EngineErrorCategory,
    EngineResult, HybridDetectionOutcome, SampleInput, StressType,
};
pub use modules::{
    analyze_hybrid_detection, analyze_sample, bayesian_update, calculate_mass_balance,
    calculate_mass_balance_with_config, optimize_ci_threshold, predict_mass_balance,
};

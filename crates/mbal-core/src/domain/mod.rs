pub mod errors;
pub mod outcome;

pub use errors::{EngineError, EngineErrorCategory, EngineResult, ExitContract};
pub use outcome::{
    AnalysisReport, CalculationOutcome, CompletenessRecommendation, CorrectionBasis,
    CorrectionFactor, CorrectionFactors, DetectionChannel, HybridDetectionOutcome, ImpactLevel,
    IntervalEstimate, MassBalanceMethod, MethodCompleteness, MethodResult, MethodResults,
    RecommendationPriority, RecommendationReason, RiskLevel, SampleStatus, UvSilentAnalysis,
    VolatileAnalysis,
};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum StressType {
    Acid,
    Base,
    Oxidative,
    Photolytic,
    Thermal,
    #[default]
    Unknown,
}

impl StressType {
    /// Case-insensitive; anything unrecognised maps to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "acid" => Self::Acid,
            "base" => Self::Base,
            "oxidative" => Self::Oxidative,
            "photolytic" => Self::Photolytic,
            "thermal" => Self::Thermal,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acid => "acid",
            Self::Base => "base",
            Self::Oxidative => "oxidative",
            Self::Photolytic => "photolytic",
            Self::Thermal => "thermal",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for StressType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl Display for StressType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// One forced-degradation measurement pair: assay before and after stress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleInput {
    #[serde(default)]
    pub sample_id: Option<String>,
    /// Caller-supplied timestamp, copied verbatim into the outcome.
    #[serde(default)]
    pub timestamp: Option<String>,
    pub initial_api: f64,
    pub stressed_api: f64,
    #[serde(default)]
    pub initial_degradants: f64,
    pub stressed_degradants: f64,
    #[serde(default)]
    pub degradant_mw: Option<f64>,
    #[serde(default)]
    pub parent_mw: Option<f64>,
    #[serde(default)]
    pub rrf: Option<f64>,
    #[serde(default)]
    pub stress_type: StressType,
}

impl SampleInput {
    pub fn new(
        initial_api: f64,
        stressed_api: f64,
        initial_degradants: f64,
        stressed_degradants: f64,
    ) -> Self {
        Self {
            sample_id: None,
            timestamp: None,
            initial_api,
            stressed_api,
            initial_degradants,
            stressed_degradants,
            degradant_mw: None,
            parent_mw: None,
            rrf: None,
            stress_type: StressType::Unknown,
        }
    }

    pub fn with_molecular_weights(mut self, degradant_mw: f64, parent_mw: f64) -> Self {
        self.degradant_mw = Some(degradant_mw);
        self.parent_mw = Some(parent_mw);
        self
    }

    pub fn with_rrf(mut self, rrf: f64) -> Self {
        self.rrf = Some(rrf);
        self
    }

    pub fn with_stress_type(mut self, stress_type: StressType) -> Self {
        self.stress_type = stress_type;
        self
    }

    pub fn with_sample_id(mut self, sample_id: impl Into<String>) -> Self {
        self.sample_id = Some(sample_id.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn delta_api(&self) -> f64 {
        self.initial_api - self.stressed_api
    }

    pub fn delta_degradants(&self) -> f64 {
        self.stressed_degradants - self.initial_degradants
    }

    pub fn validate(&self) -> EngineResult<()> {
        let initial_api =
            errors::require_finite("INPUT.INITIAL_API", "initial_api", self.initial_api)?;
        if initial_api <= 0.0 {
            return Err(EngineError::invalid_input(
                "INPUT.INITIAL_API",
                format!("'initial_api' must be greater than zero, got {initial_api}"),
            ));
        }
        errors::require_finite("INPUT.STRESSED_API", "stressed_api", self.stressed_api)?;
        errors::require_finite(
            "INPUT.INITIAL_DEGRADANTS",
            "initial_degradants",
            self.initial_degradants,
        )?;
        errors::require_finite(
            "INPUT.STRESSED_DEGRADANTS",
            "stressed_degradants",
            self.stressed_degradants,
        )?;
        for (field, value) in [
            ("stressed_api", self.stressed_api),
            ("initial_degradants", self.initial_degradants),
            ("stressed_degradants", self.stressed_degradants),
        ] {
            if value < 0.0 {
                return Err(EngineError::invalid_input(
                    "INPUT.NEGATIVE_ASSAY",
                    format!("'{field}' must not be negative, got {value}"),
                ));
            }
        }
        for (field, value) in [
            ("degradant_mw", self.degradant_mw),
            ("parent_mw", self.parent_mw),
            ("rrf", self.rrf),
        ] {
            if let Some(value) = value {
                errors::require_finite("INPUT.CORRECTION_FIELD", field, value)?;
            }
        }
        Ok(())
    }
}

/// Detector-channel readings for the hybrid UV/ELSD/MS/GC-MS analysis.
/// Every field is optional; an empty record analyses as UV-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionInput {
    #[serde(default = "default_uv_available")]
    pub uv_available: bool,
    #[serde(default)]
    pub uv_rrf: Option<f64>,
    #[serde(default)]
    pub elsd_rrf: Option<f64>,
    #[serde(default)]
    pub ms_intensity: Option<f64>,
    #[serde(default)]
    pub gc_ms_detected: bool,
    #[serde(default)]
    pub stressed_degradants_uv: Option<f64>,
    #[serde(default)]
    pub stressed_degradants_elsd: Option<f64>,
    #[serde(default)]
    pub stressed_degradants_total: Option<f64>,
    #[serde(default)]
    pub initial_api: Option<f64>,
    #[serde(default)]
    pub stressed_api: Option<f64>,
    #[serde(default)]
    pub stressed_degradants: Option<f64>,
    #[serde(default)]
    pub gc_ms_volatiles: Option<f64>,
}

fn default_uv_available() -> bool {
    true
}

impl Default for DetectionInput {
    fn default() -> Self {
        Self {
            uv_available: true,
            uv_rrf: None,
            elsd_rrf: None,
            ms_intensity: None,
            gc_ms_detected: false,
            stressed_degradants_uv: None,
            stressed_degradants_elsd: None,
            stressed_degradants_total: None,
            initial_api: None,
            stressed_api: None,
            stressed_degradants: None,
            gc_ms_volatiles: None,
        }
    }
}

impl DetectionInput {
    pub fn elsd_present(&self) -> bool {
        positive(self.elsd_rrf).is_some()
    }

    pub fn ms_present(&self) -> bool {
        positive(self.ms_intensity).is_some()
    }

    pub fn gc_ms_present(&self) -> bool {
        self.gc_ms_detected || self.gc_ms_volatiles.is_some()
    }
}

/// Keeps a measured value only when it is a usable positive number.
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|value| value.is_finite() && *value > 0.0)
}

use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MassBalanceMethod {
    #[serde(rename = "SMB")]
    Smb,
    #[serde(rename = "AMB")]
    Amb,
    #[serde(rename = "RMB")]
    Rmb,
    #[serde(rename = "LK_IMB")]
    LkImb,
    #[serde(rename = "CIMB")]
    Cimb,
}

impl MassBalanceMethod {
    pub const ALL: [Self; 5] = [Self::Smb, Self::Amb, Self::Rmb, Self::LkImb, Self::Cimb];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smb => "SMB",
            Self::Amb => "AMB",
            Self::Rmb => "RMB",
            Self::LkImb => "LK-IMB",
            Self::Cimb => "CIMB",
        }
    }

    pub const fn corrections(self) -> &'static str {
        match self {
            Self::Cimb => {
                "relative response factor (RRF), molecular weight and reaction stoichiometry"
            }
            Self::LkImb => "relative response factor (RRF) and molecular weight",
            Self::Smb | Self::Amb | Self::Rmb => "no response or molecular-weight corrections",
        }
    }
}

impl Display for MassBalanceMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SampleStatus {
    Pass,
    Alert,
    /// Out of specification.
    Oos,
}

impl SampleStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Alert => "ALERT",
            Self::Oos => "OOS",
        }
    }
}

impl Display for SampleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionBasis {
    Measured,
    /// Required inputs were absent; the factor is the neutral multiplier 1.0.
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrectionFactor {
    pub value: f64,
    pub basis: CorrectionBasis,
}

impl CorrectionFactor {
    pub const NEUTRAL: Self = Self {
        value: 1.0,
        basis: CorrectionBasis::Neutral,
    };

    pub const fn measured(value: f64) -> Self {
        Self {
            value,
            basis: CorrectionBasis::Measured,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.basis == CorrectionBasis::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrectionFactors {
    pub lambda: CorrectionFactor,
    pub omega: CorrectionFactor,
    pub stoichiometric_factor: CorrectionFactor,
}

impl CorrectionFactors {
    pub const NEUTRAL: Self = Self {
        lambda: CorrectionFactor::NEUTRAL,
        omega: CorrectionFactor::NEUTRAL,
        stoichiometric_factor: CorrectionFactor::NEUTRAL,
    };

    /// λ·ω, the degradant weighting used by LK-IMB.
    pub fn lk_imb_weight(&self) -> f64 {
        self.lambda.value * self.omega.value
    }

    /// λ·S, the degradant weighting used by CIMB.
    pub fn cimb_weight(&self) -> f64 {
        self.lambda.value * self.stoichiometric_factor.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalEstimate {
    pub point: f64,
    pub combined_std: f64,
    pub t_critical: f64,
    pub margin_of_error: f64,
    pub lower_ci: f64,
    pub upper_ci: f64,
    pub risk_level: RiskLevel,
}

/// A single closure estimate. Only the correction-weighted methods carry an
/// interval; RMB has no value when the API did not change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "method")]
pub enum MethodResult {
    #[serde(rename = "SMB")]
    Smb { value: f64 },
    #[serde(rename = "AMB")]
    Amb { value: f64 },
    #[serde(rename = "RMB")]
    Rmb { value: Option<f64> },
    #[serde(rename = "LK_IMB")]
    LkImb(IntervalEstimate),
    #[serde(rename = "CIMB")]
    Cimb(IntervalEstimate),
}

impl MethodResult {
    pub const fn point(&self) -> Option<f64> {
        match self {
            Self::Smb { value } | Self::Amb { value } => Some(*value),
            Self::Rmb { value } => *value,
            Self::LkImb(estimate) | Self::Cimb(estimate) => Some(estimate.point),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Vec<MethodResult>")]
pub struct MethodResults {
    pub smb: f64,
    pub amb: f64,
    pub rmb: Option<f64>,
    pub lk_imb: IntervalEstimate,
    pub cimb: IntervalEstimate,
}

impl MethodResults {
    pub fn get(&self, method: MassBalanceMethod) -> MethodResult {
        match method {
            MassBalanceMethod::Smb => MethodResult::Smb { value: self.smb },
            MassBalanceMethod::Amb => MethodResult::Amb { value: self.amb },
            MassBalanceMethod::Rmb => MethodResult::Rmb { value: self.rmb },
            MassBalanceMethod::LkImb => MethodResult::LkImb(self.lk_imb),
            MassBalanceMethod::Cimb => MethodResult::Cimb(self.cimb),
        }
    }

    pub fn to_vec(&self) -> Vec<MethodResult> {
        MassBalanceMethod::ALL
            .into_iter()
            .map(|method| self.get(method))
            .collect()
    }
}

impl From<MethodResults> for Vec<MethodResult> {
    fn from(results: MethodResults) -> Self {
        results.to_vec()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationReason {
    LowDegradation,
    ModerateDegradationWindow,
    HighDegradationOrRisk,
    DefaultModerateDegradation,
}

impl RecommendationReason {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::LowDegradation => {
                "API loss below 2% is too small for the discriminating methods"
            }
            Self::ModerateDegradationWindow => {
                "API loss between 5% and 20% supports a relative degradant-to-loss comparison"
            }
            Self::HighDegradationOrRisk => {
                "high degradation or a high-risk corrected closure demands the most corrected method"
            }
            Self::DefaultModerateDegradation => {
                "moderate degradation is best served by the response and molecular-weight corrected closure"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutcome {
    pub sample_id: Option<String>,
    pub timestamp: Option<String>,
    pub delta_api: f64,
    pub delta_degradants: f64,
    pub degradation_level: f64,
    pub correction_factors: CorrectionFactors,
    pub methods: MethodResults,
    pub recommended_method: MassBalanceMethod,
    pub recommended_value: f64,
    pub recommendation_reason: RecommendationReason,
    pub confidence_index: u8,
    pub status: SampleStatus,
    pub diagnostic_message: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DetectionChannel {
    #[serde(rename = "UV")]
    Uv,
    #[serde(rename = "ELSD")]
    Elsd,
    #[serde(rename = "MS")]
    Ms,
    #[serde(rename = "GC-MS")]
    GcMs,
}

impl DetectionChannel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uv => "UV",
            Self::Elsd => "ELSD",
            Self::Ms => "MS",
            Self::GcMs => "GC-MS",
        }
    }
}

impl Display for DetectionChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImpactLevel {
    Negligible,
    Low,
    Moderate,
    Significant,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecommendationPriority {
    High,
    Moderate,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvSilentAnalysis {
    pub detected: bool,
    pub gap: f64,
    pub pct_of_total: f64,
    pub impact: ImpactLevel,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatileAnalysis {
    pub detected: bool,
    pub theoretical_mass: f64,
    pub actual_mass: f64,
    pub mass_loss: f64,
    pub loss_pct: f64,
    pub severity: ImpactLevel,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletenessRecommendation {
    pub channel: DetectionChannel,
    pub priority: RecommendationPriority,
    pub action: String,
    pub benefit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodCompleteness {
    pub score: u8,
    pub has_uv: bool,
    pub has_elsd: bool,
    pub has_ms: bool,
    pub has_gc_ms: bool,
    pub recommendations: Vec<CompletenessRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HybridDetectionOutcome {
    pub composite_rrf: f64,
    pub detection_coverage_pct: f64,
    pub detection_sources: Vec<DetectionChannel>,
    pub detection_label: String,
    pub method_completeness: MethodCompleteness,
    pub uv_silent_analysis: Option<UvSilentAnalysis>,
    pub volatile_analysis: Option<VolatileAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub mass_balance: CalculationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hybrid_detection: Option<HybridDetectionOutcome>,
}

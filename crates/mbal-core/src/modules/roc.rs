//! ROC analysis of historical confidence-index outcomes: finds the CI cutoff
//! maximising Youden's J (sensitivity + specificity − 1) for predicting a
//! mass-balance failure.

use crate::domain::{EngineError, EngineResult};
use crate::numerics::{ratio_or_zero, round_to};
use serde::{Deserialize, Serialize};

/// Width of the MODERATE band below the optimal threshold.
pub const MODERATE_BAND_WIDTH: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalOutcome {
    pub confidence_index: f64,
    pub actual_failure: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub ci_threshold: f64,
    pub fpr: f64,
    pub tpr: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceBands {
    pub low: [f64; 2],
    pub moderate: [f64; 2],
    pub high: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdOptimization {
    pub optimal_ci_threshold: f64,
    pub auc_score: f64,
    pub sensitivity: f64,
    pub specificity: f64,
    pub ppv: f64,
    pub npv: f64,
    pub accuracy: f64,
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub j_statistic: f64,
    pub curve: Vec<RocPoint>,
    pub risk_bands: ConfidenceBands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Confusion {
    tp: usize,
    fp: usize,
    tn: usize,
    fn_: usize,
}

/// Counts outcomes against a predicate marking a record as a predicted failure.
fn confusion_by(
    records: &[(f64, bool)],
    predicted_failure: impl Fn(f64) -> bool,
) -> Confusion {
    let mut confusion = Confusion::default();
    for &(score, failed) in records {
        match (predicted_failure(score), failed) {
            (true, true) => confusion.tp += 1,
            (true, false) => confusion.fp += 1,
            (false, true) => confusion.fn_ += 1,
            (false, false) => confusion.tn += 1,
        }
    }
    confusion
}

fn rate(numerator: usize, denominator: usize) -> f64 {
    round_to(ratio_or_zero(numerator as f64, denominator as f64), 4)
}

pub fn optimize_ci_threshold(
    history: &[HistoricalOutcome],
) -> EngineResult<ThresholdOptimization> {
    if history.is_empty() {
        return Err(EngineError::invalid_input(
            "INPUT.ROC_EMPTY",
            "at least one historical outcome is required",
        ));
    }
    if let Some(record) = history
        .iter()
        .find(|record| !record.confidence_index.is_finite())
    {
        return Err(EngineError::invalid_input(
            "INPUT.ROC_CONFIDENCE_INDEX",
            format!(
                "confidence_index must be finite, got {}",
                record.confidence_index
            ),
        ));
    }

    let positives = history
        .iter()
        .filter(|record| record.actual_failure)
        .count();
    let negatives = history.len() - positives;
    if positives == 0 || negatives == 0 {
        return Err(EngineError::invalid_input(
            "INPUT.ROC_SINGLE_CLASS",
            format!(
                "ROC analysis needs both passing and failing samples, got {positives} failures and {negatives} passes"
            ),
        ));
    }

    // Higher CI means more confidence in passing, so the failure score is inverted.
    let records: Vec<(f64, bool)> = history
        .iter()
        .map(|record| (100.0 - record.confidence_index, record.actual_failure))
        .collect();

    let mut thresholds: Vec<f64> = records.iter().map(|(score, _)| *score).collect();
    thresholds.sort_unstable_by(|lhs, rhs| rhs.total_cmp(lhs));
    thresholds.dedup();
    thresholds.insert(0, thresholds[0] + 1.0);

    let mut curve = Vec::with_capacity(thresholds.len());
    let mut best: Option<(f64, f64)> = None;
    for &score_threshold in &thresholds {
        let confusion = confusion_by(&records, |score| score >= score_threshold);
        let tpr = confusion.tp as f64 / positives as f64;
        let fpr = confusion.fp as f64 / negatives as f64;
        let j = tpr - fpr;
        if best.is_none_or(|(_, best_j)| j > best_j) {
            best = Some((score_threshold, j));
        }
        curve.push(RocPoint {
            ci_threshold: 100.0 - score_threshold,
            fpr,
            tpr,
        });
    }

    let auc_score = curve
        .windows(2)
        .map(|pair| (pair[1].fpr - pair[0].fpr) * (pair[1].tpr + pair[0].tpr) / 2.0)
        .sum::<f64>();

    let (score_threshold, j_statistic) = best.ok_or_else(|| {
        EngineError::internal("RUN.ROC_CURVE", "ROC curve produced no thresholds")
    })?;
    // `ci >= threshold` predicts a pass, so only scores strictly above the cutoff fail.
    let confusion = confusion_by(&records, |score| score > score_threshold);
    let total = records.len() as f64;
    let optimal_ci_threshold = round_to(100.0 - score_threshold, 1);
    tracing::debug!(
        optimal_ci_threshold,
        auc_score,
        j_statistic,
        "optimised CI threshold"
    );

    Ok(ThresholdOptimization {
        optimal_ci_threshold,
        auc_score: round_to(auc_score, 4),
        sensitivity: rate(confusion.tp, confusion.tp + confusion.fn_),
        specificity: rate(confusion.tn, confusion.tn + confusion.fp),
        ppv: rate(confusion.tp, confusion.tp + confusion.fp),
        npv: rate(confusion.tn, confusion.tn + confusion.fn_),
        accuracy: round_to((confusion.tp + confusion.tn) as f64 / total, 4),
        true_positives: confusion.tp,
        true_negatives: confusion.tn,
        false_positives: confusion.fp,
        false_negatives: confusion.fn_,
        j_statistic: round_to(j_statistic, 4),
        curve,
        risk_bands: ConfidenceBands {
            low: [optimal_ci_threshold, 100.0],
            moderate: [
                optimal_ci_threshold - MODERATE_BAND_WIDTH,
                optimal_ci_threshold,
            ],
            high: [0.0, optimal_ci_threshold - MODERATE_BAND_WIDTH],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::{HistoricalOutcome, optimize_ci_threshold};
    use crate::domain::EngineErrorCategory;

    fn history(records: &[(f64, bool)]) -> Vec<HistoricalOutcome> {
        records
            .iter()
            .map(|&(confidence_index, actual_failure)| HistoricalOutcome {
                confidence_index,
                actual_failure,
            })
            .collect()
    }

    #[test]
    fn separable_history_counts_boundary_failure_as_predicted_pass() {
        let result = optimize_ci_threshold(&history(&[
            (95.0, false),
            (90.0, false),
            (85.0, false),
            (80.0, true),
            (70.0, true),
        ]))
        .expect("optimisation should succeed");

        assert_eq!(result.optimal_ci_threshold, 80.0);
        assert_eq!(result.auc_score, 1.0);
        assert_eq!(result.j_statistic, 1.0);
        // The failure sitting exactly on CI 80 is a predicted pass.
        assert_eq!((result.true_positives, result.false_negatives), (1, 1));
        assert_eq!((result.true_negatives, result.false_positives), (3, 0));
        assert_eq!(result.sensitivity, 0.5);
        assert_eq!(result.npv, 0.75);
        assert_eq!(result.accuracy, 0.8);
        assert_eq!(result.risk_bands.moderate, [70.0, 80.0]);
        assert_eq!(result.risk_bands.high, [0.0, 70.0]);
    }

    #[test]
    fn overlapping_history_keeps_first_maximum() {
        let result = optimize_ci_threshold(&history(&[
            (95.0, false),
            (75.0, false),
            (80.0, true),
            (70.0, true),
        ]))
        .expect("optimisation should succeed");

        assert_eq!(result.optimal_ci_threshold, 70.0);
        assert_eq!(result.auc_score, 0.75);
        assert_eq!(result.j_statistic, 0.5);
        assert_eq!((result.true_positives, result.false_negatives), (0, 2));
        assert_eq!((result.true_negatives, result.false_positives), (2, 0));
        assert_eq!(result.sensitivity, 0.0);
        assert_eq!(result.specificity, 1.0);
        assert_eq!(result.ppv, 0.0);
        assert_eq!(result.npv, 0.5);
        assert_eq!(result.accuracy, 0.5);
        assert_eq!(result.curve.first().map(|point| point.tpr), Some(0.0));
        assert_eq!(result.curve.last().map(|point| point.fpr), Some(1.0));
    }

    #[test]
    fn degenerate_histories_are_rejected() {
        let error = optimize_ci_threshold(&[]).expect_err("empty history should fail");
        assert_eq!(error.category(), EngineErrorCategory::InputValidationError);

        let error = optimize_ci_threshold(&history(&[(90.0, false), (80.0, false)]))
            .expect_err("single class should fail");
        assert_eq!(error.code(), "INPUT.ROC_SINGLE_CLASS");
    }
}

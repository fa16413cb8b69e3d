//! Hybrid UV/ELSD/MS/GC-MS detection analysis. Independent of the closure
//! calculator; it only reads detector-channel inputs and never fails.

mod completeness;
mod composite;
mod uv_silent;
mod volatile;

pub use completeness::{POINTS_PER_CHECK, method_completeness};
pub use composite::{CompositeResponse, composite_response, ms_response_factor};
pub use uv_silent::uv_silent_analysis;
pub use volatile::volatile_analysis;

use crate::domain::{DetectionChannel, DetectionInput, HybridDetectionOutcome};

pub fn analyze_hybrid_detection(input: &DetectionInput) -> HybridDetectionOutcome {
    let composite = composite_response(input);

    let mut detection_sources = composite.channels;
    if !input.uv_available {
        detection_sources.retain(|channel| *channel != DetectionChannel::Uv);
    }
    if input.gc_ms_present() {
        detection_sources.push(DetectionChannel::GcMs);
    }

    let uv_silent = match (input.stressed_degradants_uv, input.stressed_degradants_elsd) {
        (Some(uv), Some(elsd)) => Some(uv_silent_analysis(
            uv,
            elsd,
            input.stressed_degradants_total.unwrap_or(0.0),
        )),
        _ => None,
    };
    let volatile = match (
        input.initial_api,
        input.stressed_api,
        input.stressed_degradants,
    ) {
        (Some(initial_api), Some(stressed_api), Some(stressed_degradants)) => {
            Some(volatile_analysis(
                initial_api,
                stressed_api,
                stressed_degradants,
                input.gc_ms_volatiles.unwrap_or(0.0),
            ))
        }
        _ => None,
    };

    tracing::debug!(
        composite_rrf = composite.composite_rrf,
        coverage_pct = composite.coverage_pct,
        sources = detection_sources.len(),
        "analysed hybrid detection channels"
    );
    HybridDetectionOutcome {
        composite_rrf: composite.composite_rrf,
        detection_coverage_pct: composite.coverage_pct,
        detection_label: detection_label(&detection_sources),
        detection_sources,
        method_completeness: method_completeness(input),
        uv_silent_analysis: uv_silent,
        volatile_analysis: volatile,
    }
}

pub fn detection_label(sources: &[DetectionChannel]) -> String {
    sources
        .iter()
        .map(|channel| channel.as_str())
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::{analyze_hybrid_detection, detection_label};
    use crate::domain::{DetectionChannel, DetectionInput};

    #[test]
    fn empty_input_defaults_to_uv_only() {
        let outcome = analyze_hybrid_detection(&DetectionInput::default());
        assert_eq!(outcome.composite_rrf, 1.0);
        assert_eq!(outcome.detection_coverage_pct, 100.0);
        assert_eq!(outcome.detection_label, "UV");
        assert_eq!(outcome.method_completeness.score, 25);
        assert!(outcome.uv_silent_analysis.is_none());
        assert!(outcome.volatile_analysis.is_none());
    }

    #[test]
    fn gc_ms_is_listed_after_liquid_phase_channels() {
        let outcome = analyze_hybrid_detection(&DetectionInput {
            elsd_rrf: Some(1.5),
            gc_ms_detected: true,
            initial_api: Some(99.5),
            stressed_api: Some(85.0),
            stressed_degradants: Some(12.3),
            ..DetectionInput::default()
        });
        assert_eq!(
            outcome.detection_sources,
            vec![
                DetectionChannel::Uv,
                DetectionChannel::Elsd,
                DetectionChannel::GcMs
            ]
        );
        assert_eq!(outcome.detection_label, "UV + ELSD + GC-MS");
        // Coverage bonus only counts the composite channels.
        assert_eq!(outcome.detection_coverage_pct, 120.0);
        let volatile = outcome.volatile_analysis.expect("volatile section should exist");
        assert_eq!(volatile.mass_loss, 2.2);
    }

    #[test]
    fn label_joins_channels_in_order() {
        assert_eq!(
            detection_label(&[DetectionChannel::Uv, DetectionChannel::Ms]),
            "UV + MS"
        );
        assert_eq!(detection_label(&[]), "");
    }
}

//! 0-100 coverage score: four independent 25-point detector checks.

use crate::domain::{
    CompletenessRecommendation, DetectionChannel, DetectionInput, MethodCompleteness,
    RecommendationPriority,
};

pub const POINTS_PER_CHECK: u8 = 25;

struct ChannelCheck {
    channel: DetectionChannel,
    priority: RecommendationPriority,
    action: &'static str,
    benefit: &'static str,
}

const CHECKS: [ChannelCheck; 4] = [
    ChannelCheck {
        channel: DetectionChannel::Uv,
        priority: RecommendationPriority::High,
        action: "Add UV/PDA detection as the primary quantitation channel",
        benefit: "Establishes the reference response for the parent and chromophoric degradants",
    },
    ChannelCheck {
        channel: DetectionChannel::Elsd,
        priority: RecommendationPriority::High,
        action: "Add ELSD or CAD universal detection",
        benefit: "Detects non-chromophoric (UV-silent) degradants that UV cannot quantify",
    },
    ChannelCheck {
        channel: DetectionChannel::Ms,
        priority: RecommendationPriority::Moderate,
        action: "Add LC-MS detection",
        benefit: "Confirms degradant identity and molecular weight for stoichiometric correction",
    },
    ChannelCheck {
        channel: DetectionChannel::GcMs,
        priority: RecommendationPriority::Info,
        action: "Consider headspace GC-MS",
        benefit: "Captures volatile degradants lost from the liquid-phase assay",
    },
];

pub fn method_completeness(input: &DetectionInput) -> MethodCompleteness {
    let has_uv = input.uv_available;
    let has_elsd = input.elsd_present();
    let has_ms = input.ms_present();
    let has_gc_ms = input.gc_ms_present();

    let mut score = 0;
    let mut recommendations = Vec::new();
    for (check, present) in CHECKS.iter().zip([has_uv, has_elsd, has_ms, has_gc_ms]) {
        if present {
            score += POINTS_PER_CHECK;
        } else {
            recommendations.push(CompletenessRecommendation {
                channel: check.channel,
                priority: check.priority,
                action: check.action.to_string(),
                benefit: check.benefit.to_string(),
            });
        }
    }

    MethodCompleteness {
        score,
        has_uv,
        has_elsd,
        has_ms,
        has_gc_ms,
        recommendations,
    }
}

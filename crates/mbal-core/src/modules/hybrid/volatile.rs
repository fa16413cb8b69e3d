//! Mass-closure deficit attributable to volatile species seen only by
//! headspace GC-MS.

use crate::domain::{ImpactLevel, VolatileAnalysis};
use crate::numerics::round_to;

pub const DETECTION_THRESHOLD: f64 = 2.0;
pub const HIGH_SEVERITY_THRESHOLD: f64 = 5.0;

pub fn volatile_analysis(
    initial_api: f64,
    stressed_api: f64,
    stressed_degradants: f64,
    gc_ms_volatiles: f64,
) -> VolatileAnalysis {
    let theoretical_mass = initial_api;
    let actual_mass = stressed_api + stressed_degradants + gc_ms_volatiles;
    let mass_loss = (theoretical_mass - actual_mass).max(0.0);
    let loss_pct = if initial_api > 0.0 {
        mass_loss / initial_api * 100.0
    } else {
        0.0
    };

    let detected = mass_loss > DETECTION_THRESHOLD || gc_ms_volatiles > 0.0;
    let severity = if loss_pct > HIGH_SEVERITY_THRESHOLD {
        ImpactLevel::High
    } else if loss_pct > DETECTION_THRESHOLD {
        ImpactLevel::Moderate
    } else {
        ImpactLevel::Low
    };

    let recommendation = match (detected, severity) {
        (true, ImpactLevel::High) => format!(
            "Unaccounted mass of {:.1}% suggests volatile degradants. Add headspace GC-MS to the method and include volatiles in the closure.",
            loss_pct
        ),
        (true, _) => {
            "Volatile species present. Confirm identity by headspace GC-MS and keep them in the closure calculation."
                .to_string()
        }
        (false, _) => {
            "No evidence of volatile losses; liquid-phase assay closes the balance.".to_string()
        }
    };

    VolatileAnalysis {
        detected,
        theoretical_mass,
        actual_mass: round_to(actual_mass, 2),
        mass_loss: round_to(mass_loss, 2),
        loss_pct: round_to(loss_pct, 2),
        severity,
        recommendation,
    }
}

//! Two-sided 95% Student-t critical values keyed by integer degrees of freedom.

use crate::common::TCriticalPolicy;

pub const T_TABLE_95: [(u32, f64); 15] = [
    (1, 12.706),
    (2, 4.303),
    (3, 3.182),
    (4, 2.776),
    (5, 2.571),
    (6, 2.447),
    (7, 2.365),
    (8, 2.306),
    (9, 2.262),
    (10, 2.228),
    (15, 2.131),
    (20, 2.086),
    (30, 2.042),
    (60, 2.000),
    (120, 1.980),
];

/// Used for every df above the last tabulated key.
pub const NORMAL_APPROXIMATION_T: f64 = 1.96;

/// df = 0 has no defined quantile and is clamped to the first key; callers
/// validate the configured df before reaching here.
pub fn t_critical_95(degrees_of_freedom: u32, policy: TCriticalPolicy) -> f64 {
    let (last_df, _) = T_TABLE_95[T_TABLE_95.len() - 1];
    if degrees_of_freedom > last_df {
        return NORMAL_APPROXIMATION_T;
    }

    let upper_index = T_TABLE_95
        .iter()
        .position(|(df, _)| *df >= degrees_of_freedom)
        .unwrap_or(T_TABLE_95.len() - 1);
    let (upper_df, upper_t) = T_TABLE_95[upper_index];
    if upper_df == degrees_of_freedom || upper_index == 0 {
        return upper_t;
    }

    let (lower_df, lower_t) = T_TABLE_95[upper_index - 1];
    match policy {
        TCriticalPolicy::TabulatedFloor => lower_t,
        TCriticalPolicy::LinearInterpolation => {
            let fraction =
                f64::from(degrees_of_freedom - lower_df) / f64::from(upper_df - lower_df);
            lower_t + (upper_t - lower_t) * fraction
        }
    }
}

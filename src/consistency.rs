//! Consistency ratio of a solved BWM model.
//!
//! The ratio is `xi* / CI`, where `CI` is the consistency index of the
//! largest best-to-others judgment on the 1-9 scale.

/// Consistency index for the maximum judgment `a_BW = 1..=9` (slot `a_BW - 1`).
pub const CONSISTENCY_INDEX: [f64; 9] = [0.00, 0.44, 1.00, 1.63, 2.30, 3.00, 3.73, 4.47, 5.23];

/// Consistency index for a maximum judgment.
///
/// Non-integer judgments round to the nearest scale point; anything outside
/// `1..=9` clamps to the nearest end of the table.
pub fn consistency_index(max_judgment: f64) -> f64 {
    let point = if max_judgment.is_nan() {
        9.0
    } else {
        max_judgment.round().clamp(1.0, 9.0)
    };
    CONSISTENCY_INDEX[point as usize - 1]
}

/// Consistency ratio for the best-to-others vector and the optimal `xi`.
///
/// All-ones judgments have a zero index and are reported as perfectly
/// consistent.
pub fn evaluate(best_to_others: &[f64], optimal_xi: f64) -> f64 {
    let max_judgment = best_to_others.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let ci = consistency_index(max_judgment);
    if ci > 0.0 {
        optimal_xi / ci
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup() {
        assert_eq!(consistency_index(1.0), 0.0);
        assert_eq!(consistency_index(3.0), 1.00);
        assert_eq!(consistency_index(9.0), 5.23);
    }

    #[test]
    fn lookup_rounds_and_clamps() {
        assert_eq!(consistency_index(2.4), 0.44);
        assert_eq!(consistency_index(2.5), 1.00);
        assert_eq!(consistency_index(12.0), 5.23);
        assert_eq!(consistency_index(1e9), 5.23);
        assert_eq!(consistency_index(0.3), 0.0);
    }

    #[test]
    fn ratio_scales_xi() {
        let judgments = [1.0, 2.0, 3.0];
        assert_eq!(evaluate(&judgments, 0.0), 0.0);
        assert!((evaluate(&judgments, 0.5) - 0.5).abs() < 1e-12);

        let judgments = [1.0, 8.0, 4.0];
        assert!((evaluate(&judgments, 0.447) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn judgments_above_nine_use_last_index() {
        let judgments = [1.0, 12.0, 5.0];
        assert!((evaluate(&judgments, 5.23) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn all_ones_is_consistent() {
        assert_eq!(evaluate(&[1.0, 1.0, 1.0], 0.3), 0.0);
    }

    #[test]
    fn ratio_is_monotone_in_xi() {
        let judgments = [1.0, 4.0, 7.0, 2.0];
        let ratios: Vec<f64> = (0..20).map(|k| evaluate(&judgments, k as f64 * 0.05)).collect();
        assert!(ratios.windows(2).all(|w| w[0] <= w[1]));
    }
}

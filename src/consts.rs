/// Lower bound of every criterion weight.
pub const WEIGHT_MIN: f64 = 0.01;
/// Upper bound of every criterion weight.
pub const WEIGHT_MAX: f64 = 1.0;

/// Tolerance for the self-comparison check and weight normalisation.
pub const EPS: f64 = 1e-9;

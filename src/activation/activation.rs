use std::f64::consts::E;

/// Logistic squashing function, range (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Gradient proxy used by backpropagation: `1` for a positive weighted sum,
/// `0` otherwise.
///
/// This is deliberately not the analytic sigmoid derivative `a(1 - a)`.
/// Training results depend on this exact rule, so it must not be swapped
/// for the smooth form.
pub fn step_derivative(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

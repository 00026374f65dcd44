//! Numerical differentiation.
//!
//! Derivatives are computed by the two-point (centered) difference
//!
//! f'(t) ≈ (f(t + h) - f(t - h)) / 2h
//!
//! which has O(h²) truncation error. When exactly one of the neighbouring
//! samples is NaN, the undefined side is replaced by f(t) and the step is
//! halved, which is the one-point difference with O(h) error.
//!
//! The function is treated as a black box: only its values are used.

use crate::function::Function;

/// Default step of the difference quotient.
pub const DEFAULT_STEP: f64 = 1e-4;

/// Approximates the derivative of `f` at `t` with step `h`.
///
/// Returns NaN when `f(t)` is NaN or when both neighbours are NaN.
pub fn central_difference<F: Fn(f64) -> f64>(f: &F, t: f64, h: f64) -> f64 {
    let center = f(t);
    if center.is_nan() {
        return f64::NAN;
    }

    let forward = f(t + h);
    let backward = f(t - h);

    // One-sided fallback next to a singularity
    match (forward.is_nan(), backward.is_nan()) {
        (true, false) => (center - backward) / h,
        (false, true) => (forward - center) / h,
        _ => (forward - backward) / (2.0 * h),
    }
}

impl Function {
    /// Returns the numerical derivative with the default step `1e-4`.
    #[must_use]
    pub fn derivative(&self) -> Function {
        self.derivative_with_step(DEFAULT_STEP)
    }

    /// Returns the numerical derivative using difference step `step`.
    #[must_use]
    pub fn derivative_with_step(&self, step: f64) -> Function {
        let f = self.clone();
        Function::new(move |t| central_difference(&|x| f.evaluate(x), t, step))
    }
}

//! Simpson's 3/8 Rule
//!
//! The fixed four-point rule on `[a, b]`:
//!
//! S(a, b) = (b - a)/8 · (f(a) + 3f((2a + b)/3) + 3f((a + 2b)/3) + f(b))
//!
//! It is exact for cubics. The adaptive integrator compares the rule on an
//! interval with the sum over its two halves to estimate the local error.

/// Applies Simpson's 3/8 rule to `f` on `[a, b]`.
///
/// Reversed bounds give the negated value. NaN anywhere among the four
/// samples makes the result NaN.
#[inline]
pub fn simpson_three_eighths<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    (b - a) / 8.0
        * (f(a) + 3.0 * f((2.0 * a + b) / 3.0) + 3.0 * f((a + 2.0 * b) / 3.0) + f(b))
}

/// Number of integrand evaluations per application of the rule.
pub const EVALUATIONS_PER_RULE: usize = 4;

/// One refinement step on `[a, b]`.
#[derive(Clone, Copy, Debug)]
pub struct Refinement {
    /// The rule applied to the whole interval.
    pub whole: f64,
    /// The rule summed over both halves.
    pub halves: f64,
}

impl Refinement {
    /// Applies the rule to `[a, b]` and to its two halves around `mid`.
    pub fn compute<F: Fn(f64) -> f64>(f: &F, a: f64, mid: f64, b: f64) -> Self {
        Self {
            whole: simpson_three_eighths(f, a, b),
            halves: simpson_three_eighths(f, a, mid) + simpson_three_eighths(f, mid, b),
        }
    }

    /// Difference between the refined and the coarse estimate.
    #[must_use]
    pub fn difference(&self) -> f64 {
        self.halves - self.whole
    }

    /// Returns true if the difference is within `15 · tolerance`.
    ///
    /// NaN never converges.
    #[must_use]
    pub fn converged(&self, tolerance: f64) -> bool {
        self.difference().abs() <= 15.0 * tolerance
    }

    /// The Richardson-extrapolated value `halves + (halves - whole) / 15`.
    #[must_use]
    pub fn extrapolated(&self) -> f64 {
        self.halves + self.difference() / 15.0
    }
}

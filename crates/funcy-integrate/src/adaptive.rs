//! Adaptive Simpson Integration
//!
//! Refines Simpson's 3/8 rule by bisection until every accepted piece meets
//! the local error test, using an explicit work-list of pending intervals
//! instead of recursion.
//!
//! # Generalized integrals
//!
//! An endpoint where the integrand is NaN is nudged inward by `tolerance³`,
//! which turns an integrable endpoint singularity into an ordinary integral.
//!
//! # Divergence
//!
//! The running total is checked against `bound` after every accepted piece.
//! Exceeding it aborts with NaN. This is a heuristic: a slowly converging
//! integral may be rejected, and a divergent one may take many steps to cross
//! the bound.

use crate::simpson::{Refinement, EVALUATIONS_PER_RULE};

/// Options for adaptive integration.
#[derive(Clone, Debug)]
pub struct IntegrationOptions {
    /// Local error tolerance per accepted interval.
    pub tolerance: f64,
    /// Divergence guard on the absolute running total.
    pub bound: f64,
    /// Maximum number of intervals examined before giving up.
    pub max_intervals: usize,
}

impl Default for IntegrationOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            bound: 1e10,
            max_intervals: 1_000_000,
        }
    }
}

impl IntegrationOptions {
    /// Default options with the given tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Replaces the divergence bound.
    #[must_use]
    pub fn bound(mut self, bound: f64) -> Self {
        self.bound = bound;
        self
    }

    /// Replaces the interval limit.
    #[must_use]
    pub fn max_intervals(mut self, max_intervals: usize) -> Self {
        self.max_intervals = max_intervals;
        self
    }
}

/// How an adaptive integration ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every interval met the error test.
    Converged,
    /// The running total exceeded the divergence bound.
    Diverged,
    /// The interval limit was reached first.
    IntervalLimit,
    /// A bound was infinite or NaN.
    InvalidRange,
}

/// Result of adaptive Simpson integration.
#[derive(Clone, Debug)]
pub struct SimpsonResult {
    /// The accumulated integral, NaN unless converged.
    pub value: f64,
    /// Number of intervals examined
    pub intervals: usize,
    /// Total number of integrand evaluations
    pub evaluations: usize,
    /// How the integration ended
    pub outcome: Outcome,
}

impl SimpsonResult {
    /// Returns true if the integration converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }
}

/// Integrates `f` from `start` to `end` with adaptive Simpson refinement.
///
/// The result is signed: `start > end` yields the negated integral over
/// `[end, start]`. Infinite or NaN bounds give NaN with
/// [`Outcome::InvalidRange`]; map infinite ranges onto finite ones first.
///
/// # Example
///
/// ```
/// use funcy_integrate::{adaptive_simpson, IntegrationOptions};
///
/// let result = adaptive_simpson(
///     &|x: f64| x.sin(),
///     0.0,
///     std::f64::consts::PI,
///     &IntegrationOptions::with_tolerance(1e-10),
/// );
/// assert!(result.converged());
/// assert!((result.value - 2.0).abs() < 1e-8);
/// ```
pub fn adaptive_simpson<F: Fn(f64) -> f64>(
    f: &F,
    start: f64,
    end: f64,
    options: &IntegrationOptions,
) -> SimpsonResult {
    let mut evaluations = 0;

    if !(start.is_finite() && end.is_finite()) {
        log::debug!("cannot integrate over [{start}, {end}]: bounds must be finite");
        return SimpsonResult {
            value: f64::NAN,
            intervals: 0,
            evaluations,
            outcome: Outcome::InvalidRange,
        };
    }

    if start == end {
        return SimpsonResult {
            value: 0.0,
            intervals: 0,
            evaluations,
            outcome: Outcome::Converged,
        };
    }

    // Generalized integral: step off undefined endpoints
    let nudge = options.tolerance.powi(3).copysign(end - start);
    let (mut a, mut b) = (start, end);
    evaluations += 2;
    if f(a).is_nan() {
        a += nudge;
        log::debug!("integrand undefined at {start}, integrating from {a}");
    }
    if f(b).is_nan() {
        b -= nudge;
        log::debug!("integrand undefined at {end}, integrating to {b}");
    }

    let mut pending = vec![(a, b)];
    let mut total = 0.0;
    let mut intervals = 0;

    while let Some((a, b)) = pending.pop() {
        if intervals >= options.max_intervals {
            log::debug!(
                "integration stopped after {intervals} intervals with {} pending",
                pending.len() + 1
            );
            return SimpsonResult {
                value: f64::NAN,
                intervals,
                evaluations,
                outcome: Outcome::IntervalLimit,
            };
        }
        intervals += 1;

        let mid = (a + b) / 2.0;
        if !(mid > a.min(b) && mid < a.max(b)) {
            // Floating-point exhaustion: the piece has no measure left
            log::trace!("dropping degenerate interval [{a}, {b}]");
            continue;
        }

        let step = Refinement::compute(f, a, mid, b);
        evaluations += 3 * EVALUATIONS_PER_RULE;

        if step.converged(options.tolerance) {
            total += step.extrapolated();
            if total.abs() > options.bound {
                log::debug!(
                    "integral over [{start}, {end}] exceeded bound {} near [{a}, {b}]",
                    options.bound
                );
                return SimpsonResult {
                    value: f64::NAN,
                    intervals,
                    evaluations,
                    outcome: Outcome::Diverged,
                };
            }
        } else {
            // Left half is processed first
            pending.push((mid, b));
            pending.push((a, mid));
        }
    }

    SimpsonResult {
        value: total,
        intervals,
        evaluations,
        outcome: Outcome::Converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn precise() -> IntegrationOptions {
        IntegrationOptions::with_tolerance(1e-10)
    }

    #[test]
    fn test_adaptive_polynomial() {
        // ∫₀¹ x³ dx = 1/4
        let result = adaptive_simpson(&|x: f64| x.powi(3), 0.0, 1.0, &precise());
        assert!(result.converged());
        assert_abs_diff_eq!(result.value, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_adaptive_sine() {
        // ∫₀^π sin(x) dx = 2
        let result = adaptive_simpson(&f64::sin, 0.0, PI, &precise());
        assert_abs_diff_eq!(result.value, 2.0, epsilon = 1e-8);
        assert!(result.intervals > 1);
    }

    #[test]
    fn test_adaptive_oscillatory() {
        // ∫₀^10 sin(10x) dx = (1 - cos(100))/10
        let result = adaptive_simpson(&|x: f64| (10.0 * x).sin(), 0.0, 10.0, &precise());
        let expected = (1.0 - 100.0_f64.cos()) / 10.0;
        assert_abs_diff_eq!(result.value, expected, epsilon = 1e-7);
    }

    #[test]
    fn test_reversed_bounds() {
        let forward = adaptive_simpson(&f64::sin, 0.0, PI, &precise());
        let backward = adaptive_simpson(&f64::sin, PI, 0.0, &precise());
        assert_abs_diff_eq!(backward.value, -forward.value, epsilon = 1e-8);
    }

    #[test]
    fn test_empty_interval() {
        let result = adaptive_simpson(&f64::exp, 1.5, 1.5, &precise());
        assert_eq!(result.value, 0.0);
        assert_eq!(result.intervals, 0);
    }

    #[test]
    fn test_non_finite_bounds_are_rejected() {
        let options = IntegrationOptions::default();
        let result = adaptive_simpson(&|x: f64| (-x).exp(), 0.0, f64::INFINITY, &options);
        assert_eq!(result.outcome, Outcome::InvalidRange);
        assert!(result.value.is_nan());

        let result = adaptive_simpson(&|_| 1.0, f64::NAN, 1.0, &options);
        assert_eq!(result.outcome, Outcome::InvalidRange);
        assert!(result.value.is_nan());

        let result = adaptive_simpson(&|_| 1.0, f64::NEG_INFINITY, f64::NEG_INFINITY, &options);
        assert!(!result.converged());
    }

    #[test]
    fn test_endpoint_singularity_is_nudged() {
        // ∫₀¹ 1/√x dx = 2, undefined at 0
        let f = |x: f64| if x == 0.0 { f64::NAN } else { 1.0 / x.sqrt() };
        let result = adaptive_simpson(&f, 0.0, 1.0, &precise());
        assert!(result.converged());
        assert_abs_diff_eq!(result.value, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_divergence_guard() {
        let f = |x: f64| if x == 0.0 { f64::NAN } else { 1.0 / (x * x) };
        let result = adaptive_simpson(&f, 0.0, 1.0, &IntegrationOptions::default());
        assert_eq!(result.outcome, Outcome::Diverged);
        assert!(result.value.is_nan());
    }

    #[test]
    fn test_smaller_bound_rejects_finite_integral() {
        let options = IntegrationOptions::default().bound(1.0);
        let result = adaptive_simpson(&|_| 1.0, 0.0, 5.0, &options);
        assert_eq!(result.outcome, Outcome::Diverged);
    }

    #[test]
    fn test_interval_limit() {
        // Undefined everywhere: every piece keeps splitting
        let options = IntegrationOptions::default().max_intervals(1000);
        let result = adaptive_simpson(&|_| f64::NAN, 0.0, 1.0, &options);
        assert_eq!(result.outcome, Outcome::IntervalLimit);
        assert_eq!(result.intervals, 1000);
        assert!(result.value.is_nan());
    }

    #[test]
    fn test_interior_undefined_point_is_dropped() {
        // |x - 1/2| is undefined exactly at the first midpoint
        let f = |x: f64| if x == 0.5 { f64::NAN } else { (x - 0.5).abs() };
        let result = adaptive_simpson(&f, 0.0, 1.0, &precise());
        assert!(result.converged());
        assert_abs_diff_eq!(result.value, 0.25, epsilon = 1e-9);
    }
}

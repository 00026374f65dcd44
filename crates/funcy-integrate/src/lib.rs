//! # funcy-integrate
//!
//! Numerical integration and function-space norms for [`funcy_core::Function`].
//!
//! # Available Methods
//!
//! - **Simpson's 3/8 rule**: the fixed four-point rule
//! - **Adaptive integration**: bisection driven by a Richardson error
//!   estimate, with an explicit work-list of pending intervals
//! - **Generalized integrals**: endpoints where the integrand is undefined are
//!   nudged inward
//! - **Lᵖ norms**: over the whole real line via `x = t/(1 - t²)`
//!
//! A divergent integral is not an error: it evaluates to NaN.
//!
//! # Example
//!
//! ```
//! use funcy_core::{identity, sin, sqrt};
//! use funcy_integrate::Integrate;
//!
//! // ∫₀^π sin(x) dx = 2
//! let area = sin().integrate_with_tolerance(0.0, std::f64::consts::PI, 1e-10);
//! assert!((area - 2.0).abs() < 1e-8);
//!
//! // ∫₀¹ 1/√x dx = 2, undefined at 0
//! let improper = (1.0 / sqrt()).integrate_with_tolerance(0.0, 1.0, 1e-10);
//! assert!((improper - 2.0).abs() < 1e-6);
//!
//! // ∫₀¹ 1/x² dx diverges
//! assert!((1.0 / (identity() * identity())).integrate(0.0, 1.0).is_nan());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adaptive;
pub mod norm;
pub mod simpson;

#[cfg(test)]
mod proptests;

pub use adaptive::{adaptive_simpson, IntegrationOptions, Outcome, SimpsonResult};
pub use norm::{norm, norm_with_options, ConvergenceProbe, NormError, NormKind, NormOptions};
pub use simpson::simpson_three_eighths;

use funcy_core::Function;

/// Definite integration of a [`Function`].
pub trait Integrate {
    /// Integrates from `start` to `end` with the default options.
    ///
    /// Returns NaN when the integral diverges.
    fn integrate(&self, start: f64, end: f64) -> f64 {
        self.integrate_with_options(start, end, &IntegrationOptions::default())
    }

    /// Integrates from `start` to `end` with the given local tolerance.
    fn integrate_with_tolerance(&self, start: f64, end: f64, tolerance: f64) -> f64 {
        self.integrate_with_options(start, end, &IntegrationOptions::with_tolerance(tolerance))
    }

    /// Integrates from `start` to `end` with explicit options.
    fn integrate_with_options(&self, start: f64, end: f64, options: &IntegrationOptions) -> f64;
}

impl Integrate for Function {
    fn integrate_with_options(&self, start: f64, end: f64, options: &IntegrationOptions) -> f64 {
        adaptive_simpson(&|x| self.evaluate(x), start, end, options).value
    }
}

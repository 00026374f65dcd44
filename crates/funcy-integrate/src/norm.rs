//! Lᵖ Norms over the Real Line
//!
//! ‖f‖ₚ = (∫ |f|ᵖ dx)^(1/p) over (-∞, ∞).
//!
//! Before integrating, |f|ᵖ is probed far out on both sides. The norm is only
//! computed when the samples decay and are already small; otherwise the
//! result is NaN. The probe is a heuristic, not a proof of convergence.
//!
//! The infinite integral is mapped onto (-1, 1) with the substitution
//! x = t/(1 - t²), dx = (1 + t²)/(1 - t²)² dt. The endpoints ±1 are singular
//! and handled as generalized integrals.

use std::fmt;
use std::str::FromStr;

use funcy_core::{identity, Function};
use num_traits::Pow;
use thiserror::Error;

use crate::adaptive::IntegrationOptions;
use crate::Integrate;

/// Errors raised by norm computation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NormError {
    /// The norm specifier is not of the form `L<p>` with integer `p >= 1`.
    #[error("invalid norm type {0:?}: expected \"L\" followed by a positive integer")]
    InvalidKind(String),
}

/// Which Lᵖ norm to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NormKind(u32);

impl NormKind {
    /// The L¹ norm.
    pub const L1: NormKind = NormKind(1);
    /// The L² norm.
    pub const L2: NormKind = NormKind(2);

    /// Creates the Lᵖ norm kind, `None` for `p == 0`.
    #[must_use]
    pub fn new(p: u32) -> Option<Self> {
        (p > 0).then_some(NormKind(p))
    }

    /// The exponent `p`.
    #[must_use]
    pub fn exponent(self) -> u32 {
        self.0
    }
}

impl Default for NormKind {
    fn default() -> Self {
        NormKind::L2
    }
}

impl FromStr for NormKind {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('L')
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(NormKind::new)
            .ok_or_else(|| NormError::InvalidKind(s.to_string()))
    }
}

impl fmt::Display for NormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Sample points and threshold of the convergence probe.
#[derive(Clone, Debug)]
pub struct ConvergenceProbe {
    /// Near sample distance from the origin.
    pub near: f64,
    /// Far sample distance from the origin.
    pub far: f64,
    /// Upper limit on |f|ᵖ at the near samples.
    pub threshold: f64,
}

impl Default for ConvergenceProbe {
    fn default() -> Self {
        Self {
            near: 1e5,
            far: 1e6,
            threshold: 1e-5,
        }
    }
}

impl ConvergenceProbe {
    /// Returns true if `g` looks integrable over the real line.
    ///
    /// Requires `|g(±near)| >= |g(±far)|` and `|g(±near)| < threshold`.
    /// Overflow while sampling counts as not integrable.
    #[must_use]
    pub fn accepts(&self, g: &Function) -> bool {
        [1.0, -1.0].iter().all(|&side| {
            let near = g.checked_evaluate(side * self.near);
            let far = g.checked_evaluate(side * self.far);
            match (near, far) {
                (Ok(near), Ok(far)) => near.abs() >= far.abs() && near.abs() < self.threshold,
                (Err(err), _) | (_, Err(err)) => {
                    log::debug!("norm probe rejected: {err}");
                    false
                }
            }
        })
    }
}

/// Options for norm computation.
#[derive(Clone, Debug)]
pub struct NormOptions {
    /// Which norm.
    pub kind: NormKind,
    /// Tolerance of the underlying integration.
    pub tolerance: f64,
    /// Decay probe run before integrating.
    pub probe: ConvergenceProbe,
    /// Divergence bound of the underlying integration.
    pub bound: f64,
}

impl Default for NormOptions {
    fn default() -> Self {
        Self {
            kind: NormKind::L2,
            tolerance: 1e-5,
            probe: ConvergenceProbe::default(),
            bound: IntegrationOptions::default().bound,
        }
    }
}

/// Computes the norm named by `kind` (e.g. `"L2"`) of `function`.
///
/// NaN means the norm does not exist or could not be verified to exist.
///
/// # Errors
///
/// Returns [`NormError::InvalidKind`] for a malformed specifier.
///
/// # Example
///
/// ```
/// use funcy_core::{exp, identity};
/// use funcy_integrate::norm;
/// use num_traits::Pow;
///
/// let gaussian = exp().compose(&-identity().pow(2.0));
/// let l1 = norm(&gaussian, "L1", 1e-5).unwrap();
/// assert!((l1 - std::f64::consts::PI.sqrt()).abs() < 1e-4);
///
/// assert!(norm(&exp(), "L2", 1e-5).unwrap().is_nan());
/// ```
pub fn norm(function: &Function, kind: &str, tolerance: f64) -> Result<f64, NormError> {
    let options = NormOptions {
        kind: kind.parse()?,
        tolerance,
        ..NormOptions::default()
    };
    Ok(norm_with_options(function, &options))
}

/// Computes a norm with explicit options.
#[must_use]
pub fn norm_with_options(function: &Function, options: &NormOptions) -> f64 {
    let p = f64::from(options.kind.exponent());
    let g = function.abs().pow(p);

    if !options.probe.accepts(&g) {
        log::debug!("{} norm rejected by decay probe", options.kind);
        return f64::NAN;
    }

    let t = identity();
    let one_minus_square = 1.0 - (&t).pow(2.0);
    let substitution = &t / &one_minus_square;
    let jacobian = (1.0 + (&t).pow(2.0)) / one_minus_square.pow(2.0);
    let integrand = g.compose(&substitution) * jacobian;

    let integration = IntegrationOptions::with_tolerance(options.tolerance).bound(options.bound);
    integrand
        .integrate_with_options(-1.0, 1.0, &integration)
        .powf(p.recip())
}

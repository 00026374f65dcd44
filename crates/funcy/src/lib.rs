//! # Funcy
//!
//! Manipulate single-variable real functions by composition and evaluate
//! them numerically.
//!
//! ## Features
//!
//! - **Function algebra**: `exp() + sin()`, `identity().pow(2.0)`, `exp().compose(&log())`
//! - **Numerical differentiation**: centered differences with a one-sided
//!   fallback next to singularities
//! - **Numerical integration**: adaptive Simpson's 3/8 rule, including
//!   generalized integrals and divergence detection
//! - **Lᵖ norms** over the whole real line
//!
//! Undefined points and divergent integrals are NaN, never errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use funcy::prelude::*;
//!
//! let f = exp() + sin();
//! assert_eq!(f.evaluate(0.0), 1.0);
//!
//! let df = identity().pow(2.0).derivative();
//! assert!((df.evaluate(3.0) - 6.0).abs() < 1e-6);
//!
//! let area = sin().integrate(0.0, std::f64::consts::PI);
//! assert!((area - 2.0).abs() < 1e-4);
//!
//! let gaussian = exp().compose(&-identity().pow(2.0));
//! let l2 = norm(&gaussian, "L2", 1e-5).unwrap();
//! assert!((l2 - (std::f64::consts::PI / 2.0).powf(0.25)).abs() < 1e-5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use funcy_core as core;
pub use funcy_integrate as integrate;

pub use funcy_core::{
    acos, asin, atan, constant, cos, exp, identity, log, sin, sqrt, tan, Function, FunctionError,
    Operand, Operator, Renderer, SampledGrid,
};
pub use funcy_integrate::{norm, norm_with_options, Integrate, IntegrationOptions, NormError, NormKind, NormOptions};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use funcy_core::{
        acos, asin, atan, constant, cos, exp, identity, log, sin, sqrt, tan, Function,
        FunctionError, Operand, Operator,
    };
    pub use funcy_integrate::{norm, Integrate, IntegrationOptions, NormOptions};
    pub use num_traits::Pow;
}

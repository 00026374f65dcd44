//! # funcy-core
//!
//! Composable single-variable real functions.
//!
//! This crate provides:
//! - The [`Function`] type: an opaque, immutable `f64 -> f64` rule
//! - Pointwise algebra (`+ - * /`, negation, [`num_traits::Pow`]) with numbers
//!   and other functions, plus composition
//! - Elementary functions (`exp`, `log`, `sin`, ...)
//! - Numerical differentiation by centered differences
//! - Grid sampling for external renderers
//!
//! ## Design Principles
//!
//! - **Black-box evaluation**: no expression tree is kept; calculus works
//!   through repeated evaluation only
//! - **NaN as the undefined marker**: division by zero and out-of-domain
//!   arguments yield NaN instead of errors, so composite expressions need no
//!   per-operator error handling
//! - **Errors for misuse only**: unsupported operands, invalid arguments and
//!   reported overflow are [`FunctionError`]s
//!
//! ## Example
//!
//! ```
//! use funcy_core::{exp, identity, sin};
//! use num_traits::Pow;
//!
//! let f = exp() + sin();
//! assert_eq!(f.evaluate(0.0), 1.0);
//!
//! let g = (identity().pow(2.0)).derivative();
//! assert!((g.evaluate(3.0) - 6.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod derivative;
pub mod elementary;
pub mod error;
pub mod function;
pub mod operand;
mod ops;
pub mod sampling;

#[cfg(test)]
mod proptests;

pub use derivative::{central_difference, DEFAULT_STEP};
pub use elementary::{acos, asin, atan, constant, cos, exp, identity, log, sin, sqrt, tan};
pub use error::FunctionError;
pub use function::Function;
pub use operand::{Operand, Operator};
pub use sampling::{Renderer, SampledGrid, DEFAULT_MAX_POINTS};

//! Errors raised by function construction and evaluation.
//!
//! Points where a function is undefined are *not* errors: they are reported
//! in-band as NaN. Only misuse of the API and overflow surface here.

use thiserror::Error;

use crate::operand::Operator;

/// Errors that can occur while combining or evaluating functions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FunctionError {
    /// A binary operator was applied to something that is neither a number
    /// nor a function.
    #[error("unsupported operand type for {operator}: functions combine only with real numbers or other functions, found {found}")]
    UnsupportedOperand {
        /// The operator that rejected the operand.
        operator: Operator,
        /// Description of the rejected operand.
        found: &'static str,
    },

    /// A function was called on something that is neither a number nor a
    /// function.
    #[error("can only call a function on a real number or another function, found {found}")]
    InvalidArgument {
        /// Description of the rejected argument.
        found: &'static str,
    },

    /// Evaluation at a finite argument produced an infinite value.
    #[error("numerical result out of range at x = {argument}")]
    Overflow {
        /// The argument at which the overflow occurred.
        argument: f64,
    },

    /// A sampling step that cannot advance from start to end.
    #[error("sampling step must be positive and finite, got {0}")]
    InvalidStep(f64),

    /// A sampling range with a non-finite bound.
    #[error("sampling range must have finite bounds, got [{start}, {end}]")]
    InvalidRange {
        /// Start of the range.
        start: f64,
        /// End of the range.
        end: f64,
    },

    /// A sampling grid with more points than allowed.
    #[error("sampling grid would have {points} points, more than the limit of {limit}")]
    GridTooLarge {
        /// Estimated number of grid points.
        points: f64,
        /// The configured limit.
        limit: usize,
    },
}

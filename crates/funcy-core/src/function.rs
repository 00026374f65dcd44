//! The [`Function`] node type.
//!
//! A `Function` wraps an opaque evaluation rule `f64 -> f64`. Combinators
//! produce new functions whose rules close over their operands; there is no
//! expression tree to inspect, so every numerical algorithm works through
//! repeated evaluation only.

use std::fmt;
use std::sync::Arc;

use crate::error::FunctionError;
use crate::operand::Operand;

type Rule = dyn Fn(f64) -> f64 + Send + Sync;

/// An immutable, possibly partial, real-to-real function.
///
/// Evaluating outside the domain yields NaN rather than an error. Cloning is
/// cheap: clones share the same evaluation rule.
#[derive(Clone)]
pub struct Function {
    rule: Arc<Rule>,
}

impl Function {
    /// Wraps an evaluation rule.
    ///
    /// The rule must accept any finite real number and return either a real
    /// number or NaN where it is undefined.
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            rule: Arc::new(rule),
        }
    }

    /// Evaluates the function at `x`.
    ///
    /// NaN means the function is undefined at `x`. Overflow shows up as an
    /// infinite value; use [`Function::checked_evaluate`] to have it reported.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.rule)(x)
    }

    /// Evaluates the function at `x`, reporting overflow.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::Overflow`] when `x` is finite but the result
    /// is infinite. The built-in combinators map poles to NaN, so an infinite
    /// value here comes from overflow or from a pole in a custom rule.
    pub fn checked_evaluate(&self, x: f64) -> Result<f64, FunctionError> {
        let value = self.evaluate(x);
        if x.is_finite() && value.is_infinite() {
            return Err(FunctionError::Overflow { argument: x });
        }
        Ok(value)
    }

    /// Calls the function on a number or on another function.
    ///
    /// A number is evaluated directly. A function `g` yields the composition
    /// `x -> self(g(x))`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::InvalidArgument`] for any other operand kind.
    pub fn call(&self, argument: impl Into<Operand>) -> Result<Operand, FunctionError> {
        match argument.into() {
            Operand::Scalar(x) => Ok(Operand::Scalar(self.evaluate(x))),
            Operand::Function(inner) => Ok(Operand::Function(self.compose(&inner))),
            Operand::Unsupported(found) => Err(FunctionError::InvalidArgument { found }),
        }
    }

    /// Returns `x -> self(inner(x))`.
    #[must_use]
    pub fn compose(&self, inner: &Function) -> Function {
        let outer = self.clone();
        let inner = inner.clone();
        Function::new(move |x| outer.evaluate(inner.evaluate(x)))
    }

    /// Unary plus: returns this function unchanged.
    #[must_use]
    pub fn pos(&self) -> Function {
        self.clone()
    }

    /// Returns `x -> |self(x)|`.
    #[must_use]
    pub fn abs(&self) -> Function {
        self.map(f64::abs)
    }

    /// Returns `x -> NaN if self(x) == 0 else 1 / self(x)`.
    #[must_use]
    pub fn recip(&self) -> Function {
        self.map(|v| if v == 0.0 { f64::NAN } else { v.recip() })
    }

    /// Lifts a scalar operation over the values of this function.
    pub(crate) fn map<F>(&self, op: F) -> Function
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        let inner = self.clone();
        Function::new(move |x| op(inner.evaluate(x)))
    }

    /// Combines the values of two functions pointwise.
    pub(crate) fn zip<F>(&self, other: &Function, op: F) -> Function
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        let lhs = self.clone();
        let rhs = other.clone();
        Function::new(move |x| op(lhs.evaluate(x), rhs.evaluate(x)))
    }

    /// Returns true if both handles share the same evaluation rule.
    #[must_use]
    pub fn ptr_eq(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.rule, &other.rule)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").finish_non_exhaustive()
    }
}

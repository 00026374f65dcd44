//! Operand kinds accepted by the function combinators.
//!
//! Every binary combinator takes its other operand as an [`Operand`]: either a
//! plain real number, another [`Function`], or something unsupported that is
//! routed to the error path.

use std::any::Any;
use std::fmt;

use crate::function::Function;

/// The binary operators a [`Function`] supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Pointwise addition.
    Add,
    /// Pointwise subtraction.
    Sub,
    /// Pointwise multiplication.
    Mul,
    /// Pointwise division, NaN where the divisor is zero.
    Div,
    /// Pointwise exponentiation.
    Pow,
}

impl Operator {
    /// Returns the conventional symbol for this operator.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "**",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The other side of a function combinator, or the argument of a call.
#[derive(Clone, Debug)]
pub enum Operand {
    /// A real number.
    Scalar(f64),
    /// Another function.
    Function(Function),
    /// A value of an unsupported kind, described by its type name.
    Unsupported(&'static str),
}

impl Operand {
    /// Classifies a dynamically typed value.
    ///
    /// Numeric primitives become [`Operand::Scalar`], functions become
    /// [`Operand::Function`], and anything else is [`Operand::Unsupported`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_any(value: &dyn Any) -> Self {
        if let Some(n) = value.downcast_ref::<f64>() {
            Operand::Scalar(*n)
        } else if let Some(n) = value.downcast_ref::<f32>() {
            Operand::Scalar(f64::from(*n))
        } else if let Some(n) = value.downcast_ref::<i32>() {
            Operand::Scalar(f64::from(*n))
        } else if let Some(n) = value.downcast_ref::<u32>() {
            Operand::Scalar(f64::from(*n))
        } else if let Some(n) = value.downcast_ref::<i64>() {
            Operand::Scalar(*n as f64)
        } else if let Some(function) = value.downcast_ref::<Function>() {
            Operand::Function(function.clone())
        } else if value.is::<String>() || value.is::<&str>() {
            Operand::Unsupported("string")
        } else if value.is::<bool>() {
            Operand::Unsupported("bool")
        } else {
            Operand::Unsupported("unsupported value")
        }
    }

    /// Returns the scalar value, if this is a number.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Operand::Scalar(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the function, if this is one.
    #[must_use]
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Operand::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Consumes the operand and returns the function, if this is one.
    #[must_use]
    pub fn into_function(self) -> Option<Function> {
        match self {
            Operand::Function(f) => Some(f),
            _ => None,
        }
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Scalar(n)
    }
}

impl From<f32> for Operand {
    fn from(n: f32) -> Self {
        Operand::Scalar(f64::from(n))
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Scalar(f64::from(n))
    }
}

impl From<u32> for Operand {
    fn from(n: u32) -> Self {
        Operand::Scalar(f64::from(n))
    }
}

impl From<i64> for Operand {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Operand::Scalar(n as f64)
    }
}

impl From<Function> for Operand {
    fn from(f: Function) -> Self {
        Operand::Function(f)
    }
}

impl From<&Function> for Operand {
    fn from(f: &Function) -> Self {
        Operand::Function(f.clone())
    }
}

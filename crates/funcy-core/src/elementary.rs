//! Elementary functions.
//!
//! Each constructor returns a fresh [`Function`] wrapping the corresponding
//! `f64` method. Outside the real domain the result is NaN: `log` of a
//! non-positive number, `sqrt` of a negative number, `asin`/`acos` outside
//! `[-1, 1]`.

use crate::function::Function;

/// The exponential function `e^x`.
#[must_use]
pub fn exp() -> Function {
    Function::new(f64::exp)
}

/// The natural logarithm, NaN for `x <= 0`.
#[must_use]
pub fn log() -> Function {
    Function::new(|x: f64| if x <= 0.0 { f64::NAN } else { x.ln() })
}

/// The sine function.
#[must_use]
pub fn sin() -> Function {
    Function::new(f64::sin)
}

/// The inverse sine function.
#[must_use]
pub fn asin() -> Function {
    Function::new(f64::asin)
}

/// The cosine function.
#[must_use]
pub fn cos() -> Function {
    Function::new(f64::cos)
}

/// The inverse cosine function.
#[must_use]
pub fn acos() -> Function {
    Function::new(f64::acos)
}

/// The tangent function.
#[must_use]
pub fn tan() -> Function {
    Function::new(f64::tan)
}

/// The inverse tangent function.
#[must_use]
pub fn atan() -> Function {
    Function::new(f64::atan)
}

/// The square root, NaN for `x < 0`.
#[must_use]
pub fn sqrt() -> Function {
    Function::new(f64::sqrt)
}

/// The identity function `x -> x`, i.e. the variable itself.
#[must_use]
pub fn identity() -> Function {
    Function::new(|x| x)
}

/// The constant function `x -> value`.
#[must_use]
pub fn constant(value: f64) -> Function {
    Function::new(move |_| value)
}

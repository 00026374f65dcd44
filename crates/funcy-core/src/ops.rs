//! Algebraic combinators on functions.
//!
//! All combinators are pointwise and return a new [`Function`]; operands are
//! never mutated. Division yields NaN wherever the divisor is zero.
//!
//! The fallible entry points are [`Function::apply`] and
//! [`Function::apply_reflected`], which accept any [`Operand`]. The `std::ops`
//! traits and [`num_traits::Pow`] provide infallible sugar for the statically
//! known cases.
//!
//! Like division, a zero base raised to a negative power is NaN rather than
//! infinite.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Pow;

use crate::elementary;
use crate::error::FunctionError;
use crate::function::Function;
use crate::operand::{Operand, Operator};

#[inline]
fn divide(lhs: f64, rhs: f64) -> f64 {
    if rhs == 0.0 {
        f64::NAN
    } else {
        lhs / rhs
    }
}

#[inline]
fn power(base: f64, exponent: f64) -> f64 {
    if base == 0.0 && exponent < 0.0 {
        f64::NAN
    } else {
        base.powf(exponent)
    }
}

impl Function {
    /// Combines `self` with `rhs` as `self <operator> rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::UnsupportedOperand`] naming the operator when
    /// `rhs` is neither a number nor a function.
    pub fn apply(&self, operator: Operator, rhs: impl Into<Operand>) -> Result<Function, FunctionError> {
        match rhs.into() {
            Operand::Scalar(n) => Ok(self.with_scalar(operator, n)),
            Operand::Function(g) => Ok(self.with_function(operator, &g)),
            Operand::Unsupported(found) => Err(FunctionError::UnsupportedOperand { operator, found }),
        }
    }

    /// Combines `self` with `lhs` as `lhs <operator> self`.
    ///
    /// Subtraction is rewritten as `(-self) + lhs`, division as
    /// `(1 / self) * lhs` and exponentiation as `exp(self * ln(lhs))`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::UnsupportedOperand`] naming the operator when
    /// `lhs` is neither a number nor a function.
    pub fn apply_reflected(
        &self,
        operator: Operator,
        lhs: impl Into<Operand>,
    ) -> Result<Function, FunctionError> {
        let reflected = match (operator, lhs.into()) {
            (_, Operand::Unsupported(found)) => {
                return Err(FunctionError::UnsupportedOperand { operator, found });
            }
            (Operator::Add | Operator::Mul, lhs) => return self.apply(operator, lhs),
            (Operator::Sub, lhs) => (-self).apply(Operator::Add, lhs)?,
            (Operator::Div, lhs) => self.recip().apply(Operator::Mul, lhs)?,
            (Operator::Pow, Operand::Scalar(n)) => self.scalar_base_pow(n),
            (Operator::Pow, Operand::Function(g)) => {
                let ln = elementary::log().compose(&g);
                elementary::exp().compose(&self.with_function(Operator::Mul, &ln))
            }
        };
        Ok(reflected)
    }

    fn with_scalar(&self, operator: Operator, n: f64) -> Function {
        match operator {
            Operator::Add => self.map(move |v| v + n),
            Operator::Sub => self.map(move |v| v - n),
            Operator::Mul => self.map(move |v| v * n),
            Operator::Div if n == 0.0 => Function::new(|_| f64::NAN),
            Operator::Div => self.map(move |v| v / n),
            Operator::Pow => self.map(move |v| power(v, n)),
        }
    }

    /// `n ** self` as `exp(self * ln n)`; NaN everywhere for `n <= 0`.
    fn scalar_base_pow(&self, n: f64) -> Function {
        let ln = elementary::log().evaluate(n);
        elementary::exp().compose(&self.with_scalar(Operator::Mul, ln))
    }

    fn with_function(&self, operator: Operator, g: &Function) -> Function {
        match operator {
            Operator::Add => self.zip(g, |a, b| a + b),
            Operator::Sub => self.zip(g, |a, b| a - b),
            Operator::Mul => self.zip(g, |a, b| a * b),
            Operator::Div => self.zip(g, divide),
            Operator::Pow => self.zip(g, power),
        }
    }
}

impl Neg for Function {
    type Output = Function;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Neg for &Function {
    type Output = Function;

    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

// Function <op> Function and Function <op> f64, for owned and borrowed receivers.
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $operator:expr) => {
        impl $trait<&Function> for &Function {
            type Output = Function;

            fn $method(self, rhs: &Function) -> Function {
                self.with_function($operator, rhs)
            }
        }

        impl $trait<Function> for &Function {
            type Output = Function;

            fn $method(self, rhs: Function) -> Function {
                self.with_function($operator, &rhs)
            }
        }

        impl $trait<&Function> for Function {
            type Output = Function;

            fn $method(self, rhs: &Function) -> Function {
                self.with_function($operator, rhs)
            }
        }

        impl $trait<Function> for Function {
            type Output = Function;

            fn $method(self, rhs: Function) -> Function {
                self.with_function($operator, &rhs)
            }
        }

        impl $trait<f64> for &Function {
            type Output = Function;

            fn $method(self, rhs: f64) -> Function {
                self.with_scalar($operator, rhs)
            }
        }

        impl $trait<f64> for Function {
            type Output = Function;

            fn $method(self, rhs: f64) -> Function {
                self.with_scalar($operator, rhs)
            }
        }
    };
}

forward_binop!(Add, add, Operator::Add);
forward_binop!(Sub, sub, Operator::Sub);
forward_binop!(Mul, mul, Operator::Mul);
forward_binop!(Div, div, Operator::Div);

// f64 <op> Function goes through the reflected rewrites.
macro_rules! reflected_binop {
    ($trait:ident, $method:ident, |$f:ident, $n:ident| $body:expr) => {
        impl $trait<&Function> for f64 {
            type Output = Function;

            fn $method(self, rhs: &Function) -> Function {
                let ($f, $n) = (rhs, self);
                $body
            }
        }

        impl $trait<Function> for f64 {
            type Output = Function;

            fn $method(self, rhs: Function) -> Function {
                let ($f, $n) = (&rhs, self);
                $body
            }
        }
    };
}

reflected_binop!(Add, add, |f, n| f.with_scalar(Operator::Add, n));
reflected_binop!(Sub, sub, |f, n| (-f).with_scalar(Operator::Add, n));
reflected_binop!(Mul, mul, |f, n| f.with_scalar(Operator::Mul, n));
reflected_binop!(Div, div, |f, n| f.recip().with_scalar(Operator::Mul, n));

impl Pow<f64> for &Function {
    type Output = Function;

    fn pow(self, rhs: f64) -> Function {
        self.with_scalar(Operator::Pow, rhs)
    }
}

impl Pow<f64> for Function {
    type Output = Function;

    fn pow(self, rhs: f64) -> Function {
        self.with_scalar(Operator::Pow, rhs)
    }
}

impl Pow<&Function> for &Function {
    type Output = Function;

    fn pow(self, rhs: &Function) -> Function {
        self.with_function(Operator::Pow, rhs)
    }
}

impl Pow<Function> for &Function {
    type Output = Function;

    fn pow(self, rhs: Function) -> Function {
        self.with_function(Operator::Pow, &rhs)
    }
}

impl Pow<&Function> for Function {
    type Output = Function;

    fn pow(self, rhs: &Function) -> Function {
        self.with_function(Operator::Pow, rhs)
    }
}

impl Pow<Function> for Function {
    type Output = Function;

    fn pow(self, rhs: Function) -> Function {
        self.with_function(Operator::Pow, &rhs)
    }
}

impl Pow<&Function> for f64 {
    type Output = Function;

    fn pow(self, rhs: &Function) -> Function {
        rhs.scalar_base_pow(self)
    }
}

impl Pow<Function> for f64 {
    type Output = Function;

    fn pow(self, rhs: Function) -> Function {
        rhs.scalar_base_pow(self)
    }
}

//! Property-based tests for the function combinators.

#[cfg(test)]
mod tests {
    use num_traits::Pow;
    use proptest::prelude::*;

    use crate::elementary::{cos, exp, identity, sin};
    use crate::Function;

    // Arguments small enough that exp does not overflow
    fn argument() -> impl Strategy<Value = f64> {
        -20.0f64..20.0f64
    }

    fn scalar() -> impl Strategy<Value = f64> {
        -100.0f64..100.0f64
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * (1.0 + a.abs().max(b.abs()))
    }

    fn pair() -> (Function, Function) {
        (exp(), sin())
    }

    proptest! {
        #[test]
        fn add_is_pointwise(t in argument()) {
            let (f, g) = pair();
            prop_assert_eq!((&f + &g).evaluate(t), f.evaluate(t) + g.evaluate(t));
        }

        #[test]
        fn sub_is_pointwise(t in argument()) {
            let (f, g) = pair();
            prop_assert_eq!((&f - &g).evaluate(t), f.evaluate(t) - g.evaluate(t));
        }

        #[test]
        fn mul_is_pointwise(t in argument()) {
            let (f, g) = pair();
            prop_assert_eq!((&f * &g).evaluate(t), f.evaluate(t) * g.evaluate(t));
        }

        #[test]
        fn div_is_pointwise_where_defined(t in argument()) {
            let (f, g) = pair();
            let divisor = g.evaluate(t);
            prop_assume!(divisor != 0.0);
            prop_assert_eq!((&f / &g).evaluate(t), f.evaluate(t) / divisor);
        }

        #[test]
        fn pow_is_pointwise(t in 0.0f64..5.0f64, n in -3.0f64..3.0f64) {
            let f = exp();
            prop_assert_eq!(f.clone().pow(n).evaluate(t), f.evaluate(t).powf(n));
            prop_assert_eq!((&f).pow(&cos()).evaluate(t), f.evaluate(t).powf(cos().evaluate(t)));
        }

        #[test]
        fn add_and_mul_commute_with_scalars(t in argument(), c in scalar()) {
            let f = sin();
            prop_assert_eq!((&f + c).evaluate(t), (c + &f).evaluate(t));
            prop_assert_eq!((&f * c).evaluate(t), (c * &f).evaluate(t));
        }

        #[test]
        fn add_and_mul_commute_with_functions(t in argument()) {
            let (f, g) = pair();
            prop_assert_eq!((&f + &g).evaluate(t), (&g + &f).evaluate(t));
            prop_assert_eq!((&f * &g).evaluate(t), (&g * &f).evaluate(t));
        }

        #[test]
        fn reflected_sub_and_div(t in argument(), c in scalar()) {
            let f = cos();
            prop_assert!(close((c - &f).evaluate(t), c - f.evaluate(t)));
            let value = f.evaluate(t);
            prop_assume!(value != 0.0);
            prop_assert!(close((c / &f).evaluate(t), c / value));
        }

        #[test]
        fn reflected_pow(t in -3.0f64..3.0f64, c in 0.1f64..10.0f64) {
            let f = identity();
            prop_assert!(close(c.pow(&f).evaluate(t), c.powf(t)));
        }

        #[test]
        fn unary_plus_is_identity(t in argument()) {
            let f = sin();
            prop_assert_eq!(f.pos().evaluate(t), f.evaluate(t));
        }

        #[test]
        fn negation_and_abs(t in argument()) {
            let f = sin();
            prop_assert_eq!((-&f).evaluate(t), -f.evaluate(t));
            prop_assert_eq!(f.abs().evaluate(t), f.evaluate(t).abs());
        }
    }
}

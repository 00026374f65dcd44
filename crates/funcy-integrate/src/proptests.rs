//! Property-based tests for adaptive integration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{adaptive_simpson, IntegrationOptions, Integrate};
    use funcy_core::{identity, sin};

    fn coefficient() -> impl Strategy<Value = f64> {
        -10.0f64..10.0f64
    }

    fn bound() -> impl Strategy<Value = f64> {
        -5.0f64..5.0f64
    }

    proptest! {
        #[test]
        fn cubic_integrals_are_exact(
            c0 in coefficient(), c1 in coefficient(), c2 in coefficient(), c3 in coefficient(),
            a in bound(), b in bound(),
        ) {
            let f = move |x: f64| c0 + c1 * x + c2 * x * x + c3 * x * x * x;
            let antiderivative = |x: f64| {
                c0 * x + c1 * x * x / 2.0 + c2 * x.powi(3) / 3.0 + c3 * x.powi(4) / 4.0
            };
            let result = adaptive_simpson(&f, a, b, &IntegrationOptions::with_tolerance(1e-10));
            let expected = antiderivative(b) - antiderivative(a);
            prop_assert!(result.converged());
            prop_assert!((result.value - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
        }

        #[test]
        fn reversing_bounds_negates(a in bound(), b in bound()) {
            let f = sin() * identity();
            let forward = f.integrate_with_tolerance(a, b, 1e-9);
            let backward = f.integrate_with_tolerance(b, a, 1e-9);
            prop_assert!((forward + backward).abs() <= 1e-7);
        }

        #[test]
        fn integrals_are_additive(a in bound(), m in bound(), b in bound()) {
            let f = sin() * identity();
            let whole = f.integrate_with_tolerance(a, b, 1e-10);
            let split = f.integrate_with_tolerance(a, m, 1e-10) + f.integrate_with_tolerance(m, b, 1e-10);
            prop_assert!((whole - split).abs() <= 1e-6);
        }
    }
}

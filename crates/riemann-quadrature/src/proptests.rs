//! Property-based tests for the quadrature rules.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::api::compute_quadrature;
    use crate::rule::QuadratureRule;
    use crate::rules::{even_subdivisions, left_sum, midpoint_sum, right_sum, simpson, trapezoidal};
    use crate::validate::MAX_SUBDIVISIONS;

    // Cubic polynomial c0 + c1 x + c2 x² + c3 x³
    fn cubic() -> impl Strategy<Value = [f64; 4]> {
        prop::array::uniform4(-5.0f64..5.0)
    }

    fn eval(c: &[f64; 4], x: f64) -> f64 {
        c[0] + x * (c[1] + x * (c[2] + x * c[3]))
    }

    fn antiderivative(c: &[f64; 4], x: f64) -> f64 {
        x * (c[0] + x * (c[1] / 2.0 + x * (c[2] / 3.0 + x * c[3] / 4.0)))
    }

    // Non-degenerate interval in either orientation
    fn interval() -> impl Strategy<Value = (f64, f64)> {
        (-10.0f64..10.0, 0.01f64..10.0, any::<bool>())
            .prop_map(|(a, width, flip)| if flip { (a + width, a) } else { (a, a + width) })
    }

    fn summing_rule() -> impl Strategy<Value = QuadratureRule> {
        prop_oneof![
            Just(QuadratureRule::Left),
            Just(QuadratureRule::Right),
            Just(QuadratureRule::Midpoint),
            Just(QuadratureRule::Trapezoidal),
        ]
    }

    fn any_rule() -> impl Strategy<Value = QuadratureRule> {
        prop::sample::select(QuadratureRule::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn areas_sum_to_approximation(
            c in cubic(),
            (a, b) in interval(),
            n in 1usize..=200,
            rule in summing_rule(),
        ) {
            let result = compute_quadrature(&|x| eval(&c, x), a, b, n, rule);
            let scale = 1.0 + result.areas.iter().map(|area| area.abs()).sum::<f64>();
            prop_assert!((result.area_sum() - result.approximation).abs() <= 1e-9 * scale);
        }

        #[test]
        fn one_sample_per_subinterval(
            c in cubic(),
            (a, b) in interval(),
            n in 0usize..400,
            rule in any_rule(),
        ) {
            let result = compute_quadrature(&|x| eval(&c, x), a, b, n, rule);
            prop_assert_eq!(result.areas.len(), result.n);
            prop_assert_eq!(result.sample_points.len(), result.n);
            prop_assert_eq!(result.sample_points.iter().filter(|s| s.right_y.is_some()).count(),
                if rule == QuadratureRule::Trapezoidal { result.n } else { 0 });
        }

        #[test]
        fn subdivision_count_is_clamped(n in any::<usize>(), rule in any_rule()) {
            let result = compute_quadrature(&|x| x, 0.0, 1.0, n, rule);
            let clamped = n.clamp(1, MAX_SUBDIVISIONS);
            if rule == QuadratureRule::Simpson {
                prop_assert_eq!(result.n, even_subdivisions(clamped));
            } else {
                prop_assert_eq!(result.n, clamped);
            }
        }

        #[test]
        fn rules_called_directly_clamp_n(n in 0usize..10_000) {
            let f = |x: f64| x * x;
            let clamped = n.clamp(1, MAX_SUBDIVISIONS);
            for result in [
                left_sum(&f, 0.0, 1.0, n),
                right_sum(&f, 0.0, 1.0, n),
                midpoint_sum(&f, 0.0, 1.0, n),
                trapezoidal(&f, 0.0, 1.0, n),
            ] {
                prop_assert_eq!(result.n, clamped);
                prop_assert!(result.delta_x.is_finite());
                prop_assert!(result.is_finite());
            }
            let result = simpson(&f, 0.0, 1.0, n);
            prop_assert_eq!(result.n, even_subdivisions(clamped));
            prop_assert!((result.approximation - 1.0 / 3.0).abs() < 1e-12);
        }

        #[test]
        fn monotone_bracketing(
            slope in 0.1f64..5.0,
            curvature in 0.0f64..2.0,
            a in -5.0f64..5.0,
            width in 0.1f64..5.0,
            n in 1usize..=200,
        ) {
            // f(x) = slope·x + curvature·eˣ is strictly increasing
            let f = |x: f64| slope * x + curvature * x.exp();
            let big_f = |x: f64| 0.5 * slope * x * x + curvature * x.exp();
            let b = a + width;
            let exact = big_f(b) - big_f(a);
            let left = compute_quadrature(&f, a, b, n, QuadratureRule::Left).approximation;
            let right = compute_quadrature(&f, a, b, n, QuadratureRule::Right).approximation;
            let tol = 1e-9 * (1.0 + exact.abs());
            prop_assert!(left <= exact + tol, "left {} > exact {}", left, exact);
            prop_assert!(exact <= right + tol, "exact {} > right {}", exact, right);
        }

        #[test]
        fn trapezoid_exact_for_affine(
            slope in -10.0f64..10.0,
            intercept in -10.0f64..10.0,
            (a, b) in interval(),
            n in 1usize..=200,
        ) {
            let f = |x: f64| slope * x + intercept;
            let exact = (0.5 * slope * b * b + intercept * b) - (0.5 * slope * a * a + intercept * a);
            let result = compute_quadrature(&f, a, b, n, QuadratureRule::Trapezoidal);
            let scale = 1.0 + (slope.abs() * a.abs().max(b.abs()) + intercept.abs()) * (b - a).abs();
            prop_assert!((result.approximation - exact).abs() <= 1e-9 * scale);
        }

        #[test]
        fn simpson_exact_for_cubics(c in cubic(), (a, b) in interval(), n in 1usize..=200) {
            let exact = antiderivative(&c, b) - antiderivative(&c, a);
            let result = compute_quadrature(&|x| eval(&c, x), a, b, n, QuadratureRule::Simpson);
            let scale = 1.0 + (0..=8)
                .map(|k| eval(&c, a + (b - a) * k as f64 / 8.0).abs())
                .fold(0.0, f64::max) * (b - a).abs();
            prop_assert!((result.approximation - exact).abs() <= 1e-9 * scale);
        }

        #[test]
        fn symmetric_rules_negate_on_reversal(
            c in cubic(),
            (a, b) in interval(),
            n in 1usize..=200,
            rule in prop_oneof![
                Just(QuadratureRule::Midpoint),
                Just(QuadratureRule::Trapezoidal),
                Just(QuadratureRule::Simpson),
            ],
        ) {
            let f = |x| eval(&c, x);
            let forward = compute_quadrature(&f, a, b, n, rule);
            let backward = compute_quadrature(&f, b, a, n, rule);
            let scale = 1.0 + forward.areas.iter().map(|area| area.abs()).sum::<f64>();
            prop_assert_eq!(forward.n, backward.n);
            prop_assert!((forward.approximation + backward.approximation).abs() <= 1e-9 * scale);
        }

        #[test]
        fn degenerate_interval_is_zero(a in -100.0f64..100.0, n in 0usize..300, rule in any_rule()) {
            let result = compute_quadrature(&|x| x * x, a, a, n, rule);
            prop_assert_eq!(result.approximation, 0.0);
            prop_assert!(result.areas.is_empty());
            prop_assert!(result.sample_points.is_empty());
            prop_assert_eq!(result.delta_x, 0.0);
        }
    }
}

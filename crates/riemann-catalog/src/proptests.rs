//! Property-based checks of the antiderivative contract.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::catalog::presets;
    use crate::preset::FunctionPreset;

    const STEP: f64 = 1e-5;

    // Points strictly inside the view domain, away from its edges
    fn interior_point(preset: &FunctionPreset) -> impl Strategy<Value = f64> {
        let lo = preset.view_domain.a.min(preset.view_domain.b) + 0.05;
        let hi = preset.view_domain.a.max(preset.view_domain.b) - 0.05;
        lo..hi
    }

    fn preset_and_point() -> impl Strategy<Value = (&'static FunctionPreset, f64)> {
        (0..presets().len()).prop_flat_map(|idx| {
            let preset = &presets()[idx];
            (Just(preset), interior_point(preset))
        })
    }

    proptest! {
        #[test]
        fn antiderivative_differentiates_to_function((preset, x) in preset_and_point()) {
            let slope = (preset.antiderivative_at(x + STEP) - preset.antiderivative_at(x - STEP))
                / (2.0 * STEP);
            let value = preset.evaluate(x);
            prop_assert!(
                (slope - value).abs() < 1e-5 * (1.0 + value.abs()),
                "{}: F'({}) = {} but f({}) = {}", preset.id, x, slope, x, value
            );
        }

        #[test]
        fn exact_integral_is_antisymmetric((preset, a) in preset_and_point(), t in 0.0f64..1.0) {
            let lo = preset.view_domain.a.min(preset.view_domain.b) + 0.05;
            let hi = preset.view_domain.a.max(preset.view_domain.b) - 0.05;
            let b = lo + t * (hi - lo);
            prop_assert_eq!(preset.exact_integral(a, b), -preset.exact_integral(b, a));
        }

        #[test]
        fn exact_integral_is_additive((preset, a) in preset_and_point(), t in 0.0f64..1.0) {
            let lo = preset.view_domain.a.min(preset.view_domain.b) + 0.05;
            let hi = preset.view_domain.a.max(preset.view_domain.b) - 0.05;
            let b = lo + t * (hi - lo);
            let mid = 0.5 * (a + b);
            let whole = preset.exact_integral(a, b);
            let split = preset.exact_integral(a, mid) + preset.exact_integral(mid, b);
            prop_assert!((whole - split).abs() < 1e-9 * (1.0 + whole.abs()));
        }
    }
}

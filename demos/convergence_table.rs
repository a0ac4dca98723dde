//! Riemann Sum Examples
//!
//! Prints error tables for every catalog preset and rule, then shows how the
//! error of each rule shrinks as the subdivision count doubles.
//!
//! Run with: cargo run --example convergence_table

use riemann::catalog::presets;
use riemann::prelude::*;
use riemann::quadrature::observed_order;

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║             Riemann - Quadrature Error Tables                    ║");
    println!("╚══════════════════════════════════════════════════════════════════╝\n");

    rule_comparison();
    convergence_orders();
    simpson_adjustment();

    println!("\n✓ All examples completed successfully!");
}

fn rule_comparison() {
    println!("── Rule comparison at n = 10 (default bounds) ──\n");
    let dispatcher = QuadratureDispatcher::new();

    for preset in presets() {
        let bounds = preset.default_bounds;
        let exact = |a: f64, b: f64| preset.exact_integral(a, b);
        println!("{preset} on {bounds}");
        for row in dispatcher.compare_rules(&preset.function, bounds.a, bounds.b, 10, Some(&exact)) {
            println!(
                "  {:<12} ≈ {:>14.10}   abs err {:>10.3e}   rel err {:>10.3e}",
                row.method.name(),
                row.approximation,
                row.absolute_error.unwrap_or(f64::NAN),
                row.relative_error.unwrap_or(f64::NAN),
            );
        }
        println!();
    }
}

fn convergence_orders() {
    println!("── Observed convergence order on e^x over [0, 1] ──\n");
    let dispatcher = QuadratureDispatcher::new();
    let Some(preset) = riemann::lookup_preset("exponential") else {
        return;
    };
    let exact = |a: f64, b: f64| preset.exact_integral(a, b);
    let counts = [4, 8, 16, 32, 64, 128];

    for rule in QuadratureRule::ALL {
        let sweep = dispatcher.convergence_sweep(&preset.function, 0.0, 1.0, rule, &counts, Some(&exact));
        let orders: Vec<String> = sweep
            .windows(2)
            .map(|pair| match observed_order(&pair[0], &pair[1]) {
                Some(order) => format!("{order:.2}"),
                None => "-".to_string(),
            })
            .collect();
        println!(
            "  {:<12} expected {}   observed [{}]",
            rule.name(),
            rule.convergence_order(),
            orders.join(", ")
        );
    }
    println!();
}

fn simpson_adjustment() {
    println!("── Simpson raises odd subdivision counts ──\n");
    for requested in [1, 5, 199] {
        let result = riemann::compute_quadrature(&|x| x * x, 0.0, 1.0, requested, QuadratureRule::Simpson);
        println!("  requested n = {requested:>3}, used n = {:>3}", result.n);
    }
}

use heft_num::{integrate, integrate_default, QuadratureOpts};

#[test]
fn polynomials_are_exact() {
    // K15 integrates low-order polynomials exactly up to roundoff
    let result = integrate(|x| x * x, 0.0, 1.0, &QuadratureOpts::default());
    assert!((result.value - 1.0 / 3.0).abs() < 1e-14);
    assert_eq!(result.intervals, 1);

    let result = integrate(|x| 3.0 * x * x - 2.0 * x + 0.5, -2.0, 5.0, &QuadratureOpts::default());
    let exact = (125.0 + 8.0) - (25.0 - 4.0) + 0.5 * 7.0;
    assert!((result.value - exact).abs() < 1e-11 * exact.abs());
}

#[test]
fn transcendental_integrands() {
    assert!((integrate_default(f64::sin, 0.0, std::f64::consts::PI) - 2.0).abs() < 1e-10);

    let pi = integrate_default(|x| 4.0 / (1.0 + x * x), 0.0, 1.0);
    assert!((pi - std::f64::consts::PI).abs() < 1e-10);

    let e = integrate_default(f64::exp, 0.0, 1.0) + 1.0;
    assert!((e - std::f64::consts::E).abs() < 1e-10);
}

#[test]
fn oscillatory_integrand_converges() {
    let opts = QuadratureOpts::with_rel_tol(1e-10);
    let result = integrate(|x| (50.0 * x).sin(), 0.0, 1.0, &opts);
    let exact = (1.0 - (50.0f64).cos()) / 50.0;
    assert!((result.value - exact).abs() < 1e-9);
    assert!(result.intervals > 1, "adaptive refinement expected");
}

#[test]
fn empty_and_reversed_intervals() {
    let result = integrate(|x| x, 2.0, 2.0, &QuadratureOpts::default());
    assert_eq!(result.value, 0.0);

    // reversed bounds flip the sign
    let forward = integrate_default(|x| x * x * x + 1.0, 0.0, 2.0);
    let backward = integrate_default(|x| x * x * x + 1.0, 2.0, 0.0);
    assert!((forward + backward).abs() < 1e-12);
}

#[test]
fn integrable_endpoint_singularity() {
    // ∫_0^1 dx / sqrt(x) = 2, handled by bisection away from the endpoint
    let opts = QuadratureOpts {
        rel_tol: 1e-9,
        abs_tol: 1e-12,
        max_depth: 40,
    };
    let result = integrate(|x| 1.0 / x.sqrt(), 1e-12, 1.0, &opts);
    assert!((result.value - (2.0 - 2e-6)).abs() < 1e-5);
}

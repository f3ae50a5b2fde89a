use num_complex::Complex64;
use std::f64::consts::PI;

use heft_num::{cdilog, dilog};

const CATALAN: f64 = 0.915_965_594_177_219;

#[test]
fn real_reference_values() {
    assert!((dilog(1.0) - PI * PI / 6.0).abs() < 1e-14);
    assert!((dilog(-1.0) + PI * PI / 12.0).abs() < 1e-14);
    assert_eq!(dilog(0.0), 0.0);

    let li2_half = PI * PI / 12.0 - 0.5 * (2.0f64).ln().powi(2);
    assert!((dilog(0.5) - li2_half).abs() < 1e-14);

    // on the cut: Re Li2(2) = π²/4
    assert!((dilog(2.0) - PI * PI / 4.0).abs() < 1e-13);
}

#[test]
fn complex_reference_values() {
    let li2_i = cdilog(Complex64::new(0.0, 1.0));
    assert!((li2_i.re + PI * PI / 48.0).abs() < 1e-13);
    assert!((li2_i.im - CATALAN).abs() < 1e-13);

    // +i0 prescription above the cut
    let on_cut = cdilog(Complex64::new(2.0, 0.0));
    assert!((on_cut.re - PI * PI / 4.0).abs() < 1e-13);
    assert!((on_cut.im - PI * (2.0f64).ln()).abs() < 1e-13);
}

#[test]
fn reflection_identity_holds() {
    // Li2(z) + Li2(1-z) = π²/6 - ln(z) ln(1-z)
    for &z in &[
        Complex64::new(0.3, 0.4),
        Complex64::new(-0.7, 0.2),
        Complex64::new(0.9, -0.1),
        Complex64::new(0.05, 0.0),
    ] {
        let one_minus = Complex64::new(1.0, 0.0) - z;
        let lhs = cdilog(z) + cdilog(one_minus);
        let rhs = Complex64::new(PI * PI / 6.0, 0.0) - z.ln() * one_minus.ln();
        assert!(
            (lhs - rhs).norm() < 1e-12,
            "reflection identity violated at z = {z}"
        );
    }
}

#[test]
fn inversion_identity_holds() {
    // Li2(z) + Li2(1/z) = -π²/6 - ln²(-z)/2
    for &z in &[Complex64::new(1.7, 0.9), Complex64::new(-2.5, 0.3), Complex64::new(0.2, -3.0)] {
        let lhs = cdilog(z) + cdilog(1.0 / z);
        let log_mz = (-z).ln();
        let rhs = Complex64::new(-PI * PI / 6.0, 0.0) - 0.5 * log_mz * log_mz;
        assert!((lhs - rhs).norm() < 1e-12, "inversion identity violated at z = {z}");
    }
}

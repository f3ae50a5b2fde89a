//! Dilogarithm for real and complex arguments.
//!
//! Li2(z) = -∫_0^z ln(1 - t)/t dt with the branch cut along [1, ∞). On the
//! cut the +i0 prescription applies, so Im Li2(x + i0) = +π ln(x) for x > 1.
//! The evaluation uses the Bernoulli series in w = -ln(1 - z) after the
//! standard inversion and reflection reductions, following the hand-rolled
//! special-function approach used elsewhere in this workspace.

use std::f64::consts::PI;

use num_complex::Complex64;

const PI2_6: f64 = PI * PI / 6.0;

// B_{2k} / (2k + 1)! for k = 1..10
const BERNOULLI_OVER_FACTORIAL: [f64; 10] = [
    2.777_777_777_777_777_8e-2,
    -2.777_777_777_777_777_8e-4,
    4.724_111_866_452_902e-6,
    -9.185_773_074_661_963e-8,
    1.897_886_998_897_100e-9,
    -4.064_761_645_144_226e-11,
    8.921_691_020_456_452e-13,
    -1.993_929_586_072_108e-14,
    4.518_980_029_619_918e-16,
    -1.035_651_309_518_205e-17,
];

fn dilog_series(z: Complex64) -> Complex64 {
    // valid after reduction to |z| <= 1, Re(z) <= 1/2
    let w = -(Complex64::new(1.0, 0.0) - z).ln();
    let mut sum = w - w * w / 4.0;
    let w2 = w * w;
    let mut power = w;
    for coefficient in BERNOULLI_OVER_FACTORIAL {
        power *= w2;
        let term = power * coefficient;
        sum += term;
        if term.norm_sqr() < 1e-36 * sum.norm_sqr() {
            break;
        }
    }
    sum
}

/// Complex dilogarithm Li2(z) on the principal branch.
pub fn cdilog(z: Complex64) -> Complex64 {
    if z == Complex64::new(0.0, 0.0) {
        return Complex64::new(0.0, 0.0);
    }
    if z == Complex64::new(1.0, 0.0) {
        return Complex64::new(PI2_6, 0.0);
    }
    if z.norm_sqr() > 1.0 {
        // inversion: Li2(z) = -Li2(1/z) - π²/6 - ln²(-z)/2
        let inv = cdilog(1.0 / z);
        let log_mz = (-z).ln();
        return -inv - PI2_6 - 0.5 * log_mz * log_mz;
    }
    if z.re > 0.5 {
        // reflection: Li2(z) = π²/6 - ln(z) ln(1-z) - Li2(1-z)
        let one_minus = Complex64::new(1.0, 0.0) - z;
        return PI2_6 - z.ln() * one_minus.ln() - cdilog(one_minus);
    }
    dilog_series(z)
}

/// Real dilogarithm Li2(x).
///
/// Real for x < 1; for x > 1 this is the real part of the +i0 boundary
/// value (the imaginary part, π ln x, is available through [`cdilog`]).
pub fn dilog(x: f64) -> f64 {
    if x > 1.0 {
        // on the cut: Re Li2(x ± i0) = π²/3 - ln²(x)/2 - Li2(1/x)
        return PI * PI / 3.0 - 0.5 * x.ln() * x.ln() - dilog(1.0 / x);
    }
    cdilog(Complex64::new(x, 0.0)).re
}

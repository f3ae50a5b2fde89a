//! Conformal map of the cut q^2 plane onto the unit disk.

use num_complex::Complex64;

/// Conformal variable z(q^2; t_+, t_0) for complex q^2.
///
/// The principal square root resolves the branch structure: on the real axis
/// below the branch point both roots are positive and z is real in (-1, +1);
/// for Re(q^2) > t_+ approached with Im(q^2) < 0 (and in the limit of real
/// q^2 on the cut) the map lands on the unit circle with Im(z) > 0.
pub fn z_of(q2: Complex64, t_plus: f64, t_0: f64) -> Complex64 {
    let sq = (Complex64::new(t_plus, 0.0) - q2).sqrt();
    let s0 = Complex64::new((t_plus - t_0).sqrt(), 0.0);
    (sq - s0) / (sq + s0)
}

/// Conformal variable for real q^2 below the branch point.
///
/// Returns NaN when q^2 lies on or above the cut; callers integrate only
/// over physical intervals.
pub fn z_real(q2: f64, t_plus: f64, t_0: f64) -> f64 {
    if q2 >= t_plus {
        return f64::NAN;
    }
    let sq = (t_plus - q2).sqrt();
    let s0 = (t_plus - t_0).sqrt();
    (sq - s0) / (sq + s0)
}

use num_complex::Complex64;
use proptest::prelude::*;

use heft_num::{z_of, z_real};

#[test]
fn subtraction_point_maps_to_origin() {
    let z = z_of(Complex64::new(9.0, 0.0), 13.9105, 9.0);
    assert!(z.norm() < 1e-15);
    assert_eq!(z_real(9.0, 13.9105, 9.0), 0.0);
}

#[test]
fn real_axis_agrees_with_complex_branch() {
    let (t_plus, t_0) = (13.9105, 9.0);
    for q2 in [-5.0, 0.0, 4.2, 9.0, 12.5] {
        let zc = z_of(Complex64::new(q2, 0.0), t_plus, t_0);
        let zr = z_real(q2, t_plus, t_0);
        assert!((zc.re - zr).abs() < 1e-14);
        assert!(zc.im.abs() < 1e-14);
    }
}

#[test]
fn charm_threshold_scenario() {
    // t_+ = 4 m_D^2 with m_D = 1.86484, t_0 = 9.0, evaluated at q^2 = 16
    let m_d: f64 = 1.86484;
    let z = z_of(Complex64::new(16.0, 0.0), 4.0 * m_d * m_d, 9.0);
    assert!((z.re - (-0.403)).abs() < 1e-3);
    assert!((z.im - 0.915).abs() < 1e-3);
    assert!((z.re - (-0.403003)).abs() < 1e-4);
    assert!((z.im - 0.915199).abs() < 1e-4);
    // above the cut the map lands on the unit circle
    assert!((z.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn branch_choice_above_threshold() {
    // approaching the cut from Im(q2) < 0 keeps Im(z) > 0
    let z = z_of(Complex64::new(16.0, -1e-8), 13.9105, 9.0);
    assert!(z.im > 0.0);
}

proptest! {
    #[test]
    fn maps_inside_unit_disk_below_threshold(q2 in -25.0f64..13.0, t_0 in 0.0f64..12.0) {
        let t_plus = 13.9105;
        prop_assume!(q2 < t_plus - 1e-6);
        let z = z_real(q2, t_plus, t_0);
        prop_assert!(z.abs() < 1.0);
        prop_assert!(z.is_finite());
    }

    #[test]
    fn complex_plane_maps_into_closed_disk(re in -30.0f64..30.0, im in -30.0f64..30.0) {
        let z = z_of(Complex64::new(re, im), 13.9105, 9.0);
        prop_assert!(z.norm() <= 1.0 + 1e-12);
    }
}

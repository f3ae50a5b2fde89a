use heft_core::{Options, Parameters};
use heft_ff::{FormFactorFactory, VacuumToPPFormFactors};

#[test]
fn unit_normalization_at_the_photon_point() {
    let parameters = Parameters::defaults();
    let options = Options::new();
    for name in ["pi->pi::EGJvD2020", "pi->pi::KKRvD2024"] {
        let ff = FormFactorFactory::vacuum_to_pp(name, &parameters, &options).unwrap();
        let at_zero = ff.f_p(0.0);
        assert!((at_zero.re - 1.0).abs() < 1e-12, "{name}: F(0) = {at_zero}");
        assert!(at_zero.im.abs() < 1e-12);
    }
}

#[test]
fn real_below_threshold_complex_above() {
    let parameters = Parameters::defaults();
    let options = Options::new();
    let ff = FormFactorFactory::vacuum_to_pp("pi->pi::KKRvD2024", &parameters, &options).unwrap();

    // below the two-pion threshold the form factor is real
    let below = ff.f_p(0.05);
    assert!(below.im.abs() < 1e-10, "Im F = {}", below.im);

    // in the timelike resonance region it develops a phase
    let above = ff.f_p(0.5);
    assert!(above.im.abs() > 1e-6, "expected a phase above threshold");
}

#[test]
fn rho_poles_drive_the_resonant_phase_motion() {
    let parameters = Parameters::defaults();
    let options = Options::new();
    let plain = FormFactorFactory::vacuum_to_pp("pi->pi::EGJvD2020", &parameters, &options).unwrap();
    let refined =
        FormFactorFactory::vacuum_to_pp("pi->pi::KKRvD2024", &parameters, &options).unwrap();

    // a Blaschke factor is unimodular on the cut: the resonance shows up as
    // rapid phase motion across the peak, not as a modulus change
    let m2 = 0.7736f64.powi(2);
    let below_peak = refined.f_p(m2 - 0.08).arg();
    let above_peak = refined.f_p(m2 + 0.08).arg();
    let sweep = (above_peak - below_peak).abs();
    let plain_sweep = (plain.f_p(m2 + 0.08).arg() - plain.f_p(m2 - 0.08).arg()).abs();
    assert!(sweep > plain_sweep + 0.3, "refined sweep {sweep}, plain {plain_sweep}");

    // away from the circle the two variants genuinely differ
    let spacelike = (refined.f_p(-1.0) - plain.f_p(-1.0)).norm();
    assert!(spacelike > 1e-3);
}

#[test]
fn spacelike_form_factor_falls_off() {
    let parameters = Parameters::defaults();
    let options = Options::new();
    let ff = FormFactorFactory::vacuum_to_pp("pi->pi::KKRvD2024", &parameters, &options).unwrap();
    let at_zero = ff.f_p(0.0).norm();
    assert!(ff.f_p(-0.5).norm() < at_zero);
    assert!(ff.f_p(-3.0).norm() < 0.85 * at_zero);
}

use heft_core::{HeftError, Options, Parameters};
use heft_ff::hqet::{HqetBToD, HqetBToDstar};
use heft_ff::{PToPFormFactors, PToVFormFactors};

fn canonical_options() -> Options {
    Options::from_pairs([("z-order-lp", "3"), ("z-order-slp", "1")])
}

#[test]
fn b_to_dstar_kinematic_values_at_zero_recoil() {
    let parameters = Parameters::defaults();
    let ff = HqetBToDstar::new(&parameters, &canonical_options()).unwrap();

    // canonical IW parameters: xi'(1) = -1.5, xi''(1) = +3.0, chi_2(1) = 0.5,
    // eta(1) = 0.25, a = 1
    let h_a1 = ff.h_a1(1.0);
    let h_v = ff.h_v(1.0);
    assert!((h_a1 - 0.901299).abs() < 5e-4, "h_A1(1) = {h_a1}");
    assert!((h_v - 1.216434).abs() < 5e-4, "h_V(1) = {h_v}");

    // zero recoil sits at q2_max = (m_B - m_D*)^2
    let q2_max = (5.27958f64 - 2.01026).powi(2);
    assert!((ff.w_of(q2_max) - 1.0).abs() < 1e-12);
}

#[test]
fn matching_coefficients_are_continuous_across_the_regular_window() {
    let parameters = Parameters::defaults();
    let ff = HqetBToDstar::new(&parameters, &canonical_options()).unwrap();

    // the regular expansion takes over below |w - 1| = 1e-5
    let inside = ff.h_a1(1.0 + 0.99e-5);
    let outside = ff.h_a1(1.0 + 1.01e-5);
    assert!((inside - outside).abs() < 5e-6, "{inside} vs {outside}");

    let inside = ff.h_v(1.0 + 0.99e-5);
    let outside = ff.h_v(1.0 + 1.01e-5);
    assert!((inside - outside).abs() < 5e-6);
}

#[test]
fn isgur_wise_slope_drives_the_w_dependence() {
    let parameters = Parameters::defaults();
    let ff = HqetBToDstar::new(&parameters, &canonical_options()).unwrap();

    // xi'(1) < 0: form factors fall away from zero recoil
    let h_at_1 = ff.h_a1(1.0);
    let h_at_12 = ff.h_a1(1.2);
    let h_at_14 = ff.h_a1(1.4);
    assert!(h_at_1 > h_at_12 && h_at_12 > h_at_14);

    // flattening the slope flattens the form factor
    parameters.set("B(*)->D(*)::xi'(1)@HQET", 0.0).unwrap();
    parameters.set("B(*)->D(*)::xi''(1)@HQET", 0.0).unwrap();
    let flat_ratio = ff.h_a1(1.3) / ff.h_a1(1.0);
    assert!(flat_ratio > 0.95, "flat Isgur-Wise function, ratio = {flat_ratio}");
}

#[test]
fn truncation_orders_are_validated_and_matter() {
    let parameters = Parameters::defaults();

    let low = HqetBToDstar::new(&parameters, &Options::from_pairs([("z-order-lp", "1")])).unwrap();
    let high = HqetBToDstar::new(&parameters, &Options::from_pairs([("z-order-lp", "4")])).unwrap();
    // identical at zero recoil, different away from it
    assert!((low.h_a1(1.0) - high.h_a1(1.0)).abs() < 1e-12);
    assert!((low.h_a1(1.35) - high.h_a1(1.35)).abs() > 1e-4);

    match HqetBToDstar::new(&parameters, &Options::from_pairs([("z-order-lp", "9")])) {
        Err(HeftError::Options(info)) => assert!(info.message.contains("z-order-lp")),
        other => panic!("expected an options error, got {other:?}"),
    }
}

#[test]
fn b_to_d_form_factors_coincide_at_q2_zero() {
    let parameters = Parameters::defaults();
    let ff = HqetBToD::new(&parameters, &canonical_options()).unwrap();
    let f_p = ff.f_p(0.0);
    let f_0 = ff.f_0(0.0);
    assert!((f_p - f_0).abs() < 1e-12, "f_+(0) = {f_p}, f_0(0) = {f_0}");
    assert!(f_p > 0.3 && f_p < 1.2);

    // the vector form factor grows towards zero recoil
    let q2_max = (5.27958f64 - 1.86965).powi(2);
    assert!(ff.f_p(q2_max) > ff.f_p(0.0));
}

#[test]
fn b_to_dstar_full_basis_is_consistent() {
    let parameters = Parameters::defaults();
    let ff = HqetBToDstar::new(&parameters, &canonical_options()).unwrap();

    for q2 in [0.5, 3.0, 6.0, 9.0] {
        assert!(ff.v(q2) > 0.0);
        assert!(ff.a_1(q2) > 0.0);
        assert!(ff.a_0(q2).is_finite());
        assert!(ff.a_12(q2).is_finite());
        assert!(ff.t_1(q2) > 0.0);
        assert_eq!(ff.t_3(q2), 0.0);
    }
    assert!((ff.t_1(0.0) - ff.t_2(0.0)).abs() < 1e-12, "T_1(0) = T_2(0)");
}

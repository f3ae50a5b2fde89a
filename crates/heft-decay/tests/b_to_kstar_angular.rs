use heft_core::{Options, Parameters};
use heft_decay::{r_kstar, BToKstarDilepton};

fn muon_options() -> Options {
    Options::from_pairs([("l", "mu"), ("form-factors", "BSZ2015"), ("model", "SM")])
}

#[test]
fn rate_and_polarization_are_physical() {
    let parameters = Parameters::defaults();
    let decay = BToKstarDilepton::new(&parameters, &muon_options()).unwrap();

    for (q2_min, q2_max) in [(1.1, 6.0), (15.0, 19.0)] {
        let br = decay.integrated_branching_ratio(q2_min, q2_max);
        assert!(
            br > 1e-8 && br < 1e-6,
            "BR[{q2_min}, {q2_max}] = {br:e}"
        );

        let f_l = decay.integrated_f_l(q2_min, q2_max);
        assert!(f_l > 0.0 && f_l < 1.0, "F_L = {f_l}");
    }

    // the low-q2 region is longitudinally dominated in the SM
    let f_l_low = decay.integrated_f_l(2.0, 6.0);
    assert!(f_l_low > 0.4, "F_L[2, 6] = {f_l_low}");
}

#[test]
fn forward_backward_asymmetry_has_a_zero_crossing() {
    let parameters = Parameters::defaults();
    let decay = BToKstarDilepton::new(&parameters, &muon_options()).unwrap();

    let crossing = decay.a_fb_zero_crossing();
    assert!(crossing.is_some(), "SM A_FB must cross zero");
    let q2_0 = crossing.unwrap();
    assert!(q2_0 > 1.0 && q2_0 < 6.5, "zero crossing at {q2_0}");

    // the asymmetry has opposite signs on the two sides of the crossing
    let below = decay.integrated_forward_backward_asymmetry(1.0, q2_0 - 0.3);
    let above = decay.integrated_forward_backward_asymmetry(q2_0 + 0.3, 8.0);
    assert!(below * above < 0.0, "A_FB {below} vs {above}");
}

#[test]
fn optimized_observables_are_bounded() {
    let parameters = Parameters::defaults();
    let decay = BToKstarDilepton::new(&parameters, &muon_options()).unwrap();

    let p5 = decay.integrated_p_prime_5(4.0, 6.0);
    assert!(p5.is_finite() && p5.abs() < 1.5, "P'_5 = {p5}");

    let s5 = decay.integrated_s_5(4.0, 6.0);
    assert!(s5.abs() < 1.0, "S_5 = {s5}");
}

#[test]
fn angular_coefficients_serialize_round_trip() {
    let parameters = Parameters::defaults();
    let decay = BToKstarDilepton::new(&parameters, &muon_options()).unwrap();
    let coefficients = decay.angular_coefficients(5.0);

    let encoded = serde_json::to_string(&coefficients).unwrap();
    let decoded: heft_decay::b_to_kstar_ll::AngularJ = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.j5.to_bits(), coefficients.j5.to_bits());
    assert_eq!(decoded.decay_width().to_bits(), coefficients.decay_width().to_bits());
}

#[test]
fn r_kstar_is_close_to_one_in_the_sm() {
    let parameters = Parameters::defaults();
    let value = r_kstar(&parameters, &Options::new(), 1.1, 6.0).unwrap();
    assert!((value - 1.0).abs() < 0.1, "R_K* = {value}");
}

#[test]
fn primed_operators_move_the_angular_coefficients() {
    let parameters = Parameters::defaults();
    let options = muon_options() + Options::from_pairs([("model", "WilsonScan")]);
    let decay = BToKstarDilepton::new(&parameters, &options).unwrap();

    let nominal = decay.integrated_s_5(4.0, 6.0);
    parameters.set("b->s::Re{c9'}", 1.0).unwrap();
    let shifted = decay.integrated_s_5(4.0, 6.0);
    assert!((shifted - nominal).abs() > 1e-4, "c9' must move S_5");
}

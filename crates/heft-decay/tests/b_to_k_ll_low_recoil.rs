use heft_core::{Options, Parameters};
use heft_decay::BToKDilepton;

fn muon_options() -> Options {
    Options::from_pairs([("l", "mu"), ("form-factors", "BZ2004v2"), ("model", "SM")])
}

#[test]
fn integrated_branching_ratio_at_low_recoil() {
    let parameters = Parameters::defaults();
    let decay = BToKDilepton::new(&parameters, &muon_options()).unwrap();

    let br = decay.integrated_branching_ratio(14.18, 22.8);
    assert!(
        br > 0.9e-7 && br < 2.3e-7,
        "BR[14.18, 22.8] = {br:e}, expected around 1.5e-7"
    );

    // evaluating twice yields exactly the same value
    assert_eq!(br, decay.integrated_branching_ratio(14.18, 22.8));
}

#[test]
fn differential_rate_is_positive_and_vanishes_at_the_endpoint() {
    let parameters = Parameters::defaults();
    let decay = BToKDilepton::new(&parameters, &muon_options()).unwrap();

    for q2 in [1.0, 5.0, 10.0, 15.0, 20.0] {
        assert!(decay.differential_branching_ratio(q2) > 0.0, "dBR({q2}) > 0");
    }
    let q2_end = (5.27958f64 - 0.497614).powi(2);
    let near_end = decay.differential_branching_ratio(q2_end - 1e-6);
    assert!(near_end < decay.differential_branching_ratio(15.0) / 100.0);
}

#[test]
fn forward_backward_asymmetry_vanishes_without_scalars() {
    let parameters = Parameters::defaults();
    let decay = BToKDilepton::new(&parameters, &muon_options()).unwrap();
    let a_fb = decay.integrated_forward_backward_asymmetry(14.18, 22.8);
    assert!(a_fb.abs() < 1e-12, "A_FB = {a_fb} without scalar couplings");
}

#[test]
fn flat_term_is_small_for_muons() {
    let parameters = Parameters::defaults();
    let decay = BToKDilepton::new(&parameters, &muon_options()).unwrap();
    let f_h = decay.integrated_flat_term(14.18, 22.8);
    assert!(f_h > 0.0 && f_h < 0.2, "F_H = {f_h}");
}

#[test]
fn electron_mode_is_close_to_the_muon_mode() {
    let parameters = Parameters::defaults();
    let muons = BToKDilepton::new(&parameters, &muon_options()).unwrap();
    let electron_options = muon_options() + Options::from_pairs([("l", "e")]);
    let electrons = BToKDilepton::new(&parameters, &electron_options).unwrap();

    let r_k = muons.integrated_branching_ratio(14.18, 22.0)
        / electrons.integrated_branching_ratio(14.18, 22.0);
    assert!((r_k - 1.0).abs() < 0.05, "R_K = {r_k} in the SM");
}

#[test]
fn cp_conjugate_mode_matches_for_real_couplings() {
    let parameters = Parameters::defaults();
    let decay = BToKDilepton::new(&parameters, &muon_options()).unwrap();
    let conjugate_options = muon_options() + Options::from_pairs([("cp-conjugate", "true")]);
    let conjugate = BToKDilepton::new(&parameters, &conjugate_options).unwrap();

    // the quark loop carries a CP-even imaginary part, and the SM couplings
    // are real up to the CKM phase, which cancels in |V_tb V_ts*|
    let br = decay.integrated_branching_ratio(15.0, 20.0);
    let br_bar = conjugate.integrated_branching_ratio(15.0, 20.0);
    assert!((br - br_bar).abs() < 1e-3 * br);
}

#[test]
fn wilson_scan_moves_the_rate() {
    let parameters = Parameters::defaults();
    let options = muon_options() + Options::from_pairs([("model", "WilsonScan")]);
    let decay = BToKDilepton::new(&parameters, &options).unwrap();
    let nominal = decay.integrated_branching_ratio(15.0, 20.0);

    parameters.set("b->s::Re{c9}", 5.5).unwrap();
    let shifted = decay.integrated_branching_ratio(15.0, 20.0);
    assert!(shifted > nominal, "raising c9 raises the rate");
}

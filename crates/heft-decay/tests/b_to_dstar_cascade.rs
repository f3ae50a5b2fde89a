use heft_core::{Options, Parameters};
use heft_decay::{r_d, r_dstar, BToDPiLeptonNeutrino, BToDstarLeptonNeutrino};

fn muon_options() -> Options {
    Options::from_pairs([
        ("l", "mu"),
        ("form-factors", "HQET"),
        ("z-order-lp", "3"),
        ("z-order-slp", "1"),
    ])
}

#[test]
fn pdfs_are_normalized() {
    let parameters = Parameters::defaults();
    let cascade = BToDPiLeptonNeutrino::new(&parameters, &muon_options()).unwrap();

    assert!((cascade.integrated_pdf_d(-1.0, 1.0) - 1.0).abs() < 1e-5);
    assert!((cascade.integrated_pdf_l(-1.0, 1.0) - 1.0).abs() < 1e-5);
    assert!(
        (cascade.integrated_pdf_chi(0.0, 2.0 * std::f64::consts::PI) - 1.0).abs() < 1e-5
    );
}

#[test]
fn polarization_observables_match_expectations() {
    let parameters = Parameters::defaults();
    let cascade = BToDPiLeptonNeutrino::new(&parameters, &muon_options()).unwrap();

    let f_l = cascade.f_l();
    assert!(f_l > 0.0 && f_l < 1.0);
    assert!((f_l - 0.537).abs() < 0.09, "F_L = {f_l}, expected around 0.537");

    let polarization = cascade.lepton_polarization();
    assert!(
        (polarization - 0.983).abs() < 0.02,
        "A_lambda = {polarization}, expected around 0.983"
    );
}

#[test]
fn pdf_shapes_follow_the_polarization() {
    let parameters = Parameters::defaults();
    let cascade = BToDPiLeptonNeutrino::new(&parameters, &muon_options()).unwrap();
    let f_l = cascade.f_l();

    // at cos(theta_D) = 0 only the transverse part contributes
    assert!((cascade.pdf_d(0.0) - 0.75 * (1.0 - f_l)).abs() < 1e-12);
    // at |cos(theta_D)| = 1 only the longitudinal part contributes
    assert!((cascade.pdf_d(1.0) - 1.5 * f_l).abs() < 1e-12);
    assert!((cascade.pdf_d(-1.0) - cascade.pdf_d(1.0)).abs() < 1e-12);
}

#[test]
fn dstar_width_and_branching_ratio_are_physical() {
    let parameters = Parameters::defaults();
    let decay = BToDstarLeptonNeutrino::new(&parameters, &muon_options()).unwrap();

    let (q2_min, q2_max) = decay.q2_range();
    assert!(q2_min < 0.1 && (q2_max - 10.69).abs() < 0.1);

    for q2 in [0.5, 2.0, 5.0, 8.0, 10.0] {
        assert!(decay.differential_decay_width(q2) > 0.0);
        let longitudinal = decay.differential_longitudinal_width(q2);
        assert!(longitudinal > 0.0 && longitudinal < decay.differential_decay_width(q2));
    }

    // BR(B -> D* mu nu) is a few percent
    let br = decay.integrated_branching_ratio();
    assert!(br > 0.005 && br < 0.15, "BR = {br}");
}

#[test]
fn tau_modes_are_suppressed() {
    let parameters = Parameters::defaults();

    let r_dstar_value = r_dstar(&parameters, &Options::new()).unwrap();
    assert!(r_dstar_value > 0.15 && r_dstar_value < 0.40, "R(D*) = {r_dstar_value}");

    let r_d_value = r_d(&parameters, &Options::new()).unwrap();
    assert!(r_d_value > 0.2 && r_d_value < 0.45, "R(D) = {r_d_value}");

    // tau polarization is far from the massless limit
    let tau_options = muon_options() + Options::from_pairs([("l", "tau")]);
    let tau = BToDstarLeptonNeutrino::new(&parameters, &tau_options).unwrap();
    let polarization = tau.integrated_lepton_polarization();
    assert!(polarization < 0.6, "P_tau = {polarization}");
}

#[test]
fn right_handed_coupling_breaks_the_sm_pattern() {
    let parameters = Parameters::defaults();
    let options = muon_options() + Options::from_pairs([("model", "WilsonScan")]);
    let decay = BToDstarLeptonNeutrino::new(&parameters, &options).unwrap();
    let nominal = decay.integrated_decay_width();

    parameters.set("b->clnu::Re{cVR}", 0.2).unwrap();
    let shifted = decay.integrated_decay_width();
    assert!((shifted - nominal).abs() > 1e-3 * nominal, "cVR must move the rate");
    parameters.set("b->clnu::Re{cVR}", 0.0).unwrap();
}

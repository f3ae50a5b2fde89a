use heft_core::{Options, Parameters};
use heft_decay::{BsToPhiPsi, LambdaBToLambdaPsi};

#[test]
fn lambdab_rates_and_angular_coefficients() {
    let parameters = Parameters::defaults();
    let options = Options::from_pairs([("nonlocal-formfactors", "BRvD2021")]);
    let decay = LambdaBToLambdaPsi::new(&parameters, &options).unwrap();

    let br = decay.branching_ratio();
    assert!(br > 0.0 && br.is_finite(), "BR = {br}");

    let k = decay.k_coefficients();
    assert!(
        (2.0 * k.k1ss + k.k1cc - 1.0).abs() < 1e-12,
        "normalization 2 K1ss + K1cc = 1"
    );
    assert!(k.k1cc > 0.2 && k.k1cc < 0.8, "K1cc = {}", k.k1cc);
    assert!(k.k1ss > 0.1 && k.k1ss < 0.4, "K1ss = {}", k.k1ss);
    assert!(k.k2ss.abs() <= 1.0 && k.k2cc.abs() <= 1.0);
}

#[test]
fn lambdab_rate_scales_quadratically_with_alpha() {
    let parameters = Parameters::defaults();
    let options = Options::from_pairs([("nonlocal-formfactors", "BRvD2021")]);
    let decay = LambdaBToLambdaPsi::new(&parameters, &options).unwrap();

    let nominal = decay.branching_ratio();
    for name in [
        "Lambda_b->Lambdaccbar::Re{alpha_0^V_perp}",
        "Lambda_b->Lambdaccbar::Re{alpha_0^V_long}",
        "Lambda_b->Lambdaccbar::Re{alpha_0^A_perp}",
        "Lambda_b->Lambdaccbar::Re{alpha_0^A_long}",
    ] {
        parameters.set(name, 2.0).unwrap();
    }
    let scaled = decay.branching_ratio();
    assert!(
        (scaled / nominal - 4.0).abs() < 1e-9,
        "doubling all alphas quadruples the rate: {}",
        scaled / nominal
    );
}

#[test]
fn bs_to_phi_psi_parameterizations_differ() {
    let parameters = Parameters::defaults();
    // with only alpha_0 the two bases coincide (p_0 = 1); higher orders
    // separate them
    for amp in ["perp", "para", "long"] {
        parameters
            .set(&format!("B_s->phiccbar::Re{{alpha_1^{amp}}}"), 0.3)
            .unwrap();
    }
    let gvdv = BsToPhiPsi::new(
        &parameters,
        &Options::from_pairs([("nonlocal-formfactors", "GvDV2020")]),
    )
    .unwrap();
    let grvdv = BsToPhiPsi::new(
        &parameters,
        &Options::from_pairs([("nonlocal-formfactors", "GRvDV2021")]),
    )
    .unwrap();

    let br_gvdv = gvdv.branching_ratio();
    let br_grvdv = grvdv.branching_ratio();
    assert!(br_gvdv > 0.0 && br_grvdv > 0.0);
    // the monomial and arc bases weigh the alpha coefficients differently
    assert!(
        (br_gvdv / br_grvdv - 1.0).abs() > 1e-3,
        "bases give {br_gvdv:e} vs {br_grvdv:e}"
    );

    let f_long = gvdv.longitudinal_polarization();
    let f_perp = gvdv.perpendicular_polarization();
    assert!(f_long > 0.0 && f_long < 1.0);
    assert!(f_perp > 0.0 && f_perp < 1.0);
    assert!(f_long + f_perp < 1.0 + 1e-12);
}

#[test]
fn bs_to_psi2s_mode_is_available() {
    let parameters = Parameters::defaults();
    let decay = BsToPhiPsi::new(
        &parameters,
        &Options::from_pairs([("nonlocal-formfactors", "GvDV2020"), ("psi", "psi(2S)")]),
    )
    .unwrap();
    let br = decay.branching_ratio();
    assert!(br > 0.0 && br.is_finite());

    let invalid = BsToPhiPsi::new(
        &parameters,
        &Options::from_pairs([("psi", "psi(3770)")]),
    );
    assert!(invalid.is_err());
}

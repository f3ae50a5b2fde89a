use heft_core::{Options, Parameters};
use heft_ff::{BaryonicNonlocalFormFactors, FormFactorFactory, NonlocalFormFactors};

#[test]
fn mesonic_amplitudes_scale_linearly_with_alpha() {
    let parameters = Parameters::defaults();
    let options = Options::new();
    let h = FormFactorFactory::nonlocal("B->K^*ccbar::GvDV2020", &parameters, &options).unwrap();

    let q2 = 1.5;
    let before = h.h_perp(q2);
    assert!(before.norm() > 0.0);

    parameters.set("B->K^*ccbar::Re{alpha_0^perp}", 2.0).unwrap();
    let after = h.h_perp(q2);
    // alpha_0 doubles and alpha_1,2 vanish by default
    assert!((after - before * 2.0).norm() < 1e-12 * after.norm());
    parameters.set("B->K^*ccbar::Re{alpha_0^perp}", 1.0).unwrap();
}

#[test]
fn amplitudes_diverge_at_the_charmonium_poles() {
    let parameters = Parameters::defaults();
    let options = Options::new();
    let h = FormFactorFactory::nonlocal("B->K^*ccbar::GvDV2020", &parameters, &options).unwrap();

    let m_jpsi: f64 = 3.096900;
    let near = h.h_long(m_jpsi.powi(2) - 1e-4).norm();
    let far = h.h_long(1.0).norm();
    assert!(near > 100.0 * far, "pole enhancement: {near} vs {far}");
}

#[test]
fn residues_match_the_limit_definition() {
    let parameters = Parameters::defaults();
    let options = Options::new();
    for name in ["B->K^*ccbar::GvDV2020", "B->K^*ccbar::GRvDV2021"] {
        let h = FormFactorFactory::nonlocal(name, &parameters, &options).unwrap();
        let m2 = 3.096900f64.powi(2);
        let eps = 1e-7;
        let numeric = h.h_perp(m2 - eps) * (-eps);
        let residue = h.h_perp_residue_jpsi();
        assert!(
            (numeric - residue).norm() < 1e-3 * residue.norm(),
            "{name}: numeric {numeric} vs residue {residue}"
        );
    }
}

#[test]
fn grvdv_basis_differs_from_monomials() {
    let parameters = Parameters::defaults();
    parameters.set("B->K^*ccbar::Re{alpha_1^perp}", 0.4).unwrap();
    let options = Options::new();
    let monomial =
        FormFactorFactory::nonlocal("B->K^*ccbar::GvDV2020", &parameters, &options).unwrap();
    let arc = FormFactorFactory::nonlocal("B->K^*ccbar::GRvDV2021", &parameters, &options).unwrap();
    let q2 = 2.0;
    let difference = (monomial.h_perp(q2) - arc.h_perp(q2)).norm();
    assert!(difference > 1e-6, "bases must differ once alpha_1 != 0");
}

#[test]
fn baryonic_amplitudes_and_residues() {
    let parameters = Parameters::defaults();
    let options = Options::new();
    let h = FormFactorFactory::baryonic_nonlocal(
        "Lambda_b->Lambdaccbar::BRvD2021",
        &parameters,
        &options,
    )
    .unwrap();

    for q2 in [0.5, 4.0, 8.0] {
        assert!(h.h_v_perp(q2).norm().is_finite());
        assert!(h.h_a_long(q2).norm() > 0.0);
    }

    let residue = h.h_v_perp_residue_jpsi();
    assert!(residue.norm() > 0.0 && residue.norm().is_finite());

    // CP-even default alphas give residues on the real axis up to the
    // arc-polynomial mixing, which is real by construction
    assert!(residue.im.abs() < 1e-9 * residue.norm().max(1.0));
}

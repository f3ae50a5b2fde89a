use heft_core::Parameters;
use heft_model::model::Model;
use heft_model::qcd::{alpha_s_evolve, beta_coefficients, msbar_mass_evolve};
use heft_model::StandardModel;

#[test]
fn beta_coefficients_reference_values() {
    let [b0, b1, b2, b3] = beta_coefficients(5);
    assert!((b0 - 23.0 / 3.0).abs() < 1e-12);
    assert!((b1 - 116.0 / 3.0).abs() < 1e-12);
    assert!((b2 - 9769.0 / 54.0).abs() < 1e-9);
    // four-loop coefficient for nf = 5
    assert!((b3 - 4826.1563).abs() < 1e-3);

    let [b0, _, _, _] = beta_coefficients(4);
    assert!((b0 - 25.0 / 3.0).abs() < 1e-12);
}

#[test]
fn coupling_grows_towards_the_infrared() {
    let at_mb = alpha_s_evolve(0.1176, 91.1876, 4.2, 5);
    assert!(at_mb > 0.20 && at_mb < 0.25, "alpha_s(4.2) = {at_mb}");

    // self-consistency: running down and back up returns the input
    let back = alpha_s_evolve(at_mb, 4.2, 91.1876, 5);
    assert!((back - 0.1176).abs() < 1e-9);
}

#[test]
fn model_crosses_the_flavor_threshold() {
    let parameters = Parameters::defaults();
    let model = StandardModel::new(&parameters).unwrap();
    let above = model.alpha_s(4.2);
    let below = model.alpha_s(2.0);
    assert!(below > above, "coupling must grow below mu_b");
    assert!(below > 0.26 && below < 0.34, "alpha_s(2.0) = {below}");
    assert!((model.alpha_s(91.1876) - 0.1176).abs() < 1e-6);
}

#[test]
fn msbar_masses_decrease_with_scale() {
    let m_at_2 = msbar_mass_evolve(4.18, 0.225, 4.18, 2.0, 4);
    assert!(m_at_2 > 4.18, "MSbar mass grows towards the infrared");

    let parameters = Parameters::defaults();
    let model = StandardModel::new(&parameters).unwrap();
    let mb_high = model.m_b_msbar(10.0);
    let mb_low = model.m_b_msbar(4.18);
    assert!(mb_high < mb_low);
    assert!((mb_low - 4.18).abs() < 0.02);
    assert!(model.m_b_pole() > 4.4 && model.m_b_pole() < 5.1);
}

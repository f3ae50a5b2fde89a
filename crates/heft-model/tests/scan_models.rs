use heft_core::{HeftError, Options, Parameters};
use heft_model::{make_model, LeptonFlavor};

#[test]
fn factory_selects_models_by_option() {
    let parameters = Parameters::defaults();
    for name in ["SM", "WilsonScan", "ConstrainedWilsonScan"] {
        let options = Options::from_pairs([("model", name)]);
        let model = make_model(&parameters, &options).unwrap();
        let wc = model.wilson_coefficients_b_to_s(LeptonFlavor::Muon, false);
        assert!((wc.c(9).re - 4.27342842).abs() < 1e-10, "{name}: c9 default");
        assert!(wc.alpha_s > 0.2 && wc.alpha_s < 0.25);
    }

    let options = Options::from_pairs([("model", "CKMScan")]);
    match make_model(&parameters, &options) {
        Err(HeftError::Options(info)) => {
            assert!(info.context.get("permitted").is_some());
        }
        other => panic!("expected an options error, got {other:?}"),
    }
}

#[test]
fn scan_reads_imaginary_parts() {
    let parameters = Parameters::defaults();
    parameters.set("b->s::Im{c9}", 1.25).unwrap();
    parameters.set("b->s::Re{c9'}", 0.5).unwrap();

    let options = Options::from_pairs([("model", "WilsonScan")]);
    let model = make_model(&parameters, &options).unwrap();
    let wc = model.wilson_coefficients_b_to_s(LeptonFlavor::Muon, false);
    assert!((wc.c(9).im - 1.25).abs() < 1e-12);
    assert!((wc.c_prime(9).re - 0.5).abs() < 1e-12);

    // CP conjugation flips the sign of the imaginary parts
    let conjugated = model.wilson_coefficients_b_to_s(LeptonFlavor::Muon, true);
    assert!((conjugated.c(9).im + 1.25).abs() < 1e-12);
}

#[test]
fn constrained_scan_enforces_su2_relations() {
    let parameters = Parameters::defaults();
    parameters.set("b->s::Re{cS}", 0.7).unwrap();
    parameters.set("b->s::Re{cS'}", -0.2).unwrap();
    // these must be ignored by the constrained model
    parameters.set("b->s::Re{cP}", 3.0).unwrap();
    parameters.set("b->s::Re{cT}", 3.0).unwrap();

    let options = Options::from_pairs([("model", "ConstrainedWilsonScan")]);
    let model = make_model(&parameters, &options).unwrap();
    let wc = model.wilson_coefficients_b_to_s(LeptonFlavor::Muon, false);
    assert!((wc.c_p().re + 0.7).abs() < 1e-12, "cP = -cS");
    assert!((wc.c_p_prime().re + 0.2).abs() < 1e-12, "cP' = cS'");
    assert_eq!(wc.c_t().norm(), 0.0);
    assert_eq!(wc.c_t5().norm(), 0.0);

    // the dropped parameters must not be in the dependence set
    let cp_id = parameters.lookup("b->s::Re{cP}").unwrap();
    let ct_id = parameters.lookup("b->s::Re{cT}").unwrap();
    let used = model.used_parameter_ids();
    assert!(!used.contains(&cp_id));
    assert!(!used.contains(&ct_id));
}

#[test]
fn flavor_specific_sectors_override_universal_values() {
    let parameters = Parameters::defaults();
    parameters.declare("b->smumu::Re{c9}", 3.0);

    let options = Options::from_pairs([("model", "WilsonScan")]);
    let model = make_model(&parameters, &options).unwrap();

    let muon = model.wilson_coefficients_b_to_s(LeptonFlavor::Muon, false);
    assert!((muon.c(9).re - 3.0).abs() < 1e-12);

    let electron = model.wilson_coefficients_b_to_s(LeptonFlavor::Electron, false);
    assert!((electron.c(9).re - 4.27342842).abs() < 1e-10);
}

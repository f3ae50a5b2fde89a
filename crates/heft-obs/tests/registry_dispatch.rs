use heft_core::{HeftError, Kinematics, Options, Parameters};
use heft_obs::{entries, make_observable};

#[test]
fn creation_path_resolves_registered_names() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 14.18), ("q2_max", 22.8)]);
    let observable = make_observable(
        "B->Kll::BR,l=mu,form-factors=BZ2004v2",
        &parameters,
        &kinematics,
        &Options::new(),
    )
    .unwrap();

    assert_eq!(observable.name(), "B->Kll::BR,l=mu,form-factors=BZ2004v2");
    assert_eq!(observable.options().get("l"), Some("mu"));

    let value = observable.evaluate();
    assert!(value > 0.9e-7 && value < 2.3e-7, "BR = {value:e}");

    // evaluating twice yields exactly the same value
    assert_eq!(observable.evaluate(), value);
}

#[test]
fn kinematic_variables_are_dereferenced_at_evaluation_time() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 15.0), ("q2_max", 20.0)]);
    let observable =
        make_observable("B->Kll::BR", &parameters, &kinematics, &Options::new()).unwrap();

    let narrow = observable.evaluate();
    kinematics.set("q2_max", 22.0).unwrap();
    let wide = observable.evaluate();
    assert!(wide > narrow, "widening the bin raises the integral");
}

#[test]
fn name_delta_options_take_precedence() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 14.18), ("q2_max", 22.0)]);
    let base = Options::from_pairs([("l", "e")]);
    let observable =
        make_observable("B->Kll::BR,l=mu", &parameters, &kinematics, &base).unwrap();
    assert_eq!(observable.options().get("l"), Some("mu"));
}

#[test]
fn parameter_fallback_and_error_paths() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::new();

    // a bare parameter name evaluates to the parameter value
    let observable =
        make_observable("mass::B_d", &parameters, &kinematics, &Options::new()).unwrap();
    assert_eq!(observable.evaluate(), 5.27958);
    parameters.set("mass::B_d", 5.3).unwrap();
    assert_eq!(observable.evaluate(), 5.3);
    parameters.set("mass::B_d", 5.27958).unwrap();

    // a parameter name with options is not a valid observable
    match make_observable("mass::B_d,l=mu", &parameters, &kinematics, &Options::new()) {
        Err(HeftError::ObservableName(info)) => {
            assert!(info.message.contains("mass::B_d"));
        }
        other => panic!("expected a name error, got {other:?}"),
    }

    // unknown names report the offending input
    let err = make_observable("X->Yll::BR", &parameters, &kinematics, &Options::new())
        .unwrap_err();
    assert!(err.to_string().contains("X->Yll::BR"));

    // syntax errors are distinct from lookup misses
    assert!(make_observable("noseparator", &parameters, &kinematics, &Options::new()).is_err());
}

#[test]
fn clone_preserves_values_and_rebinds_parameters() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 15.0), ("q2_max", 20.0)]);
    let observable =
        make_observable("B->Kll::BR,l=mu", &parameters, &kinematics, &Options::new()).unwrap();

    let clone = observable.clone_observable().unwrap();
    assert_eq!(clone.evaluate(), observable.evaluate());

    // a clone with detached parameters ignores later mutations of the original
    let detached = parameters.clone_values();
    let independent = observable.clone_with(&detached).unwrap();
    let before = independent.evaluate();
    parameters.set("b->s::Re{c9}", 6.0).unwrap();
    assert_eq!(independent.evaluate(), before);
    assert!(observable.evaluate() != before);
}

#[test]
fn entries_declare_their_kinematic_variables() {
    let missing = Kinematics::new();
    let parameters = Parameters::defaults();
    let result = make_observable("B->Kll::BR", &parameters, &missing, &Options::new());
    match result {
        Err(HeftError::Kinematics(info)) => {
            assert!(info.message.contains("q2_min"));
        }
        other => panic!("expected a kinematics error, got {other:?}"),
    }

    for entry in entries() {
        assert!(entry.name.contains("::"), "malformed entry name {}", entry.name);
        assert!(!entry.latex.is_empty());
    }
    assert!(entries().len() >= 30);
}

#[test]
fn form_factor_adapters_expose_single_variable_observables() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2", 4.0)]);

    let f_p = make_observable("B->K::f_+(q2)", &parameters, &kinematics, &Options::new()).unwrap();
    let value = f_p.evaluate();
    assert!(value > 0.3 && value < 1.0, "f_+(4) = {value}");

    kinematics.set("q2", 0.0).unwrap();
    assert!((f_p.evaluate() - 0.335).abs() < 1e-12);

    let ratio =
        make_observable("B->K^*::V/A_1(q2)", &parameters, &kinematics, &Options::new()).unwrap();
    let v = make_observable("B->K^*::V(q2)", &parameters, &kinematics, &Options::new()).unwrap();
    let a_1 = make_observable("B->K^*::A_1(q2)", &parameters, &kinematics, &Options::new()).unwrap();
    assert!((ratio.evaluate() - v.evaluate() / a_1.evaluate()).abs() < 1e-12);
}

#[test]
fn invalid_option_values_surface_from_construction() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 1.0), ("q2_max", 6.0)]);
    match make_observable("B->Kll::BR,l=pi", &parameters, &kinematics, &Options::new()) {
        Err(HeftError::Options(info)) => {
            assert!(info.context.get("permitted").is_some());
        }
        other => panic!("expected an options error, got {other:?}"),
    }
}

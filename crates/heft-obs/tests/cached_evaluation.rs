use heft_core::{Kinematics, Options, Parameters};
use heft_obs::{make_observable, CachedObservable};

fn bound_br(parameters: &Parameters, kinematics: &Kinematics) -> CachedObservable {
    CachedObservable::new(
        make_observable("B->Kll::BR,l=mu", parameters, kinematics, &Options::new()).unwrap(),
    )
}

#[test]
fn prepare_then_evaluate_round_trips() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 15.0), ("q2_max", 20.0)]);
    let cached = bound_br(&parameters, &kinematics);

    let intermediate = cached.prepare();
    assert!(cached.is_valid(&intermediate));
    assert_eq!(cached.evaluate_with(&intermediate), intermediate.value());
    assert_eq!(cached.evaluate(), intermediate.value());
}

#[test]
fn dependent_parameter_change_invalidates() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 15.0), ("q2_max", 20.0)]);
    let cached = bound_br(&parameters, &kinematics);

    let intermediate = cached.prepare();
    parameters.set("b->s::Re{c9}", 5.0).unwrap();
    assert!(!cached.is_valid(&intermediate));

    // evaluate_with transparently re-prepares
    let fresh = cached.evaluate_with(&intermediate);
    assert!(fresh != intermediate.value());
}

#[test]
fn unrelated_parameter_change_keeps_the_cache() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 15.0), ("q2_max", 20.0)]);
    let cached = bound_br(&parameters, &kinematics);

    let intermediate = cached.prepare();
    // the pion mass is not in the dependence set of B -> K l l
    parameters.set("mass::pi^0", 0.1349).unwrap();
    assert!(cached.is_valid(&intermediate));
    assert_eq!(cached.evaluate_with(&intermediate), intermediate.value());
}

#[test]
fn kinematic_change_invalidates() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 15.0), ("q2_max", 20.0)]);
    let cached = bound_br(&parameters, &kinematics);

    let intermediate = cached.prepare();
    kinematics.set("q2_max", 21.0).unwrap();
    assert!(!cached.is_valid(&intermediate));
    assert!(cached.evaluate() != intermediate.value());
}

#[test]
fn cache_sharing_requires_identical_context() {
    let parameters = Parameters::defaults();
    let kinematics = Kinematics::from_pairs([("q2_min", 15.0), ("q2_max", 20.0)]);
    let first = bound_br(&parameters, &kinematics);
    let second = bound_br(&parameters, &kinematics);
    assert!(first.shares_cache_with(&second));

    let detached = parameters.clone_values();
    let third = CachedObservable::new(
        make_observable("B->Kll::BR,l=mu", &detached, &kinematics, &Options::new()).unwrap(),
    );
    assert!(!first.shares_cache_with(&third));

    let other_kinematics = Kinematics::from_pairs([("q2_min", 14.0), ("q2_max", 20.0)]);
    let fourth = bound_br(&parameters, &other_kinematics);
    assert!(!first.shares_cache_with(&fourth));
}

use heft_core::{ParameterUser, Parameters};

#[test]
fn defaults_table_is_populated_and_unique() {
    let parameters = Parameters::defaults();
    assert!(parameters.len() > 100, "default table unexpectedly small");
    let names = parameters.names();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len(), "duplicate parameter names");
}

#[test]
fn shared_handles_see_mutations() {
    let parameters = Parameters::defaults();
    let other = parameters.clone();
    assert!(parameters.shares_storage_with(&other));

    let id = parameters.lookup("mass::B_d").unwrap();
    parameters.set_value(id, 5.3);
    assert_eq!(other.value(id), 5.3);
    assert_eq!(parameters.generation(id), 1);
}

#[test]
fn clone_values_detaches_storage() {
    let parameters = Parameters::defaults();
    let copy = parameters.clone_values();
    assert!(!parameters.shares_storage_with(&copy));

    parameters.set("mass::B_d", 5.0).unwrap();
    assert_eq!(copy.value_of("mass::B_d").unwrap(), 5.27958);
    // insertion order is preserved by the copy
    assert_eq!(parameters.names(), copy.names());
}

#[test]
fn redeclaration_keeps_current_value() {
    let parameters = Parameters::new();
    let id = parameters.declare("test::x", 1.0);
    parameters.set_value(id, 2.0);
    let again = parameters.declare("test::x", 7.0);
    assert_eq!(id, again);
    assert_eq!(parameters.value(id), 2.0);
}

#[test]
fn parameter_user_accumulates_dependence_set() {
    let parameters = Parameters::defaults();
    let user = ParameterUser::new();
    let mb = user.bind(&parameters, "mass::B_d").unwrap();
    let mk = user.bind(&parameters, "mass::K_d").unwrap();
    assert_eq!(user.used_ids(), vec![mb.id().min(mk.id()), mb.id().max(mk.id())]);

    let unknown = user.bind(&parameters, "mass::X_b");
    assert!(unknown.is_err());
    let info = unknown.unwrap_err();
    assert!(info.to_string().contains("mass::X_b"));
}

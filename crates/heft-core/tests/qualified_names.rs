use heft_core::{ParameterName, QualifiedName};

#[test]
fn parses_bare_and_optioned_names() {
    let qn = QualifiedName::parse("B->K^*ll::A_FB(s)").unwrap();
    assert_eq!(qn.prefix, "B->K^*ll");
    assert_eq!(qn.name, "A_FB(s)");
    assert!(qn.options.is_empty());

    let qn = QualifiedName::parse("B->Kll::BR,l=mu,form-factors=BZ2004v2").unwrap();
    assert_eq!(qn.full(), "B->Kll::BR");
    assert_eq!(qn.options.get("l"), Some("mu"));
    assert_eq!(qn.options.get("form-factors"), Some("BZ2004v2"));
}

#[test]
fn commas_inside_argument_lists_are_not_option_separators() {
    let qn = QualifiedName::parse("B->K^*ll::S_5(q2_min,q2_max),l=e").unwrap();
    assert_eq!(qn.name, "S_5(q2_min,q2_max)");
    assert_eq!(qn.options.get("l"), Some("e"));
}

#[test]
fn rejects_malformed_names() {
    for input in [
        "",
        "noseparator",
        "B->Kll::",
        "::BR",
        "B->Kll::BR,loose",
        "B->Kll::BR,=mu",
        "B->Kll::BR,l=",
        "B->Kll::BR(q2",
        "a::b::c",
        "B->K ll::BR",
    ] {
        let result = QualifiedName::parse(input);
        assert!(result.is_err(), "expected syntax error for {input:?}");
    }
}

#[test]
fn parameter_names_split_sector_symbol_suffix() {
    let pn = ParameterName::parse("B->K^*::f_+@HQET").unwrap();
    assert_eq!(pn.sector, "B->K^*");
    assert_eq!(pn.symbol, "f_+");
    assert_eq!(pn.suffix.as_deref(), Some("HQET"));

    let pn = ParameterName::parse("life_time::B_u").unwrap();
    assert_eq!(pn.sector, "life_time");
    assert!(pn.suffix.is_none());

    assert!(ParameterName::parse("mass::@scheme").is_err());
    assert!(ParameterName::parse("mass::B_d@").is_err());
}

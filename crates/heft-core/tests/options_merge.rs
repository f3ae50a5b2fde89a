use heft_core::{HeftError, Options};

#[test]
fn union_is_right_biased() {
    let a = Options::from_pairs([("l", "mu"), ("model", "SM")]);
    let b = Options::from_pairs([("l", "tau"), ("q", "d")]);
    let merged = a + b;
    assert_eq!(merged.get("l"), Some("tau"));
    assert_eq!(merged.get("model"), Some("SM"));
    assert_eq!(merged.get("q"), Some("d"));
    assert_eq!(merged.len(), 3);
}

#[test]
fn switch_validates_against_permitted_set() {
    let options = Options::from_pairs([("l", "mu")]);
    assert_eq!(options.switch("l", &["e", "mu", "tau"], "mu").unwrap(), "mu");
    assert_eq!(options.switch("q", &["u", "d"], "d").unwrap(), "d");

    let bad = Options::from_pairs([("l", "pi")]);
    let err = bad.switch("l", &["e", "mu", "tau"], "mu").unwrap_err();
    match err {
        HeftError::Options(info) => {
            assert!(info.message.contains("'pi'"));
            assert_eq!(info.context.get("permitted").map(String::as_str), Some("e, mu, tau"));
        }
        other => panic!("unexpected error family: {other:?}"),
    }
}

#[test]
fn boolean_and_integer_accessors() {
    let options = Options::from_pairs([("cp-conjugate", "true"), ("z-order-lp", "3")]);
    assert!(options.boolean("cp-conjugate", false).unwrap());
    assert!(!options.boolean("absent", false).unwrap());
    assert_eq!(options.integer("z-order-lp", 2).unwrap(), 3);
    assert_eq!(options.integer("z-order-slp", 1).unwrap(), 1);

    let bad = Options::from_pairs([("cp-conjugate", "yes")]);
    assert!(bad.boolean("cp-conjugate", false).is_err());
}

use dynaval_runtime::{
    errors::PropsError,
    props::{define_prop, get_own_prop, get_prop, has_own_prop, remove_prop, set_prop},
    values::{RuntimeValue, ValueType, are_values_equal},
};

use crate::{boxed_string, expect_keys, list, record, record_with_proto, symbol};

fn expect_value(got: Option<RuntimeValue>, expected: RuntimeValue) {
    let got = got.expect("Expected a property value, but the property was not found");

    assert!(are_values_equal(&got, &expected).unwrap());
}

#[test]
fn assignment_keeps_enumerability() {
    let value = record([]);

    define_prop(&value, "hidden", 1.into(), false).unwrap();
    set_prop(&value, "hidden", 2.into()).unwrap();

    expect_keys(&value, &[]);
    expect_value(get_own_prop(&value, "hidden"), 2.into());
}

#[test]
fn definition_overrides_enumerability() {
    let value = record([("a", 1.into())]);

    define_prop(&value, "a", 2.into(), false).unwrap();
    expect_keys(&value, &[]);

    define_prop(&value, "a", 3.into(), true).unwrap();
    expect_keys(&value, &["a"]);
    expect_value(get_own_prop(&value, "a"), 3.into());
}

#[test]
fn own_reads_ignore_the_proto_chain() {
    let proto = record([("inherited", 1.into())]);
    let value = record_with_proto([("own", 2.into())], &proto);

    expect_value(get_own_prop(&value, "own"), 2.into());
    assert!(get_own_prop(&value, "inherited").is_none());
    assert!(!has_own_prop(&value, "inherited"));
}

#[test]
fn chain_reads_walk_the_proto_chain() {
    let root = record([("depth", 2.into())]);
    let base = record_with_proto([("mid", 1.into())], &root);
    let value = record_with_proto([("own", 0.into())], &base);

    expect_value(get_prop(&value, "own"), 0.into());
    expect_value(get_prop(&value, "mid"), 1.into());
    expect_value(get_prop(&value, "depth"), 2.into());
    assert!(get_prop(&value, "missing").is_none());
}

#[test]
fn proto_cycles_do_not_hang_reads() {
    let value = record([("own", 1.into())]);

    let RuntimeValue::Struct(cell) = &value else {
        panic!("Expected a struct value");
    };

    cell.write().proto = Some(cell.clone());

    expect_value(get_prop(&value, "own"), 1.into());
    assert!(get_prop(&value, "missing").is_none());
}

#[test]
fn own_props_shadow_the_proto_chain() {
    let proto = record([("a", 1.into())]);
    let value = record_with_proto([("a", 2.into())], &proto);

    expect_value(get_prop(&value, "a"), 2.into());
}

#[test]
fn index_keys_address_list_elements() {
    let value = list(["a".into(), "b".into()]);

    expect_value(get_own_prop(&value, "0"), "a".into());
    expect_value(get_own_prop(&value, "1"), "b".into());
    assert!(get_own_prop(&value, "2").is_none());
}

#[test]
fn index_keys_address_character_positions() {
    let raw = RuntimeValue::from("héé");

    expect_value(get_own_prop(&raw, "0"), "h".into());
    expect_value(get_own_prop(&raw, "1"), "é".into());
    assert!(get_own_prop(&raw, "3").is_none());

    let boxed = boxed_string("ab");

    expect_value(get_own_prop(&boxed, "1"), "b".into());
    assert!(get_own_prop(&boxed, "2").is_none());
}

#[test]
fn non_canonical_indexes_are_named_keys() {
    let value = list(["a".into(), "b".into()]);

    assert!(get_own_prop(&value, "01").is_none());
    assert!(get_own_prop(&value, "+1").is_none());
    assert!(get_own_prop(&value, "1 ").is_none());
}

#[test]
fn removal() {
    let value = record([("a", 1.into()), ("b", 2.into())]);

    expect_value(remove_prop(&value, "a").unwrap(), 1.into());
    assert!(remove_prop(&value, "a").unwrap().is_none());

    expect_keys(&value, &["b"]);
}

#[test]
fn keyless_targets_reject_writes() {
    for (value, typ) in [
        (RuntimeValue::Void, ValueType::Void),
        (RuntimeValue::Null, ValueType::Null),
        (true.into(), ValueType::Bool),
        (1.into(), ValueType::Int),
        (1.5.into(), ValueType::Float),
        ("abc".into(), ValueType::String),
        (symbol(None), ValueType::Symbol),
    ] {
        assert_eq!(
            set_prop(&value, "a", 1.into()),
            Err(PropsError::PropsNotSupported { typ }),
        );

        assert_eq!(
            remove_prop(&value, "a").unwrap_err(),
            PropsError::PropsNotSupported { typ },
        );
    }
}

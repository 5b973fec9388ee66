use dynaval_runtime::{
    errors::PropsError,
    keys::enum_own_keys,
    props::{define_prop, set_prop},
    values::{RuntimeValue, ValueType},
};

use crate::{
    boxed_string, expect_keys, expect_keys_ordered, from_json, function, list, record,
    record_with_proto, symbol,
};

#[test]
fn plain_structs() {
    expect_keys(&record([]), &[]);

    expect_keys(
        &record([("a", 1.into()), ("b", true.into()), ("c", "C".into())]),
        &["a", "b", "c"],
    );
}

#[test]
fn proto_props_are_not_own() {
    let proto = record([("a", 1.into())]);
    expect_keys(&record_with_proto([], &proto), &[]);

    let base = record_with_proto([("d", "D".into())], &proto);
    let value = record_with_proto([("b", true.into()), ("c", "C".into())], &base);
    expect_keys(&value, &["b", "c"]);
}

#[test]
fn non_enumerable_props_are_hidden() {
    let value = record([]);

    define_prop(&value, "a", 1.into(), true).unwrap();
    define_prop(&value, "b", true.into(), false).unwrap();
    define_prop(&value, "c", "C".into(), false).unwrap();

    expect_keys(&value, &["a"]);
}

#[test]
fn sentinels() {
    expect_keys(&RuntimeValue::Void, &[]);
    expect_keys(&RuntimeValue::Null, &[]);
}

#[test]
fn primitive_scalars() {
    expect_keys(&true.into(), &[]);
    expect_keys(&false.into(), &[]);
    expect_keys(&0.into(), &[]);
    expect_keys(&123.into(), &[]);
    expect_keys(&1.5.into(), &[]);
}

#[test]
fn raw_strings() {
    expect_keys(&"".into(), &[]);
    expect_keys_ordered(&"abc".into(), &["0", "1", "2"]);

    let string = RuntimeValue::from("abc");

    assert_eq!(
        set_prop(&string, "aaa", "AAA".into()),
        Err(PropsError::PropsNotSupported {
            typ: ValueType::String
        }),
    );
    expect_keys_ordered(&string, &["0", "1", "2"]);

    assert_eq!(
        define_prop(&string, "bbb", "BBB".into(), false),
        Err(PropsError::PropsNotSupported {
            typ: ValueType::String
        }),
    );
    expect_keys_ordered(&string, &["0", "1", "2"]);
}

#[test]
fn raw_strings_count_characters() {
    // 3 characters, 5 bytes
    expect_keys_ordered(&"héé".into(), &["0", "1", "2"]);
}

#[test]
fn boxed_strings() {
    let value = boxed_string("abc");
    expect_keys_ordered(&value, &["0", "1", "2"]);

    set_prop(&value, "aaa", "AAA".into()).unwrap();
    expect_keys(&value, &["0", "1", "2", "aaa"]);

    define_prop(&value, "bbb", "BBB".into(), false).unwrap();
    expect_keys(&value, &["0", "1", "2", "aaa"]);
}

#[test]
fn lists() {
    expect_keys(&list([]), &[]);
    expect_keys_ordered(&list([1.into(), 2.into(), 3.into()]), &["0", "1", "2"]);

    let value = list(["a".into(), "b".into()]);

    set_prop(&value, "aaa", "AAA".into()).unwrap();
    expect_keys(&value, &["0", "1", "aaa"]);

    define_prop(&value, "bbb", "BBB".into(), false).unwrap();
    expect_keys(&value, &["0", "1", "aaa"]);
}

#[test]
fn functions() {
    let value = function(Some("noop"));
    expect_keys(&value, &[]);

    set_prop(&value, "aaa", "AAA".into()).unwrap();
    expect_keys(&value, &["aaa"]);

    define_prop(&value, "bbb", "BBB".into(), false).unwrap();
    expect_keys(&value, &["aaa"]);
}

#[test]
fn symbols() {
    let value = symbol(Some("foo"));
    expect_keys(&value, &[]);

    assert!(set_prop(&value, "aaa", "AAA".into()).is_err());
    expect_keys(&value, &[]);

    assert!(define_prop(&value, "bbb", "BBB".into(), false).is_err());
    expect_keys(&value, &[]);
}

#[test]
fn shadowing_named_keys_are_not_duplicated() {
    let value = list([1.into(), 2.into()]);

    set_prop(&value, "0", true.into()).unwrap();

    expect_keys_ordered(&value, &["0", "1"]);
}

#[test]
fn imported_json_keeps_key_order() {
    let value = from_json(r#"{ "z": 1, "a": { "nested": true }, "m": [1, 2] }"#);

    expect_keys_ordered(&value, &["z", "a", "m"]);
}

#[test]
fn enumeration_is_pure() {
    let value = record([("a", 1.into()), ("b", 2.into())]);

    let first = enum_own_keys(&value);
    let second = enum_own_keys(&value);

    assert_eq!(first, second);
    expect_keys(&value, &["a", "b"]);
}

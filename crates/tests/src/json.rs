use dynaval_runtime::{
    json::{JsonExportError, value_to_json},
    props::define_prop,
    values::{RuntimeValue, ValueType, are_values_equal},
};

use crate::{boxed_string, expect_keys, from_json, function, list, record};

#[test]
fn imported_documents() {
    let value = from_json(
        r#"{ "flag": true, "count": 2, "ratio": 0.5, "name": "x", "items": [1, null] }"#,
    );

    expect_keys(&value, &["flag", "count", "ratio", "name", "items"]);

    let expected = record([
        ("flag", true.into()),
        ("count", 2.into()),
        ("ratio", 0.5.into()),
        ("name", "x".into()),
        ("items", list([1.into(), RuntimeValue::Null])),
    ]);

    assert!(are_values_equal(&value, &expected).unwrap());
}

#[test]
fn exported_structs_drop_hidden_props() {
    let value = record([("a", 1.into())]);

    define_prop(&value, "b", 2.into(), false).unwrap();

    let json = value_to_json(&value).unwrap();

    assert_eq!(serde_json::to_string(&json).unwrap(), r#"{"a":1}"#);
}

#[test]
fn exported_boxed_strings_are_their_text() {
    let json = value_to_json(&boxed_string("abc")).unwrap();

    assert_eq!(json, serde_json::json!("abc"));
}

#[test]
fn exported_key_order_is_preserved() {
    let value = from_json(r#"{ "z": 1, "a": 2 }"#);

    let json = value_to_json(&value).unwrap();

    assert_eq!(serde_json::to_string(&json).unwrap(), r#"{"z":1,"a":2}"#);
}

#[test]
fn non_finite_numbers_export_as_null() {
    let json = value_to_json(&RuntimeValue::Float(f64::NAN)).unwrap();

    assert_eq!(json, serde_json::Value::Null);
}

#[test]
fn values_without_json_counterpart() {
    assert_eq!(
        value_to_json(&function(None)).unwrap_err(),
        JsonExportError {
            typ: ValueType::Function
        },
    );

    assert_eq!(
        value_to_json(&RuntimeValue::Void).unwrap_err(),
        JsonExportError {
            typ: ValueType::Void
        },
    );
}

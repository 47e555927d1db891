use crate::Patch;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(default)]
    field: Patch<String>,
}

#[test]
fn test_missing_key_is_absent() {
    let body: Body = serde_json::from_str("{}").unwrap();

    assert_eq!(body.field, Patch::Absent);
    assert!(!body.field.is_present());
}

#[test]
fn test_null_key_is_null() {
    let body: Body = serde_json::from_str(r#"{"field": null}"#).unwrap();

    assert_eq!(body.field, Patch::Null);
    assert!(body.field.is_present());
    assert_eq!(body.field.value(), None);
}

#[test]
fn test_value_key_is_value() {
    let body: Body = serde_json::from_str(r#"{"field": ""}"#).unwrap();

    assert_eq!(body.field, Patch::Value(String::new()));
    assert_eq!(body.field.value(), Some(&String::new()));
}

#[test]
fn test_wrong_type_is_rejected() {
    let result: Result<Body, _> = serde_json::from_str(r#"{"field": 42}"#);

    assert!(result.is_err());
}

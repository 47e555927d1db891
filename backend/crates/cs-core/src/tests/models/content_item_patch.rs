use crate::{ContentItemPatch, Patch};

use googletest::prelude::*;

#[test]
fn given_empty_object_when_parsed_then_patch_is_empty_and_valid() {
    let patch: ContentItemPatch = serde_json::from_str("{}").unwrap();

    assert_that!(patch.is_empty(), eq(true));
    assert_that!(patch.validate(), ok(anything()));
    assert_that!(patch.changed_fields(), is_empty());
}

#[test]
fn given_only_title_when_parsed_then_other_fields_absent() {
    let patch: ContentItemPatch = serde_json::from_str(r#"{"title": "New"}"#).unwrap();

    assert_that!(patch.title, eq(&Patch::Value("New".to_string())));
    assert_that!(patch.description, eq(&Patch::Absent));
    assert_that!(patch.body, eq(&Patch::Absent));
    assert_that!(patch.changed_fields(), eq(&vec!["title"]));
}

#[test]
fn given_null_description_when_validated_then_ok() {
    let patch: ContentItemPatch = serde_json::from_str(r#"{"description": null}"#).unwrap();

    assert_that!(patch.description, eq(&Patch::Null));
    assert_that!(patch.validate(), ok(anything()));
}

#[test]
fn given_null_title_when_validated_then_error_names_title() {
    let patch: ContentItemPatch = serde_json::from_str(r#"{"title": null}"#).unwrap();

    let err = patch.validate().unwrap_err();
    assert_that!(err.field(), some(eq("title")));
}

#[test]
fn given_empty_body_when_validated_then_error_names_body() {
    let patch: ContentItemPatch = serde_json::from_str(r#"{"body": ""}"#).unwrap();

    let err = patch.validate().unwrap_err();
    assert_that!(err.field(), some(eq("body")));
}

#[test]
fn given_whitespace_title_when_validated_then_ok() {
    let patch: ContentItemPatch = serde_json::from_str(r#"{"title": "   "}"#).unwrap();

    assert_that!(patch.validate(), ok(anything()));
    assert_that!(patch.changed_fields(), eq(&vec!["title"]));
}

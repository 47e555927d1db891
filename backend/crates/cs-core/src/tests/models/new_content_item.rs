use crate::{CoreError, NewContentItem};

use googletest::prelude::*;

#[test]
fn given_title_and_body_when_new_then_ok() {
    let result = NewContentItem::new("A".to_string(), None, "B".to_string());

    assert_that!(result, ok(anything()));
    let item = result.unwrap();
    assert_that!(item.title(), eq("A"));
    assert_that!(item.body(), eq("B"));
    assert_that!(item.description(), none());
}

#[test]
fn given_empty_title_when_new_then_validation_error_on_title() {
    let result = NewContentItem::new(String::new(), None, "B".to_string());

    let err = result.unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }));
    assert_that!(err.field(), some(eq("title")));
}

#[test]
fn given_empty_body_when_new_then_validation_error_on_body() {
    let result = NewContentItem::new("A".to_string(), Some("desc".to_string()), String::new());

    let err = result.unwrap_err();
    assert_that!(err.field(), some(eq("body")));
    assert_that!(err.message(), contains_substring("body"));
}

#[test]
fn given_whitespace_title_and_body_when_new_then_kept_verbatim() {
    let result = NewContentItem::new("   ".to_string(), None, "\n\t".to_string());

    let item = result.unwrap();
    assert_that!(item.title(), eq("   "));
    assert_that!(item.body(), eq("\n\t"));
}

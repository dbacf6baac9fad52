//! Validation rule vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use msgapi_core::validation::{is_duplicate, normalize, validate_message, ValidationFailure};


#[test]
fn validation_vectors() {
    for v in vector_loader::load("validation.json") {
        let text = v.build_text();
        let res = validate_message(&text);

        match v.expect_error {
            Some(err) => {
                let failure = res.expect_err(&v.description);
                assert!(
                    failure.reason().contains(&err.reason_contains),
                    "vector={} reason={}",
                    v.description,
                    failure.reason()
                );
            }
            None => assert_eq!(res, Ok(()), "vector={}", v.description),
        }
    }
}

#[test]
fn first_failing_rule_wins() {
    assert_eq!(validate_message(""), Err(ValidationFailure::Empty));
    assert_eq!(validate_message("  "), Err(ValidationFailure::Blank));
    // Too short and no alphanumerics: length is checked first.
    assert_eq!(validate_message("!!"), Err(ValidationFailure::TooShort));
    assert_eq!(
        validate_message(&"!".repeat(201)),
        Err(ValidationFailure::TooLong)
    );
}

#[test]
fn reason_matches_display() {
    for f in [
        ValidationFailure::Empty,
        ValidationFailure::Blank,
        ValidationFailure::TooShort,
        ValidationFailure::TooLong,
        ValidationFailure::NoAlphanumeric,
    ] {
        assert_eq!(f.to_string(), f.reason());
    }
}

#[test]
fn duplicate_ignores_case_and_surrounding_whitespace() {
    let existing = ["  hello world  ".to_string()];
    assert!(is_duplicate("Hello World", &existing));
    assert!(is_duplicate("HELLO WORLD\n", &existing));
}

#[test]
fn duplicate_keeps_inner_whitespace() {
    let existing = ["hello world"];
    assert!(!is_duplicate("hello  world", existing));
    assert!(!is_duplicate("hello world!", existing));
}

#[test]
fn duplicate_against_empty_set() {
    let existing: Vec<String> = Vec::new();
    assert!(!is_duplicate("anything at all", &existing));
}

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  MiXeD Case\t"), "mixed case");
}

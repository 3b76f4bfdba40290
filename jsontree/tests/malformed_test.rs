// SPDX-License-Identifier: Apache-2.0

// Reject-grid for malformed documents. Every case must fail with
// `MalformedInput`, and only that.

use jsontree::ParseError;

macro_rules! generate_reject_tests {
    ($($name:ident: $input:expr,)*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_reject_ $name>]() {
                    let result = jsontree::parse($input.as_bytes());
                    assert_eq!(
                        result,
                        Err(ParseError::MalformedInput),
                        "{:?} should be rejected as malformed",
                        $input
                    );
                }
            }
        )*
    };
}

generate_reject_tests!(
    empty: "",
    bare_word: "abc",
    bare_number: "1",
    bare_string: "\"s\"",
    leading_whitespace: " {}",
    unterminated_string: r#"{"a":"b"#,
    unterminated_key: r#"{"a"#,
    missing_colon: r#"{"a" 1}"#,
    comma_for_colon: r#"{"a",1}"#,
    trailing_comma_object: r#"{"a":1,}"#,
    trailing_comma_array: "[1,]",
    leading_comma_array: "[,1]",
    double_comma: "[1,,2]",
    mismatched_object_close: r#"{"a":1]"#,
    mismatched_array_close: "[1}",
    unclosed_object: r#"{"a":1"#,
    unclosed_array: "[1",
    unclosed_empty_object: "{",
    unclosed_empty_array: "[",
    missing_comma_between_members: r#"{"a":1 "b":2}"#,
    missing_comma_between_items: "[1 2]",
    unquoted_key: "{a:1}",
    value_is_bare_word: r#"{"a":x}"#,
    boolean_true: "[true]",
    boolean_false: "[false]",
    null_literal: "[null]",
    negative_number: "[-1]",
    number_then_garbage: "[1x]",
    trailing_bytes_after_root: "{} x",
    two_roots: "[][]",
    colon_in_array: "[1:2]",
    lone_closing_brace: "}",
    key_without_value: r#"{"a":}"#,
);

// The two error kinds never blur: a malformed document parsed with an
// unconstrained allocator must never surface as OutOfMemory.
#[test]
fn test_malformed_never_reports_out_of_memory() {
    for input in [r#"{"a":"b"#, r#"{"a" 1}"#, r#"{"a":1,}"#, r#"{"a":1]"#] {
        assert_eq!(
            jsontree::parse(input.as_bytes()),
            Err(ParseError::MalformedInput)
        );
    }
}

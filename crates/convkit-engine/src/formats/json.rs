use serde_json::Value;

use crate::output::Validation;

/// Parses `input` as JSON and pretty-prints it with 2-space indentation. Object keys keep
/// their order and numbers are reproduced exactly as written. Nesting deeper than
/// serde_json's recursion limit (128) is reported as invalid.
pub fn validate(input: &str) -> Validation {
    let parsed: Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(e) => return Validation::invalid(e),
    };

    match serde_json::to_string_pretty(&parsed) {
        Ok(formatted) => Validation::formatted(formatted),
        Err(e) => Validation::invalid(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_space_indent() {
        let result = validate(r#"{"a":1}"#);
        assert!(result.is_valid());
        assert_eq!(result.formatted_text(), Some("{\n  \"a\": 1\n}"));
        assert_eq!(result.error(), None);
    }

    #[test]
    fn nested_values() {
        let result = validate(r#"{"list":[1,{"b":null}],"empty":{},"none":[]}"#);
        let expected = "{\n  \"list\": [\n    1,\n    {\n      \"b\": null\n    }\n  ],\n  \"empty\": {},\n  \"none\": []\n}";
        assert_eq!(result.formatted_text(), Some(expected));
    }

    #[test]
    fn key_order_is_preserved() {
        let result = validate(r#"{"zebra":1,"apple":2,"mango":3}"#);
        assert_eq!(
            result.formatted_text(),
            Some("{\n  \"zebra\": 1,\n  \"apple\": 2,\n  \"mango\": 3\n}")
        );
    }

    #[test]
    fn numbers_keep_their_precision() {
        let result = validate("[12345678901234567890123, 0.10000000000000000001]");
        assert_eq!(
            result.formatted_text(),
            Some("[\n  12345678901234567890123,\n  0.10000000000000000001\n]")
        );
    }

    #[test]
    fn scalars_are_valid_documents() {
        assert_eq!(validate("\"text\"").formatted_text(), Some("\"text\""));
        assert_eq!(validate(" true ").formatted_text(), Some("true"));
    }

    #[test]
    fn syntax_errors_are_reported() {
        let result = validate("{bad");
        assert!(!result.is_valid());
        assert_eq!(result.formatted_text(), None);
        let error = result.error().unwrap();
        assert!(!error.is_empty());
        assert!(error.contains("line 1"), "{error}");
    }

    #[test]
    fn empty_input_is_invalid() {
        let result = validate("");
        assert!(!result.is_valid());
        assert!(result.error().unwrap().contains("EOF"));
    }

    #[test]
    fn nesting_is_limited() {
        let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let result = validate(&deep);
        assert!(!result.is_valid());
        assert!(result.error().unwrap().starts_with("recursion limit exceeded"), "{:?}", result.error());

        let shallow = format!("{}{}", "[".repeat(100), "]".repeat(100));
        assert!(validate(&shallow).is_valid());
    }

    #[test]
    fn trailing_content_is_invalid() {
        assert!(!validate("{} {}").is_valid());
    }
}

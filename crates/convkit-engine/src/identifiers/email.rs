use std::sync::LazyLock;

use regex::Regex;

use crate::output::Validation;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Syntactic check only. Nothing is resolved or delivered.
pub fn validate(input: &str) -> Validation {
    if EMAIL.is_match(input) {
        Validation::accepted()
    } else {
        Validation::invalid("Invalid email format")
    }
}

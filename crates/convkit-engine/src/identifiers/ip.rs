use std::sync::LazyLock;

use regex::Regex;

use crate::output::Validation;

const OCTET: &str = "(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";
const GROUP: &str = "[0-9a-fA-F]{1,4}";

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^{OCTET}\.{OCTET}\.{OCTET}\.{OCTET}$");
    Regex::new(&pattern).expect("IPv4 pattern is valid")
});

/// Full, compressed and `::` forms. Embedded IPv4 and zone ids are not accepted.
static IPV6: LazyLock<Regex> = LazyLock::new(|| {
    let g = GROUP;
    let forms = [
        format!("({g}:){{7}}{g}"),
        format!("({g}:){{1,7}}:"),
        format!("({g}:){{1,6}}:{g}"),
        format!("({g}:){{1,5}}(:{g}){{1,2}}"),
        format!("({g}:){{1,4}}(:{g}){{1,3}}"),
        format!("({g}:){{1,3}}(:{g}){{1,4}}"),
        format!("({g}:){{1,2}}(:{g}){{1,5}}"),
        format!("{g}:((:{g}){{1,6}})"),
        format!(":((:{g}){{1,7}}|:)"),
    ];
    let pattern = format!("^(?:{})$", forms.join("|"));
    Regex::new(&pattern).expect("IPv6 pattern is valid")
});

pub fn validate(input: &str) -> Validation {
    if IPV4.is_match(input) || IPV6.is_match(input) {
        Validation::accepted()
    } else {
        Validation::invalid("Invalid IP address format")
    }
}

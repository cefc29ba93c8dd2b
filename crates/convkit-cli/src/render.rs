//! Turns engine results and registry listings into the text the CLI prints.

use convkit_engine::{Category, Descriptor, Error, Output};
use serde::Serialize;

/// The operation succeeded.
pub const EXIT_OK: u8 = 0;

/// A validator rejected the input, or a JWT could not be decoded.
pub const EXIT_INVALID: u8 = 1;

/// Codec failure, unsupported operation or unknown converter.
pub const EXIT_ERROR: u8 = 2;

/// Exit status for the result of running one operation.
pub fn exit_code(result: &Result<Output, Error>) -> u8 {
    match result {
        Ok(output) if output.is_success() => EXIT_OK,
        Ok(_) => EXIT_INVALID,
        Err(_) => EXIT_ERROR,
    }
}

/// Text for an operation's output.
///
/// Plain text prints verbatim. A validation prints its formatted text (or `valid` when
/// there is none) on success and its error otherwise. JWT results print as indented
/// JSON. With `json` set, every output prints as indented JSON.
pub fn render_output(output: &Output, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(output);
    }

    let text = match output {
        Output::Text(text) => text.clone(),
        Output::Validation(validation) => match (validation.formatted_text(), validation.error()) {
            (_, Some(error)) => error.to_string(),
            (Some(formatted), None) => formatted.to_string(),
            (None, None) => "valid".to_string(),
        },
        Output::Jwt(_) => output.to_display_string(),
    };

    Ok(text)
}

#[derive(Serialize)]
struct Listing<'a> {
    converters: &'a [&'a Descriptor],
    counts: Vec<CategoryCount>,
}

#[derive(Serialize)]
struct CategoryCount {
    category: String,
    count: usize,
}

/// Text for `convkit list`: one line per converter, then the per-category totals.
/// `counts` are for the whole catalog, not only the listed converters.
pub fn render_list(
    converters: &[&Descriptor],
    counts: &[(Category, usize)],
    json: bool,
) -> Result<String, serde_json::Error> {
    let total: usize = counts.iter().map(|(_, n)| n).sum();

    if json {
        let mut all = vec![CategoryCount {
            category: "all".to_string(),
            count: total,
        }];
        all.extend(counts.iter().map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count: *count,
        }));

        let listing = Listing {
            converters,
            counts: all,
        };
        return serde_json::to_string_pretty(&listing);
    }

    let name_width = converters
        .iter()
        .map(|d| d.name().len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = converters
        .iter()
        .map(|d| {
            let operations = d
                .operations()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "{:<name_width$}  {:<8}  {:<14}  {}",
                d.name(),
                d.category().as_str(),
                operations,
                d.description()
            )
        })
        .collect();

    if converters.is_empty() {
        lines.push("No converters found".to_string());
    }

    let mut totals = vec![format!("all: {total}")];
    totals.extend(
        counts
            .iter()
            .map(|(category, count)| format!("{}: {count}", category.title().to_lowercase())),
    );

    lines.push(String::new());
    lines.push(totals.join("  "));

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use convkit_engine::{Operation, Registry};

    use super::*;

    #[test]
    fn exit_codes() {
        let registry = Registry::global();
        assert_eq!(exit_code(&registry.invoke("hex", Operation::Encode, "A")), EXIT_OK);
        assert_eq!(exit_code(&registry.invoke("json", Operation::Validate, "{")), EXIT_INVALID);
        assert_eq!(exit_code(&registry.invoke("jwt decoder", Operation::Decode, "x")), EXIT_INVALID);
        assert_eq!(exit_code(&registry.invoke("hex", Operation::Decode, "0")), EXIT_ERROR);
        assert_eq!(exit_code(&registry.invoke("json", Operation::Encode, "")), EXIT_ERROR);
        assert_eq!(exit_code(&registry.invoke("rot13", Operation::Encode, "")), EXIT_ERROR);
    }

    #[test]
    fn validations_render_formatted_text_or_error() {
        let registry = Registry::global();

        let ok = registry.invoke("json", Operation::Validate, "[1]").unwrap();
        assert_eq!(render_output(&ok, false).unwrap(), "[\n  1\n]");

        let accepted = registry.invoke("email validator", Operation::Validate, "a@b.co").unwrap();
        assert_eq!(render_output(&accepted, false).unwrap(), "valid");

        let rejected = registry.invoke("email validator", Operation::Validate, "nope").unwrap();
        assert_eq!(render_output(&rejected, false).unwrap(), "Invalid email format");
    }

    #[test]
    fn json_flag_serializes_everything() {
        let text = Output::Text("abc".to_string());
        assert_eq!(render_output(&text, true).unwrap(), "\"abc\"");

        let registry = Registry::global();
        let rejected = registry.invoke("ip address validator", Operation::Validate, "x").unwrap();
        assert_eq!(
            render_output(&rejected, true).unwrap(),
            "{\n  \"valid\": false,\n  \"error\": \"Invalid IP address format\"\n}"
        );
    }

    #[test]
    fn jwt_renders_as_json() {
        let registry = Registry::global();
        let output = registry.invoke("jwt decoder", Operation::Decode, "e30.e30.").unwrap();
        assert_eq!(
            render_output(&output, false).unwrap(),
            "{\n  \"header\": {},\n  \"payload\": {}\n}"
        );
    }

    #[test]
    fn list_shows_converters_and_totals() {
        let registry = Registry::global();
        let found = registry.filter("base", None);
        let text = render_list(&found, &registry.category_counts(), false).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Base32  encoding  encode, decode  Convert"), "{}", lines[0]);
        assert!(lines[1].starts_with("Base64  encoding"), "{}", lines[1]);
        assert_eq!(
            lines.last().copied(),
            Some("all: 16  encoding: 7  format: 5  crypto: 2  miscellaneous: 2")
        );
    }

    #[test]
    fn empty_listing_says_so() {
        let registry = Registry::global();
        let text = render_list(&[], &registry.category_counts(), false).unwrap();
        assert!(text.starts_with("No converters found\n"));
    }

    #[test]
    fn list_as_json() {
        let registry = Registry::global();
        let found = registry.filter("", Some(Category::Crypto));
        let text = render_list(&found, &registry.category_counts(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["converters"][0]["name"], "JWT Decoder");
        assert_eq!(value["converters"][1]["operations"], serde_json::json!(["encode"]));
        assert_eq!(value["counts"][0], serde_json::json!({"category": "all", "count": 16}));
    }
}

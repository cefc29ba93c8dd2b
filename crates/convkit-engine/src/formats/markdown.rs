//! Markdown spacing clean-up.
//!
//! Four independent line rules: a space after a header's `#` run, after a list bullet,
//! after an ordered-list number, and a blank line before every header that does not
//! already follow one.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::output::Validation;

static HEADER_NO_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})([^#\s])").expect("header pattern is valid"));

static BULLET_NO_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([*+-])(\S)").expect("bullet pattern is valid"));

static ORDINAL_NO_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*\d+\.)(\S)").expect("ordinal pattern is valid"));

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s").expect("header pattern is valid"));

pub fn validate(input: &str) -> Validation {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Validation::invalid("Empty markdown input");
    }

    let lines: Vec<String> = trimmed
        .lines()
        .map(|line| {
            let headed = space_header(line);
            let bulleted = space_bullet(&headed);
            let numbered = space_ordinal(&bulleted);
            numbered.into_owned()
        })
        .collect();

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 && HEADER.is_match(line) && !lines[i - 1].trim().is_empty() {
            out.push("");
        }
        out.push(line);
    }

    Validation::formatted(out.join("\n"))
}

fn space_header(line: &str) -> Cow<'_, str> {
    HEADER_NO_SPACE.replace(line, "$1 $2")
}

/// `-item` becomes `- item`, but runs of the same marker (`---`, `**bold**`) are left
/// alone.
fn space_bullet(line: &str) -> Cow<'_, str> {
    BULLET_NO_SPACE.replace(line, |caps: &Captures| {
        let (indent, bullet, next) = (&caps[1], &caps[2], &caps[3]);
        if bullet == next {
            caps[0].to_string()
        } else {
            format!("{indent}{bullet} {next}")
        }
    })
}

fn space_ordinal(line: &str) -> Cow<'_, str> {
    ORDINAL_NO_SPACE.replace(line, "$1 $2")
}

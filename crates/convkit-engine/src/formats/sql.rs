//! Keyword-driven SQL layout.
//!
//! Not a parser: keywords are upper-cased by whole-word matching, whitespace is
//! collapsed, and then line breaks are placed before the major clauses and before
//! `AND` / `OR`.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::output::Validation;

const KEYWORDS: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "INNER JOIN",
    "GROUP BY",
    "ORDER BY",
    "HAVING",
    "LIMIT",
    "OFFSET",
    "INSERT INTO",
    "VALUES",
    "UPDATE",
    "SET",
    "DELETE",
    "CREATE TABLE",
    "ALTER TABLE",
    "DROP TABLE",
    "AND",
    "OR",
    "NOT",
    "IN",
    "BETWEEN",
    "LIKE",
    "IS NULL",
    "IS NOT NULL",
];

/// Any keyword, ASCII case-insensitive, with any whitespace run between the words of
/// a multi-word keyword. Longer keywords are tried first. Letters are spelled out as
/// `[Ss]` classes since `(?i)` would also fold `ſ` and `K` (Kelvin sign).
static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    let mut keywords = KEYWORDS.to_vec();
    keywords.sort_by_key(|k| std::cmp::Reverse(k.len()));

    let alternatives: Vec<String> = keywords
        .iter()
        .map(|k| {
            k.split(' ')
                .map(ascii_caseless)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();

    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
        .expect("keyword pattern is valid")
});

fn ascii_caseless(word: &str) -> String {
    word.chars()
        .map(|c| format!("[{}{}]", c.to_ascii_uppercase(), c.to_ascii_lowercase()))
        .collect()
}

static MAJOR_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(LEFT JOIN|RIGHT JOIN|INNER JOIN|GROUP BY|ORDER BY|SELECT|FROM|WHERE|HAVING|JOIN|LIMIT|OFFSET)\b",
    )
    .expect("clause pattern is valid")
});

static CONJUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(AND|OR)\b").expect("conjunction pattern is valid"));

pub fn validate(input: &str) -> Validation {
    if input.trim().is_empty() {
        return Validation::invalid("Empty SQL input");
    }

    let upper = KEYWORD.replace_all(input, |caps: &Captures| caps[0].to_uppercase());
    trace!(%upper, "sql keywords");

    let collapsed = upper.split_whitespace().collect::<Vec<_>>().join(" ");
    trace!(%collapsed, "sql whitespace");

    let clauses = MAJOR_CLAUSE.replace_all(&collapsed, "\n$1");
    let broken = CONJUNCTION.replace_all(&clauses, "\n  $1");

    let formatted = broken
        .trim()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    Validation::formatted(formatted)
}

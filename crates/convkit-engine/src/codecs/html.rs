//! HTML character references.
//!
//! Encoding escapes the five characters that are significant in HTML text and
//! attribute values. Decoding resolves a fixed table of named references plus decimal
//! and hexadecimal numeric references; anything it cannot resolve is kept verbatim.

use crate::error::CodecError;

/// Longest reference body (between `&` and `;`) worth looking at.
const MAX_REFERENCE_LEN: usize = 32;

const NAMED_REFERENCES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '©'),
    ("reg", '®'),
    ("trade", '™'),
    ("hellip", '…'),
    ("mdash", '—'),
    ("ndash", '–'),
    ("lsquo", '‘'),
    ("rsquo", '’'),
    ("ldquo", '“'),
    ("rdquo", '”'),
    ("laquo", '«'),
    ("raquo", '»'),
    ("cent", '¢'),
    ("pound", '£'),
    ("yen", '¥'),
    ("euro", '€'),
    ("sect", '§'),
    ("deg", '°'),
    ("plusmn", '±'),
    ("times", '×'),
    ("divide", '÷'),
    ("middot", '·'),
    ("para", '¶'),
    ("bull", '•'),
];

pub fn encode(input: &str) -> Result<String, CodecError> {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    Ok(out)
}

pub fn decode(input: &str) -> Result<String, CodecError> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        match resolve_reference(rest) {
            Some((c, consumed)) => {
                out.push(c);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Resolves the reference at the start of `text` (which begins with `&`). Returns the
/// character and the number of bytes consumed, including `&` and `;`.
fn resolve_reference(text: &str) -> Option<(char, usize)> {
    let body_end = text[1..]
        .char_indices()
        .take(MAX_REFERENCE_LEN + 1)
        .find(|(_, c)| *c == ';')
        .map(|(i, _)| i + 1)?;

    let body = &text[1..body_end];
    let c = match body.strip_prefix('#') {
        Some(numeric) => resolve_numeric(numeric)?,
        None => NAMED_REFERENCES
            .iter()
            .find(|(name, _)| *name == body)
            .map(|(_, c)| *c)?,
    };

    Some((c, body_end + 1))
}

fn resolve_numeric(numeric: &str) -> Option<char> {
    let (digits, radix) = match numeric.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (numeric, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let c = u32::from_str_radix(digits, radix)
        .ok()
        .filter(|value| *value != 0)
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER);

    Some(c)
}

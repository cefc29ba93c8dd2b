//! `\uXXXX` escapes for non-ASCII text.
//!
//! Escapes are UTF-16 code units, so characters outside the Basic Multilingual Plane
//! are written as a surrogate pair of escapes. ASCII passes through unchanged, except
//! a backslash that would otherwise read back as the start of an escape.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::CodecError;

/// A surrogate pair of escapes, or any single escape.
static ESCAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\\u([dD][89abAB][0-9a-fA-F]{2})\\u([dD][c-fC-F][0-9a-fA-F]{2})|\\u([0-9a-fA-F]{4})",
    )
    .expect("escape pattern is valid")
});

pub fn encode(input: &str) -> Result<String, CodecError> {
    let mut out = String::with_capacity(input.len());
    let mut units = [0u16; 2];

    for (i, c) in input.char_indices() {
        if c == '\\' && looks_like_escape(&input[i + 1..]) {
            out.push_str("\\u005c");
            continue;
        }

        if c.is_ascii() {
            out.push(c);
            continue;
        }

        for unit in c.encode_utf16(&mut units) {
            write!(&mut out, "\\u{unit:04x}").expect("writing to a String cannot fail");
        }
    }

    Ok(out)
}

/// Replaces well-formed escapes. Malformed escapes and unpaired surrogates are left as
/// literal text.
pub fn decode(input: &str) -> Result<String, CodecError> {
    let decoded = ESCAPE_REGEX.replace_all(input, |caps: &Captures| {
        let whole = &caps[0];

        let decoded = match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(high), Some(low), _) => {
                let units = [unit(high.as_str()), unit(low.as_str())];
                char::decode_utf16(units).next().and_then(Result::ok)
            }
            (_, _, Some(single)) => char::from_u32(u32::from(unit(single.as_str()))),
            _ => None,
        };

        match decoded {
            Some(c) => c.to_string(),
            None => whole.to_string(),
        }
    });

    Ok(decoded.into_owned())
}

/// True when `text` starts with `u` and four hex digits.
fn looks_like_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 5 && bytes[0] == b'u' && bytes[1..5].iter().all(u8::is_ascii_hexdigit)
}

fn unit(hex: &str) -> u16 {
    // The regex only captures exactly four hex digits
    u16::from_str_radix(hex, 16).unwrap_or(0)
}

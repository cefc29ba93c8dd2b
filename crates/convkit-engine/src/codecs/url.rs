//! Percent-encoding of URI components.
//!
//! Every character except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is written as the `%XX`
//! escapes of its UTF-8 bytes. A `+` is an ordinary character in both directions.

use crate::error::CodecError;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte)
}

pub fn encode(input: &str) -> Result<String, CodecError> {
    let mut out = String::with_capacity(input.len());

    for byte in input.bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX_UPPER[usize::from(byte >> 4)]));
            out.push(char::from(HEX_UPPER[usize::from(byte & 0x0f)]));
        }
    }

    Ok(out)
}

pub fn decode(input: &str) -> Result<String, CodecError> {
    let raw = input.as_bytes();
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        if raw[i] != b'%' {
            out.push(raw[i]);
            i += 1;
            continue;
        }

        let hi = raw.get(i + 1).copied().and_then(hex_value);
        let lo = raw.get(i + 2).copied().and_then(hex_value);

        match (hi, lo) {
            (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
            _ => {
                return Err(CodecError::MalformedPercentEscape {
                    position: input[..i].chars().count(),
                });
            }
        }
        i += 3;
    }

    String::from_utf8(out).map_err(|_| CodecError::InvalidUtf8)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        let unreserved = "AZaz09-_.!~*'()";
        assert_eq!(encode(unreserved).unwrap(), unreserved);
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            encode("a b&c=d/e?f#g+h").unwrap(),
            "a%20b%26c%3Dd%2Fe%3Ff%23g%2Bh"
        );
        assert_eq!(encode("100%").unwrap(), "100%25");
    }

    #[test]
    fn non_ascii_uses_utf8_bytes() {
        assert_eq!(encode("é").unwrap(), "%C3%A9");
        assert_eq!(encode("😀").unwrap(), "%F0%9F%98%80");
        assert_eq!(decode("%F0%9F%98%80").unwrap(), "😀");
    }

    #[test]
    fn decoding_accepts_lowercase_escapes_and_literal_text() {
        assert_eq!(decode("a%2fb").unwrap(), "a/b");
        assert_eq!(decode("caf%C3%A9 ok+").unwrap(), "café ok+");
        assert_eq!(decode("déjà").unwrap(), "déjà");
    }

    #[test]
    fn malformed_escapes_are_rejected() {
        assert_eq!(
            decode("abc%"),
            Err(CodecError::MalformedPercentEscape { position: 3 })
        );
        assert_eq!(
            decode("é%4"),
            Err(CodecError::MalformedPercentEscape { position: 1 })
        );
        assert_eq!(
            decode("%zz"),
            Err(CodecError::MalformedPercentEscape { position: 0 })
        );
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert_eq!(decode("%C3"), Err(CodecError::InvalidUtf8));
        assert_eq!(decode("%FF%FE"), Err(CodecError::InvalidUtf8));
    }

    #[test]
    fn empty_input() {
        assert_eq!(encode("").unwrap(), "");
        assert_eq!(decode("").unwrap(), "");
    }
}

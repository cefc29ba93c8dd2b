use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::error::CodecError;
use crate::util::{bytes_to_latin1, latin1_to_bytes};

/// Two lowercase hex digits per byte, no separator.
pub fn encode(input: &str) -> Result<String, CodecError> {
    let bytes = latin1_to_bytes(input)?;
    Ok(HEXLOWER.encode(&bytes))
}

/// Accepts upper and lower case digits. The input length must be even.
pub fn decode(input: &str) -> Result<String, CodecError> {
    let len = input.chars().count();
    if len % 2 != 0 {
        return Err(CodecError::OddHexLength(len));
    }

    let bytes = HEXLOWER_PERMISSIVE
        .decode(input.as_bytes())
        .map_err(|_| first_invalid_digit(input))?;

    Ok(bytes_to_latin1(&bytes))
}

fn first_invalid_digit(input: &str) -> CodecError {
    input
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .map(|(position, character)| CodecError::InvalidHexDigit { character, position })
        // Unreachable for inputs the decoder rejected
        .unwrap_or(CodecError::OddHexLength(input.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_lowercase_pairs() {
        assert_eq!(encode("AB").unwrap(), "4142");
        assert_eq!(encode("\n\u{ff}").unwrap(), "0aff");
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn decodes_either_case() {
        assert_eq!(decode("4142").unwrap(), "AB");
        assert_eq!(decode("0AFF").unwrap(), "\n\u{ff}");
        assert_eq!(decode("0aFf").unwrap(), "\n\u{ff}");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn odd_length_is_a_length_error() {
        let err = decode("414").unwrap_err();
        assert_eq!(err, CodecError::OddHexLength(3));
        assert!(err.to_string().contains("even length"));
    }

    #[test]
    fn non_hex_digit_is_reported_with_position() {
        assert_eq!(
            decode("41zz"),
            Err(CodecError::InvalidHexDigit {
                character: 'z',
                position: 2
            })
        );
    }

    #[test]
    fn multibyte_character_in_input() {
        // Two characters, four UTF-8 bytes.
        assert_eq!(
            decode("4é"),
            Err(CodecError::InvalidHexDigit {
                character: 'é',
                position: 1
            })
        );
        assert_eq!(
            decode("é4"),
            Err(CodecError::InvalidHexDigit {
                character: 'é',
                position: 0
            })
        );
    }

    #[test]
    fn wide_characters_cannot_be_encoded() {
        assert!(matches!(encode("☃"), Err(CodecError::NonLatin1 { .. })));
    }
}

//! Byte view of text for the byte-oriented codecs.
//!
//! Base64, Base32, hex and binary operate on bytes. Text is mapped to bytes one
//! character per byte, which is only possible for characters in the Latin-1 range
//! (`U+0000..=U+00FF`). Decoded bytes map back to the character with the same value,
//! so every decoded byte sequence is representable as text.

use crate::error::CodecError;

/// Converts `input` into one byte per character, failing on the first character above
/// `U+00FF`.
pub fn latin1_to_bytes(input: &str) -> Result<Vec<u8>, CodecError> {
    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(u32::from(character))
                .map_err(|_| CodecError::NonLatin1 { character, position })
        })
        .collect()
}

/// Maps each byte to the character with the same scalar value.
pub fn bytes_to_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_latin1_map_one_to_one() {
        assert_eq!(latin1_to_bytes("AB").unwrap(), vec![0x41, 0x42]);
        assert_eq!(latin1_to_bytes("é\u{ff}").unwrap(), vec![0xe9, 0xff]);
        assert_eq!(bytes_to_latin1(&[0x41, 0xe9, 0xff]), "Aé\u{ff}");
    }

    #[test]
    fn characters_above_latin1_are_rejected() {
        assert_eq!(
            latin1_to_bytes("ab€"),
            Err(CodecError::NonLatin1 {
                character: '€',
                position: 2
            })
        );
    }

    #[test]
    fn empty_input() {
        assert!(latin1_to_bytes("").unwrap().is_empty());
        assert_eq!(bytes_to_latin1(&[]), "");
    }
}

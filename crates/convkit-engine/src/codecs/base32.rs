//! RFC 4648 Base32 (`A-Z2-7`).
//!
//! Encoding pads the output to a multiple of 8 characters with `=`. Decoding is lenient
//! about case, trailing padding and leftover bits, but rejects any character outside
//! the alphabet.

use crate::error::CodecError;
use crate::util::{bytes_to_latin1, latin1_to_bytes};

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Encoded output length is always a multiple of this many characters.
const BLOCK_LEN: usize = 8;

pub fn encode(input: &str) -> Result<String, CodecError> {
    let bytes = latin1_to_bytes(input)?;
    let mut out = String::with_capacity(bytes.len().div_ceil(5) * BLOCK_LEN);

    // Never holds more than 12 significant bits.
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for byte in bytes {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;

        while bits >= 5 {
            out.push(symbol((buffer >> (bits - 5)) & 0x1f));
            bits -= 5;
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(symbol((buffer << (5 - bits)) & 0x1f));
    }

    let remainder = out.len() % BLOCK_LEN;
    if remainder != 0 {
        out.extend(std::iter::repeat_n('=', BLOCK_LEN - remainder));
    }

    Ok(out)
}

pub fn decode(input: &str) -> Result<String, CodecError> {
    let normalized = input.to_ascii_uppercase();
    let symbols = normalized.trim_end_matches('=');

    let mut out = Vec::with_capacity(symbols.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for (position, character) in symbols.chars().enumerate() {
        let value = value_of(character)
            .ok_or(CodecError::InvalidBase32Character { character, position })?;

        buffer = (buffer << 5) | value;
        bits += 5;

        if bits >= 8 {
            out.push(((buffer >> (bits - 8)) & 0xff) as u8);
            bits -= 8;
        }
        buffer &= (1 << bits) - 1;
    }

    Ok(bytes_to_latin1(&out))
}

fn symbol(index: u32) -> char {
    char::from(ALPHABET[index as usize])
}

fn value_of(character: char) -> Option<u32> {
    match character {
        'A'..='Z' => Some(u32::from(character) - u32::from('A')),
        '2'..='7' => Some(u32::from(character) - u32::from('2') + 26),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use data_encoding::BASE32;

    use super::*;

    #[test]
    fn rfc4648_vectors() {
        let vectors = [
            ("", ""),
            ("f", "MY======"),
            ("fo", "MZXQ===="),
            ("foo", "MZXW6==="),
            ("foob", "MZXW6YQ="),
            ("fooba", "MZXW6YTB"),
            ("foobar", "MZXW6YTBOI======"),
        ];

        for (plain, encoded) in vectors {
            assert_eq!(encode(plain).unwrap(), encoded, "encoding {plain:?}");
            assert_eq!(decode(encoded).unwrap(), plain, "decoding {encoded:?}");
        }
    }

    #[test]
    fn matches_reference_encoder_for_all_byte_values() {
        let all: Vec<u8> = (0..=255).collect();
        let text = bytes_to_latin1(&all);
        assert_eq!(encode(&text).unwrap(), BASE32.encode(&all));
    }

    #[test]
    fn decoding_ignores_case_and_missing_padding() {
        assert_eq!(decode("mzxw6ytboi").unwrap(), "foobar");
        assert_eq!(decode("MzXw6YtBoI======").unwrap(), "foobar");
    }

    #[test]
    fn leftover_bits_are_discarded() {
        // 'MZ' carries 10 bits: one full byte ('f') and two leftover bits.
        assert_eq!(decode("MZ").unwrap(), "f");
        assert_eq!(decode("M").unwrap(), "");
    }

    #[test]
    fn invalid_character_is_a_hard_error() {
        assert_eq!(
            decode("MZ1W6"),
            Err(CodecError::InvalidBase32Character {
                character: '1',
                position: 2
            })
        );
        assert_eq!(
            decode("MZ=W6"),
            Err(CodecError::InvalidBase32Character {
                character: '=',
                position: 2
            })
        );
    }

    #[test]
    fn wide_characters_are_rejected() {
        assert!(matches!(encode("ok€"), Err(CodecError::NonLatin1 { .. })));
        assert!(matches!(
            decode("MZé"),
            Err(CodecError::InvalidBase32Character { character: 'é', .. })
        ));
    }
}

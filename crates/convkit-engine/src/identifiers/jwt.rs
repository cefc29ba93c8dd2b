//! JSON Web Token inspection.
//!
//! Decodes the header and payload segments for display. The signature segment is
//! ignored and never verified.

use serde_json::Value;

use crate::codecs::base64::try_decode_any;
use crate::output::JwtDecoding;

#[derive(thiserror::Error, Debug)]
enum JwtError {
    #[error("Invalid JWT format")]
    Format,

    #[error("Invalid base64 in JWT {part}: {source}")]
    Base64 {
        part: &'static str,
        source: data_encoding::DecodeError,
    },

    #[error("Invalid JSON in JWT {part}: {source}")]
    Json {
        part: &'static str,
        source: serde_json::Error,
    },
}

pub fn decode(token: &str) -> JwtDecoding {
    match split_and_parse(token) {
        Ok((header, payload)) => JwtDecoding::decoded(header, payload),
        Err(e) => JwtDecoding::failed(e),
    }
}

fn split_and_parse(token: &str) -> Result<(Value, Value), JwtError> {
    let parts: Vec<&str> = token.split('.').collect();
    let [header, payload, _signature] = parts.as_slice() else {
        return Err(JwtError::Format);
    };

    Ok((parse_segment(header, "header")?, parse_segment(payload, "payload")?))
}

fn parse_segment(segment: &str, part: &'static str) -> Result<Value, JwtError> {
    let bytes = try_decode_any(segment).map_err(|source| JwtError::Base64 { part, source })?;
    serde_json::from_slice(&bytes).map_err(|source| JwtError::Json { part, source })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
        eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
        SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

    #[test]
    fn decodes_header_and_payload() {
        let result = decode(TOKEN);
        assert_eq!(result.error(), None);
        assert_eq!(result.header(), Some(&json!({"alg": "HS256", "typ": "JWT"})));
        assert_eq!(
            result.payload(),
            Some(&json!({"sub": "1234567890", "name": "John Doe", "iat": 1516239022}))
        );
    }

    #[test]
    fn padded_standard_alphabet_segments_are_accepted() {
        let result = decode("e30=.e30=.");
        assert_eq!(result.error(), None);
        assert_eq!(result.header(), Some(&json!({})));
    }

    #[test]
    fn wrong_number_of_parts() {
        for token in ["", "abc", "a.b", "a.b.c.d"] {
            let result = decode(token);
            assert_eq!(result.error(), Some("Invalid JWT format"), "{token:?}");
            assert_eq!(result.header(), None);
            assert_eq!(result.payload(), None);
        }
    }

    #[test]
    fn bad_base64_names_the_part() {
        let header = decode("!!!.e30.sig");
        assert!(header.error().unwrap().starts_with("Invalid base64 in JWT header: "));

        let payload = decode("e30.!!!.sig");
        assert!(payload.error().unwrap().starts_with("Invalid base64 in JWT payload: "));
        assert_eq!(payload.header(), None);
    }

    #[test]
    fn bad_json_names_the_part() {
        let result = decode("e30.bm90IGpzb24.sig");
        assert!(
            result.error().unwrap().starts_with("Invalid JSON in JWT payload: "),
            "{:?}",
            result.error()
        );
        assert_eq!(result.header(), None);
        assert_eq!(result.payload(), None);
    }
}

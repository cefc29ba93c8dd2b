//! RFC 4648 Base64 with the standard alphabet and `=` padding

use data_encoding::{BASE64, BASE64_NOPAD, BASE64URL, BASE64URL_NOPAD, DecodeError};

use crate::error::CodecError;
use crate::util::{bytes_to_latin1, latin1_to_bytes};

pub fn encode(input: &str) -> Result<String, CodecError> {
    let bytes = latin1_to_bytes(input)?;
    Ok(BASE64.encode(&bytes))
}

/// Strict decoding: padding must be present and correct.
pub fn decode(input: &str) -> Result<String, CodecError> {
    let bytes = BASE64.decode(input.as_bytes())?;
    Ok(bytes_to_latin1(&bytes))
}

/// Attempt to decode `encoded_value` into a `Vec<u8>` using the URL-safe and standard
/// alphabets, with and without padding, until one succeeds.
pub fn try_decode_any(encoded_value: &str) -> Result<Vec<u8>, DecodeError> {
    let value = BASE64URL_NOPAD
        .decode(encoded_value.as_bytes())
        .or_else(|_| BASE64URL.decode(encoded_value.as_bytes()))
        .or_else(|_| BASE64.decode(encoded_value.as_bytes()))
        .or_else(|_| BASE64_NOPAD.decode(encoded_value.as_bytes()))?;

    Ok(value)
}

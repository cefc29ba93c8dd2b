use crate::error::CodecError;
use crate::util::{bytes_to_latin1, latin1_to_bytes};

/// Each byte as 8 binary digits, separated by single spaces.
pub fn encode(input: &str) -> Result<String, CodecError> {
    let bytes = latin1_to_bytes(input)?;

    let groups: Vec<String> = bytes.iter().map(|byte| format!("{byte:08b}")).collect();
    Ok(groups.join(" "))
}

/// Splits on any whitespace and parses each token as one base-2 byte.
pub fn decode(input: &str) -> Result<String, CodecError> {
    let bytes = input
        .split_whitespace()
        .map(parse_byte)
        .collect::<Result<Vec<u8>, CodecError>>()?;

    Ok(bytes_to_latin1(&bytes))
}

fn parse_byte(token: &str) -> Result<u8, CodecError> {
    // from_str_radix would also accept a leading '+'
    if !token.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CodecError::InvalidBinaryToken(token.to_string()));
    }

    u8::from_str_radix(token, 2).map_err(|_| CodecError::InvalidBinaryToken(token.to_string()))
}

use thiserror::Error;

use crate::registry::Operation;

/// Failures of the simple string codecs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("character {character:?} at position {position} is outside the Latin-1 range")]
    NonLatin1 { character: char, position: usize },

    #[error("invalid Base64: {0}")]
    Base64(data_encoding::DecodeError),

    #[error("Invalid Base32 character: {character:?} at position {position}")]
    InvalidBase32Character { character: char, position: usize },

    #[error("Hex string must have an even length: {0} characters")]
    OddHexLength(usize),

    #[error("invalid hex digit {character:?} at position {position}")]
    InvalidHexDigit { character: char, position: usize },

    #[error("invalid binary byte: '{0}'")]
    InvalidBinaryToken(String),

    #[error("malformed percent escape at position {position}")]
    MalformedPercentEscape { position: usize },

    #[error("percent-decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

impl From<data_encoding::DecodeError> for CodecError {
    fn from(err: data_encoding::DecodeError) -> Self {
        CodecError::Base64(err)
    }
}

/// Errors raised by the caller-facing dispatch layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown converter: '{0}'")]
    UnknownConverter(String),

    #[error("unknown operation: '{0}' (expected encode, decode or validate)")]
    UnknownOperation(String),

    #[error("unknown category: '{0}' (expected encoding, format, crypto or misc)")]
    UnknownCategory(String),

    #[error("{} not supported for the {converter} converter", operation.noun())]
    NotSupported {
        converter: String,
        operation: Operation,
    },

    #[error("{0}")]
    Codec(#[from] CodecError),
}

//! Reversible mappings between text and an alternate textual representation.
//!
//! Every codec exposes `encode` and `decode` functions of the form
//! `fn(&str) -> Result<String, CodecError>`, and maps the empty string to the empty
//! string in both directions.

pub mod base32;
pub mod base64;
pub mod binary;
pub mod hex;
pub mod html;
pub mod unicode;
pub mod url;

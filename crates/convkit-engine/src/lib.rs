// The engine crate uses only safe Rust.
#![forbid(unsafe_code)]

//! Stateless transformations for common developer data formats.
//!
//! Every operation maps an input string to an [`Output`]. Simple codecs return
//! `Err(CodecError)` on malformed input, while validators and the JWT decoder always
//! succeed and embed failures in the result they return. The [`Registry`] exposes all
//! operations through a uniform encode/decode/validate contract.

pub mod codecs;
pub mod error;
pub mod formats;
pub mod identifiers;
pub mod output;
pub mod registry;
pub mod util;

// Re-export commonly used types
pub use error::{CodecError, Error};
pub use output::{JwtDecoding, Output, Validation};
pub use registry::{Category, Descriptor, Operation, Registry};
pub use util::RandomSource;

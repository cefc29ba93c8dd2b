//! Library half of the `convkit` command: argument definitions, input handling and
//! result rendering. The binary in main.rs only wires these together.

#![forbid(unsafe_code)]

pub mod args;
pub mod input;
pub mod render;

pub use render::{EXIT_ERROR, EXIT_INVALID, EXIT_OK};

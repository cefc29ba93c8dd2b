mod latin1;
mod random;

pub use latin1::{bytes_to_latin1, latin1_to_bytes};
pub use random::RandomSource;

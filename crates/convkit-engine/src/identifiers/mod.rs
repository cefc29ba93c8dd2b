//! Identifier generators and validators: UUIDs, email and IP addresses, JWTs.

pub mod email;
pub mod ip;
pub mod jwt;
pub mod uuid;

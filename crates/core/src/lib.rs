//! Domain core for the fighter records service.
//!
//! Pure types, error definitions and normalization rules. Nothing in this
//! crate touches the database or the network.

pub mod error;
pub mod fighter;
pub mod stance;
pub mod types;

//! Cryptographic primitives shared across the workspace

pub mod hash;

pub use hash::{Hash256, Hash256Data, HashParseError};

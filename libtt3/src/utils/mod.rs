//! Small helpers shared across the crate.

/// Hex display
pub mod hex;

pub use hex::*;

// libtt3/src/lib.rs

//! libtt3
//!
//! NFC Forum Type 3 Tag support: reader-side block and NDEF access plus
//! card emulation, over any transport that moves raw Type 3 frames.
#![warn(missing_docs)]

/// Command codes, service codes and status values
pub mod constants;
/// Card emulation: answer reader commands from registered services
pub mod emulation;
/// Crate error type
pub mod error;
/// NDEF attribute block and message access
pub mod ndef;
/// Common re-exports
pub mod prelude;
/// Frames, command encoders and response decoders
pub mod protocol;
/// Reader-side tag handle and block operations
pub mod tag;
/// Canned frames and an in-memory tag for tests
pub mod test_support;
/// Frame transport traits and the mock
pub mod transport;
/// Protocol newtypes
pub mod types;
/// Hex formatting helpers
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

// libtt3/src/protocol/mod.rs

/// Attribute block checksum
pub mod checksum;
/// Command and response framing
pub mod codec;
/// Command model and encoders
pub mod commands;
/// Length-prefixed frames
pub mod frame;
/// Bounds-checked field access
pub mod parser;
/// Response model and decoders
pub mod responses;

pub use checksum::sum16;
pub use commands::*;
pub use frame::Frame;
pub use responses::*;

// libtt3/src/transport/mod.rs

/// Recording mock transport
pub mod mock;
/// Reader and emulation transport traits
pub mod traits;

pub use mock::MockTransport;
pub use traits::{TargetTransport, Transport};

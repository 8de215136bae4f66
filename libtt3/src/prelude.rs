// libtt3/src/prelude.rs

pub use crate::emulation::{BlockRead, BlockWrite, Type3TagEmulation};
pub use crate::ndef::{AttributeBlock, Ndef, Version};
pub use crate::protocol::{Command, Response};
pub use crate::tag::{Timing, TimingParameters, Type3Tag, Type3TagBuilder};
pub use crate::transport::{TargetTransport, Transport};
pub use crate::{
    BlockAddress, BlockData, Error, Idm, Pmm, Result, ServiceCode, SystemCode,
};

// Re-export small utilities for convenience
pub use crate::utils::{Hex, bytes_to_hex_spaced};

/// Presence check
pub mod presence;
/// Block reads
pub mod read;
/// Block writes
pub mod write;

// Re-export commonly used functions at the operations root so callers
// can use `crate::tag::operations::read_blocks(...)`.
pub use presence::is_present;
pub use read::{read_blocks, read_chunked};
pub use write::{write_blocks, write_chunked};

use log::trace;

use crate::protocol::codec;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::utils::Hex;
use crate::{Error, Result};

/// Send one command frame and decode the tag's answer to it.
pub(crate) fn execute<T: Transport + ?Sized>(
    transport: &mut T,
    cmd: &Command,
    timeout_ms: u64,
) -> Result<Response> {
    let frame = codec::encode_command_frame(cmd)?;
    trace!(">>> {}", Hex(&frame));
    let raw = transport.exchange(&frame, timeout_ms)?;
    trace!("<<< {}", Hex(&raw));
    codec::decode_response_frame(cmd, &raw)
}

/// Per-transaction block limit check shared by the chunked transfers.
pub(crate) fn ensure_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(Error::UnsupportedOperation(
            "tag allows zero blocks per transaction".into(),
        ));
    }
    Ok(())
}

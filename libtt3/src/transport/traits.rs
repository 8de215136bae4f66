// libtt3/src/transport/traits.rs

use crate::Result;

/// Reader-side transport. Implementations move raw Type 3 frames (length
/// byte included) to and from a contactless front end; polling,
/// anticollision and RF handling live behind this trait.
pub trait Transport {
    /// Hand a command frame to the front end. An `Err` means the frame was
    /// never transmitted.
    fn send_command(&mut self, frame: &[u8]) -> Result<()>;

    /// Wait up to `timeout_ms` for the tag's response frame. Returns
    /// `Error::Timeout` when nothing arrived in time.
    fn receive_response(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Send a command and wait for its response.
    fn exchange(&mut self, frame: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        self.send_command(frame)?;
        self.receive_response(timeout_ms)
    }
}

/// Card-emulation transport: the front end acts as the tag and the
/// remote reader issues commands.
pub trait TargetTransport {
    /// Wait up to `timeout_ms` for a command frame from the reader.
    /// `Ok(None)` means no command arrived in time.
    fn wait_command(&mut self, timeout_ms: u64) -> Result<Option<Vec<u8>>>;

    /// Transmit a response frame to the reader.
    fn send_response(&mut self, frame: &[u8]) -> Result<()>;
}

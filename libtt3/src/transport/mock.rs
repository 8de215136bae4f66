// libtt3/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::{TargetTransport, Transport};
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns
/// queued ones, for both the reader and the emulation direction.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Command frames handed to `send_command`, in order
    pub sent: Vec<Vec<u8>>,
    /// Response frames returned by `receive_response`
    pub responses: VecDeque<Vec<u8>>,
    /// Timeout passed to each `receive_response` call
    pub timeouts: Vec<u64>,
    /// Command frames returned by `wait_command`
    pub commands: VecDeque<Vec<u8>>,
    /// Response frames handed to `send_response`
    pub responses_sent: Vec<Vec<u8>>,
    /// Testing hook: number of send_command calls that should fail
    pub send_failures: usize,
    /// Testing hook: number of receive_response calls that time out
    /// before queued responses are served
    pub receive_timeouts: usize,
}

impl MockTransport {
    /// Mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent send_command calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Set how many subsequent receive_response calls should time out.
    pub fn set_receive_timeouts(&mut self, n: usize) {
        self.receive_timeouts = n;
    }

    /// Queue a frame for `receive_response`.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Queue a frame for `wait_command`.
    pub fn push_command(&mut self, cmd: Vec<u8>) {
        self.commands.push_back(cmd);
    }

    /// Total number of transport calls made in the reader direction.
    pub fn call_count(&self) -> usize {
        self.sent.len() + self.timeouts.len()
    }
}

impl Transport for MockTransport {
    fn send_command(&mut self, frame: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Transport("simulated send failure".into()));
        }
        self.sent.push(frame.to_vec());
        Ok(())
    }

    fn receive_response(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.timeouts.push(timeout_ms);
        if self.receive_timeouts > 0 {
            self.receive_timeouts -= 1;
            return Err(Error::Timeout);
        }
        self.responses.pop_front().ok_or(Error::Timeout)
    }
}

impl TargetTransport for MockTransport {
    fn wait_command(&mut self, _timeout_ms: u64) -> Result<Option<Vec<u8>>> {
        Ok(self.commands.pop_front())
    }

    fn send_response(&mut self, frame: &[u8]) -> Result<()> {
        self.responses_sent.push(frame.to_vec());
        Ok(())
    }
}

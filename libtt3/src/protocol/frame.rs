// libtt3/src/protocol/frame.rs

use crate::constants::MAX_FRAME_LEN;
use crate::{Error, Result};

/// Type 3 Tag frame helper.
/// Format: [Len(1)] [Code(1)] [Params(n)]
/// The length byte counts the whole frame including itself.
pub struct Frame;

impl Frame {
    /// Prefix a payload (command or response code + params) with its
    /// length byte.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() + 1 > MAX_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_FRAME_LEN,
                actual: payload.len() + 1,
            });
        }

        let mut out = Vec::with_capacity(payload.len() + 1);
        out.push((payload.len() + 1) as u8);
        out.extend_from_slice(payload);
        Ok(out)
    }

    /// Check the length byte against the actual frame length and return
    /// the payload that follows it.
    pub fn decode(frame: &[u8]) -> Result<&[u8]> {
        let len = *frame.first().ok_or(Error::InvalidLength {
            expected: 1,
            actual: 0,
        })? as usize;

        if len != frame.len() {
            return Err(Error::FrameFormat(format!(
                "length byte {} does not match frame length {}",
                len,
                frame.len()
            )));
        }

        Ok(&frame[1..])
    }

    /// True if the leading length byte equals the frame length.
    pub fn is_well_formed(frame: &[u8]) -> bool {
        Self::decode(frame).is_ok()
    }
}

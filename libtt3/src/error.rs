// libtt3/src/error.rs

use thiserror::Error;

/// Common error type for reader-side Type 3 Tag operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The transport could not move a frame
    #[error("transport error: {0}")]
    Transport(String),

    /// No response within the timeout
    #[error("operation timed out")]
    Timeout,

    #[error("invalid packet length: expected {expected}, got {actual}")]
    /// A frame or field had the wrong size
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length found
        actual: usize,
    },

    /// Malformed frame or parameters
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// The response code does not answer the command sent
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Command code + 1
        expected: u8,
        /// Code carried by the response
        actual: u8,
    },

    /// The response came from another tag
    #[error("response IDm does not match the addressed tag")]
    IdmMismatch,

    /// Non-zero status flags in a read or write answer
    #[error("felica error: status=({status1:#04x}, {status2:#04x})")]
    FelicaStatus {
        /// Status flag 1
        status1: u8,
        /// Status flag 2
        status2: u8,
    },

    /// NDEF attribute block checksum mismatch
    #[error("attribute block checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    AttributeChecksum {
        /// Checksum stored in bytes 14..16
        expected: u16,
        /// Sum of bytes 0..14
        actual: u16,
    },

    /// The attribute block forbids writing
    #[error("tag writing disabled")]
    NotWriteable,

    /// The message does not fit the NDEF data area
    #[error("ndef message of {length} bytes beyond tag capacity of {capacity} bytes")]
    CapacityExceeded {
        /// Message length
        length: usize,
        /// Data area size in bytes
        capacity: usize,
    },

    /// Block data does not match the block list
    #[error("invalid data length for given number of blocks: expected {expected}, got {actual}")]
    InvalidDataLength {
        /// 16 bytes per listed block
        expected: usize,
        /// Bytes supplied
        actual: usize,
    },

    /// The tag was not activated with the NDEF system code
    #[error("tag does not carry an ndef system code")]
    NoNdef,

    /// Request that cannot be expressed on the wire
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// No response, or the frame could not be handed to the transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }

    /// The tag answered, but the answer was not a well-formed response to
    /// the command that was sent.
    pub fn is_framing(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. }
                | Self::FrameFormat(_)
                | Self::UnexpectedResponse { .. }
                | Self::IdmMismatch
        )
    }

    /// Rejected before any transport traffic.
    pub fn is_policy(&self) -> bool {
        matches!(self, Self::NotWriteable | Self::CapacityExceeded { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

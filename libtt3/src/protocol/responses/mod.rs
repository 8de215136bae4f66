// libtt3/src/protocol/responses/mod.rs

/// Polling answer
pub mod polling;
/// ReadWithoutEncryption answer
pub mod read;
/// RequestResponse answer
pub mod request;
/// RequestSystemCode answer
pub mod system;
/// WriteWithoutEncryption answer
pub mod write;

pub use polling::decode_polling;
pub use read::decode_read;
pub use request::decode_request_response;
pub use system::decode_request_system_code;
pub use write::decode_write;

use crate::constants::{
    CMD_POLLING, CMD_READ_WITHOUT_ENCRYPTION, CMD_REQUEST_RESPONSE, CMD_REQUEST_SYSTEM_CODE,
    CMD_WRITE_WITHOUT_ENCRYPTION,
};
use crate::types::{Idm, Pmm, SystemCode};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Polling answer.
    Polling {
        /// Answering tag
        idm: Idm,
        /// Manufacturer parameters including the timing bytes
        pmm: Pmm,
        /// Present when the request code asked for it
        system_code: Option<SystemCode>,
    },
    /// Current mode of the tag.
    RequestResponse {
        /// Answering tag
        idm: Idm,
        /// Mode byte, 0 after activation
        mode: u8,
    },
    /// Block data of all requested blocks, 16 bytes each, in request order.
    ReadWithoutEncryption {
        /// Answering tag
        idm: Idm,
        /// Concatenated block contents
        data: Vec<u8>,
    },
    /// Write accepted with zero status flags.
    WriteWithoutEncryption {
        /// Answering tag
        idm: Idm,
    },
    /// Systems the tag carries.
    RequestSystemCode {
        /// Answering tag
        idm: Idm,
        /// In tag order
        system_codes: Vec<SystemCode>,
    },
}

impl Response {
    /// Decode a response payload (response code + params, no length byte)
    /// for the given command code.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        // Check the response code once here so decoders never index an
        // empty slice.
        crate::protocol::parser::ensure_len(data, 1)?;
        let expected_response = expected_cmd.wrapping_add(1);
        crate::protocol::parser::expect_response_code(data, expected_response)?;

        match expected_cmd {
            CMD_POLLING => {
                let (idm, pmm, system_code) = decode_polling(data)?;
                Ok(Self::Polling {
                    idm,
                    pmm,
                    system_code,
                })
            }
            CMD_REQUEST_RESPONSE => {
                let (idm, mode) = decode_request_response(data)?;
                Ok(Self::RequestResponse { idm, mode })
            }
            CMD_READ_WITHOUT_ENCRYPTION => {
                let (idm, data) = decode_read(data)?;
                Ok(Self::ReadWithoutEncryption { idm, data })
            }
            CMD_WRITE_WITHOUT_ENCRYPTION => {
                let idm = decode_write(data)?;
                Ok(Self::WriteWithoutEncryption { idm })
            }
            CMD_REQUEST_SYSTEM_CODE => {
                let (idm, system_codes) = decode_request_system_code(data)?;
                Ok(Self::RequestSystemCode { idm, system_codes })
            }
            _ => Err(crate::Error::UnexpectedResponse {
                expected: expected_response,
                actual: data[0],
            }),
        }
    }

    /// Return the response code byte associated with this response variant.
    pub fn response_code(&self) -> u8 {
        match self {
            Response::Polling { .. } => 0x01,
            Response::RequestResponse { .. } => 0x05,
            Response::ReadWithoutEncryption { .. } => 0x07,
            Response::WriteWithoutEncryption { .. } => 0x09,
            Response::RequestSystemCode { .. } => 0x0D,
        }
    }

    /// IDm of the answering tag.
    pub fn idm(&self) -> &Idm {
        match self {
            Response::Polling { idm, .. }
            | Response::RequestResponse { idm, .. }
            | Response::ReadWithoutEncryption { idm, .. }
            | Response::WriteWithoutEncryption { idm }
            | Response::RequestSystemCode { idm, .. } => idm,
        }
    }
}

// libtt3/src/protocol/commands/mod.rs

/// Polling
pub mod polling;
/// ReadWithoutEncryption
pub mod read;
/// RequestResponse and RequestSystemCode
pub mod request;
/// WriteWithoutEncryption
pub mod write;

pub use polling::encode_polling;
pub use read::encode_read;
pub use request::{encode_request_response, encode_request_system_code};
pub use write::encode_write;

use crate::constants::{
    CMD_POLLING, CMD_READ_WITHOUT_ENCRYPTION, CMD_REQUEST_RESPONSE, CMD_REQUEST_SYSTEM_CODE,
    CMD_WRITE_WITHOUT_ENCRYPTION,
};
use crate::types::{BlockAddress, Idm, ServiceCode, SystemCode};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Discover tags of a system.
    Polling {
        /// System to poll, `SystemCode::ANY` for all
        system_code: SystemCode,
        /// 1 asks tags to append their system code
        request_code: u8,
        /// Number of response slots minus one
        time_slot: u8,
    },
    /// Ask for the current mode.
    RequestResponse {
        /// Addressed tag
        idm: Idm,
    },
    /// Read blocks of unencrypted services.
    ReadWithoutEncryption {
        /// Addressed tag
        idm: Idm,
        /// Service list the block addresses index into
        services: Vec<ServiceCode>,
        /// Blocks to read, in response order
        blocks: Vec<BlockAddress>,
    },
    /// `data` holds 16 bytes per entry of `blocks`, in block list order.
    WriteWithoutEncryption {
        /// Addressed tag
        idm: Idm,
        /// Service list the block addresses index into
        services: Vec<ServiceCode>,
        /// Blocks to write
        blocks: Vec<BlockAddress>,
        /// Block data
        data: Vec<u8>,
    },
    /// Ask for the systems the tag carries.
    RequestSystemCode {
        /// Addressed tag
        idm: Idm,
    },
}

impl Command {
    /// Return the command code as defined by the Type 3 Tag command set.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Polling { .. } => CMD_POLLING,
            Self::RequestResponse { .. } => CMD_REQUEST_RESPONSE,
            Self::ReadWithoutEncryption { .. } => CMD_READ_WITHOUT_ENCRYPTION,
            Self::WriteWithoutEncryption { .. } => CMD_WRITE_WITHOUT_ENCRYPTION,
            Self::RequestSystemCode { .. } => CMD_REQUEST_SYSTEM_CODE,
        }
    }

    /// The response code a well-behaved tag answers with.
    pub fn response_code(&self) -> u8 {
        self.command_code() + 1
    }

    /// Every command except Polling addresses one tag by IDm.
    pub fn idm(&self) -> Option<&Idm> {
        match self {
            Self::Polling { .. } => None,
            Self::RequestResponse { idm }
            | Self::ReadWithoutEncryption { idm, .. }
            | Self::WriteWithoutEncryption { idm, .. }
            | Self::RequestSystemCode { idm } => Some(idm),
        }
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Polling {
                system_code,
                request_code,
                time_slot,
            } => encode_polling(*system_code, *request_code, *time_slot),
            Self::RequestResponse { idm } => encode_request_response(*idm),
            Self::ReadWithoutEncryption {
                idm,
                services,
                blocks,
            } => encode_read(*idm, &services[..], &blocks[..]),
            Self::WriteWithoutEncryption {
                idm,
                services,
                blocks,
                data,
            } => encode_write(*idm, &services[..], &blocks[..], &data[..]),
            Self::RequestSystemCode { idm } => encode_request_system_code(*idm),
        }
    }
}

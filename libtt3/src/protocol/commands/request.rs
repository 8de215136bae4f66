// libtt3/src/protocol/commands/request.rs

use crate::constants::{CMD_REQUEST_RESPONSE, CMD_REQUEST_SYSTEM_CODE};
use crate::types::Idm;

/// Encode RequestResponse command (command code 0x04)
/// Layout: command_code(1) + idm(8)
pub fn encode_request_response(idm: Idm) -> Vec<u8> {
    let mut buf = Vec::with_capacity(9);
    buf.push(CMD_REQUEST_RESPONSE);
    buf.extend_from_slice(idm.as_bytes());
    buf
}

/// Encode RequestSystemCode command (command code 0x0C)
/// Layout: command_code(1) + idm(8)
pub fn encode_request_system_code(idm: Idm) -> Vec<u8> {
    let mut buf = Vec::with_capacity(9);
    buf.push(CMD_REQUEST_SYSTEM_CODE);
    buf.extend_from_slice(idm.as_bytes());
    buf
}

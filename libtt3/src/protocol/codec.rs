// libtt3/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::parser;
use super::responses::Response;

/// Encode a Command into a length-prefixed wire frame.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(&cmd.encode())
}

/// Decode a length-prefixed response frame to `cmd`.
///
/// Checks run in wire order: length byte, response code (command + 1),
/// echoed IDm for addressed commands, then the command-specific status
/// and parameters.
pub fn decode_response_frame(cmd: &Command, frame: &[u8]) -> Result<Response> {
    let payload = Frame::decode(frame)?;
    parser::expect_response_code(payload, cmd.response_code())?;
    if let Some(idm) = cmd.idm() {
        parser::expect_idm(payload, 1, idm)?;
    }
    Response::decode(cmd.command_code(), payload)
}

// libtt3/src/protocol/responses/request.rs

use crate::protocol::parser;
use crate::types::Idm;
use crate::Result;

/// Decode RequestResponse response payload (response code = 0x05)
/// Layout: response_code(1) + idm(8) + mode(1)
pub fn decode_request_response(data: &[u8]) -> Result<(Idm, u8)> {
    parser::ensure_len(data, 1 + 8 + 1)?;
    parser::expect_response_code(data, 0x05)?;

    let idm = parser::idm_at(data, 1)?;
    let mode = parser::byte_at(data, 9)?;
    Ok((idm, mode))
}

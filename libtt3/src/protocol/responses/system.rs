// libtt3/src/protocol/responses/system.rs

use crate::protocol::parser;
use crate::types::{Idm, SystemCode};
use crate::Result;

/// Decode RequestSystemCode response payload (response code = 0x0D)
/// Layout: response_code(1) + idm(8) + count(1) + system_codes(N*2, big-endian)
pub fn decode_request_system_code(data: &[u8]) -> Result<(Idm, Vec<SystemCode>)> {
    const MIN_LEN: usize = 1 + 8 + 1; // 10
    parser::ensure_len(data, MIN_LEN)?;
    parser::expect_response_code(data, 0x0D)?;

    let idm = parser::idm_at(data, 1)?;
    let count = parser::byte_at(data, 9)? as usize;
    let list = parser::slice_at(data, 10, count * 2)?;

    let codes = list
        .chunks_exact(2)
        .map(|c| SystemCode::from_be_bytes([c[0], c[1]]))
        .collect();

    Ok((idm, codes))
}

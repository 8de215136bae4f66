// libtt3/src/protocol/responses/polling.rs

use crate::protocol::parser;
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// Decode a Polling response payload (response code = 0x01)
/// Layout: response_code(1) + idm(8) + pmm(8) [+ system_code(2)]
///
/// The system code is only present when the poll asked for it
/// (request code 1).
pub fn decode_polling(data: &[u8]) -> Result<(Idm, Pmm, Option<SystemCode>)> {
    const MIN_LEN: usize = 1 + 8 + 8; // 17
    parser::ensure_len(data, MIN_LEN)?;
    parser::expect_response_code(data, 0x01)?;

    let idm = parser::idm_at(data, 1)?;
    let pmm = parser::pmm_at(data, 9)?;
    let sys = match parser::slice_at(data, 17, 2) {
        Ok(s) => Some(SystemCode::from_be_bytes([s[0], s[1]])),
        Err(_) => None,
    };

    Ok((idm, pmm, sys))
}

// libtt3/src/protocol/responses/write.rs

use crate::protocol::parser;
use crate::types::Idm;
use crate::{Error, Result};

/// Decode WriteWithoutEncryption response (response code = 0x09).
/// Layout: response_code(1) + idm(8) + status1(1) + status2(1)
pub fn decode_write(data: &[u8]) -> Result<Idm> {
    const LEN: usize = 1 + 8 + 2;
    parser::ensure_len(data, LEN)?;
    parser::expect_response_code(data, 0x09)?;

    let idm = parser::idm_at(data, 1)?;
    let status1 = parser::byte_at(data, 9)?;
    let status2 = parser::byte_at(data, 10)?;
    if status1 != 0 || status2 != 0 {
        return Err(Error::FelicaStatus { status1, status2 });
    }

    Ok(idm)
}

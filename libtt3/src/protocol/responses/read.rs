// libtt3/src/protocol/responses/read.rs

use crate::constants::BLOCK_SIZE;
use crate::protocol::parser;
use crate::types::Idm;
use crate::{Error, Result};

/// Decode ReadWithoutEncryption response payload (response code = 0x07)
/// Layout: response_code(1) + idm(8) + status1(1) + status2(1) + block_count(1) + blocks(N*16)
///
/// A tag reporting an error stops after the status bytes, so the status is
/// checked before the block count is required.
pub fn decode_read(data: &[u8]) -> Result<(Idm, Vec<u8>)> {
    const STATUS_LEN: usize = 1 + 8 + 2; // 11
    parser::ensure_len(data, STATUS_LEN)?;
    parser::expect_response_code(data, 0x07)?;

    let idm = parser::idm_at(data, 1)?;
    let status1 = parser::byte_at(data, 9)?;
    let status2 = parser::byte_at(data, 10)?;

    if status1 != 0 || status2 != 0 {
        return Err(Error::FelicaStatus { status1, status2 });
    }

    let block_count = parser::byte_at(data, 11)? as usize;
    let expected = STATUS_LEN + 1 + block_count * BLOCK_SIZE;
    if data.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: data.len(),
        });
    }

    Ok((idm, data[12..].to_vec()))
}

// libtt3/src/protocol/commands/write.rs

use crate::constants::CMD_WRITE_WITHOUT_ENCRYPTION;
use crate::types::{BlockAddress, Idm, ServiceCode};

/// Append the service list and block list shared by the read and write
/// commands.
pub(crate) fn encode_lists(buf: &mut Vec<u8>, services: &[ServiceCode], blocks: &[BlockAddress]) {
    buf.push(services.len() as u8);
    for svc in services {
        buf.extend_from_slice(&svc.to_le_bytes());
    }

    buf.push(blocks.len() as u8);
    for blk in blocks {
        blk.encode_into(buf);
    }
}

/// Encode WriteWithoutEncryption command payload (command code 0x08)
/// Layout: command_code(1) + idm(8) + service_count(1) + service_code_list(2*N)
///         + block_count(1) + block_list(2 or 3 bytes per block) + block_data(16*M)
///
/// `data` is appended as-is; the caller checks it against the block count.
pub fn encode_write(
    idm: Idm,
    services: &[ServiceCode],
    blocks: &[BlockAddress],
    data: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(11 + services.len() * 2 + blocks.len() * 3 + data.len());
    buf.push(CMD_WRITE_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    encode_lists(&mut buf, services, blocks);
    buf.extend_from_slice(data);
    buf
}

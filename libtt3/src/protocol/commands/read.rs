// libtt3/src/protocol/commands/read.rs

use crate::constants::CMD_READ_WITHOUT_ENCRYPTION;
use crate::types::{BlockAddress, Idm, ServiceCode};

/// Encode ReadWithoutEncryption command payload (command code 0x06)
/// Layout: command_code(1) + idm(8) + service_count(1) + service_code_list(2*N)
///         + block_count(1) + block_list(2 or 3 bytes per block)
pub fn encode_read(idm: Idm, services: &[ServiceCode], blocks: &[BlockAddress]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(11 + services.len() * 2 + blocks.len() * 3);
    buf.push(CMD_READ_WITHOUT_ENCRYPTION);
    buf.extend_from_slice(idm.as_bytes());
    super::write::encode_lists(&mut buf, services, blocks);
    buf
}

use log::debug;

use crate::constants::BLOCK_SIZE;
use crate::protocol::{Command, Response};
use crate::tag::Type3Tag;
use crate::transport::Transport;
use crate::types::{BlockAddress, ServiceCode};
use crate::{Error, Result};

/// Read blocks from one service using a single ReadWithoutEncryption
/// command. Returns `16 * block_numbers.len()` bytes in request order.
pub fn read_blocks<T: Transport + ?Sized>(
    tag: &Type3Tag,
    transport: &mut T,
    service: ServiceCode,
    block_numbers: &[u16],
) -> Result<Vec<u8>> {
    debug!("read blocks {:?}", block_numbers);

    let cmd = Command::ReadWithoutEncryption {
        idm: *tag.idm(),
        services: vec![service],
        blocks: block_numbers.iter().map(|&n| BlockAddress::block(n)).collect(),
    };

    let timeout = tag.timing().read_timeout(block_numbers.len());
    debug!("read timeout is {} ms", timeout);

    match super::execute(transport, &cmd, timeout)? {
        Response::ReadWithoutEncryption { data, .. } => {
            let expected = block_numbers.len() * BLOCK_SIZE;
            if data.len() != expected {
                return Err(Error::InvalidLength {
                    expected,
                    actual: data.len(),
                });
            }
            Ok(data)
        }
        other => Err(Error::UnexpectedResponse {
            expected: cmd.response_code(),
            actual: other.response_code(),
        }),
    }
}

/// Read a block list that may exceed the tag's per-transaction limit by
/// issuing one command per `limit` blocks.
pub fn read_chunked<T: Transport + ?Sized>(
    tag: &Type3Tag,
    transport: &mut T,
    service: ServiceCode,
    block_numbers: &[u16],
    limit: usize,
) -> Result<Vec<u8>> {
    super::ensure_limit(limit)?;

    let mut data = Vec::with_capacity(block_numbers.len() * BLOCK_SIZE);
    for chunk in block_numbers.chunks(limit) {
        data.extend_from_slice(&read_blocks(tag, transport, service, chunk)?);
    }
    Ok(data)
}

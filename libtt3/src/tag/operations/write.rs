use log::{debug, error, trace};

use crate::constants::BLOCK_SIZE;
use crate::protocol::{Command, Response};
use crate::tag::Type3Tag;
use crate::transport::Transport;
use crate::types::{BlockAddress, ServiceCode};
use crate::utils::Hex;
use crate::{Error, Result};

fn check_data_length(data: &[u8], block_numbers: &[u16]) -> Result<()> {
    let expected = block_numbers.len() * BLOCK_SIZE;
    if data.len() != expected {
        error!("data length does not match block-count * 16");
        return Err(Error::InvalidDataLength {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Write blocks of one service using a single WriteWithoutEncryption
/// command. `data` must hold exactly 16 bytes per block number.
pub fn write_blocks<T: Transport + ?Sized>(
    tag: &Type3Tag,
    transport: &mut T,
    service: ServiceCode,
    data: &[u8],
    block_numbers: &[u16],
) -> Result<()> {
    debug!("write blocks {:?}", block_numbers);
    check_data_length(data, block_numbers)?;
    trace!(">>> {}", Hex(data));

    let cmd = Command::WriteWithoutEncryption {
        idm: *tag.idm(),
        services: vec![service],
        blocks: block_numbers.iter().map(|&n| BlockAddress::block(n)).collect(),
        data: data.to_vec(),
    };

    let timeout = tag.timing().write_timeout(block_numbers.len());
    debug!("write timeout is {} ms", timeout);

    match super::execute(transport, &cmd, timeout)? {
        Response::WriteWithoutEncryption { .. } => Ok(()),
        other => Err(Error::UnexpectedResponse {
            expected: cmd.response_code(),
            actual: other.response_code(),
        }),
    }
}

/// Write a block list that may exceed the tag's per-transaction limit,
/// `limit` blocks per command, in list order.
pub fn write_chunked<T: Transport + ?Sized>(
    tag: &Type3Tag,
    transport: &mut T,
    service: ServiceCode,
    data: &[u8],
    block_numbers: &[u16],
    limit: usize,
) -> Result<()> {
    super::ensure_limit(limit)?;
    check_data_length(data, block_numbers)?;

    for (blocks, chunk) in block_numbers
        .chunks(limit)
        .zip(data.chunks(limit * BLOCK_SIZE))
    {
        write_blocks(tag, transport, service, chunk, blocks)?;
    }
    Ok(())
}

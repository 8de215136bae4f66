// libtt3/src/emulation/dispatch.rs

//! Read and write command handlers on the emulated side.
//!
//! Both commands share the parameter layout
//! `[n_services, svc_lo, svc_hi, ..., n_blocks, block_list...]`; write
//! frames carry the block data after the block list.

use std::collections::HashMap;

use log::debug;

use crate::constants::{
    BLOCK_SIZE, STATUS_BLOCK_ACCESS, STATUS_SERVICE_INDEX, STATUS_UNKNOWN_SERVICE,
};
use crate::emulation::service::ServiceRegistry;
use crate::protocol::parser::Reader;
use crate::types::{BlockAddress, BlockData, ServiceCode};
use crate::{Error, Result};

/// Why a command did not produce block data.
#[derive(Debug)]
pub(crate) enum Reject {
    /// Answer with these status bytes
    Status(Vec<u8>),
    /// Malformed parameters; send nothing
    Drop(Error),
}

impl From<Error> for Reject {
    fn from(e: Error) -> Self {
        Reject::Drop(e)
    }
}

/// One block access resolved against the service list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Access {
    pub service: ServiceCode,
    pub block: u16,
    /// First block of this service in the command
    pub begin: bool,
    /// Last block of this service in the command
    pub end: bool,
}

fn flag_for(index: usize) -> u8 {
    1 << (index % 8)
}

fn block_error(index: usize) -> Reject {
    Reject::Status(vec![flag_for(index), STATUS_BLOCK_ACCESS, 0])
}

/// Decode the service and block lists. Unknown services and out of range
/// service indices are rejected with a status; truncation drops the frame.
pub(crate) fn parse_access_list(
    reader: &mut Reader<'_>,
    registry: &ServiceRegistry,
) -> std::result::Result<Vec<Access>, Reject> {
    let service_count = reader.u8()?;
    let mut services = Vec::with_capacity(usize::from(service_count));
    for _ in 0..service_count {
        let code = ServiceCode::new(reader.le_u16()?);
        if !registry.contains(code) {
            debug!("unknown service {:04x}", code.as_u16());
            return Err(Reject::Status(vec![0xFF, STATUS_UNKNOWN_SERVICE]));
        }
        services.push(code);
    }

    let block_count = reader.u8()?;
    let mut addresses = Vec::with_capacity(usize::from(block_count));
    let mut totals: HashMap<ServiceCode, usize> = HashMap::new();
    for i in 0..usize::from(block_count) {
        let head = reader.u8()?;
        let block = if head & BlockAddress::SHORT_FORM != 0 {
            u16::from(reader.u8()?)
        } else {
            reader.le_u16()?
        };
        let index = usize::from(head & 0x0F);
        let service = *services
            .get(index)
            .ok_or_else(|| Reject::Status(vec![flag_for(i), STATUS_SERVICE_INDEX]))?;
        *totals.entry(service).or_insert(0) += 1;
        addresses.push((service, block));
    }

    let mut remaining = totals.clone();
    let accesses = addresses
        .into_iter()
        .map(|(service, block)| {
            let total = totals.get(&service).copied().unwrap_or(0);
            let left = remaining.entry(service).or_insert(0);
            let begin = *left == total;
            *left = left.saturating_sub(1);
            Access {
                service,
                block,
                begin,
                end: *left == 0,
            }
        })
        .collect();
    Ok(accesses)
}

/// Handle ReadWithoutEncryption parameters. Returns the response body
/// after the IDm: `[0, 0, count, data...]` or the status bytes.
pub(crate) fn read(params: &[u8], registry: &mut ServiceRegistry) -> Result<Vec<u8>> {
    let mut reader = Reader::new(params);
    let accesses = match parse_access_list(&mut reader, registry) {
        Ok(a) => a,
        Err(reject) => return finish(reject),
    };

    let mut out = Vec::with_capacity(3 + accesses.len() * BLOCK_SIZE);
    out.extend_from_slice(&[0, 0, accesses.len() as u8]);
    for (i, access) in accesses.iter().enumerate() {
        let data = registry
            .get_mut(access.service)
            .and_then(|svc| svc.read_block(access.block, access.begin, access.end));
        match data {
            Some(block) => out.extend_from_slice(block.as_bytes()),
            None => return finish(block_error(i)),
        }
    }
    Ok(out)
}

/// Handle WriteWithoutEncryption parameters. Returns the status bytes.
pub(crate) fn write(params: &[u8], registry: &mut ServiceRegistry) -> Result<Vec<u8>> {
    let mut reader = Reader::new(params);
    let accesses = match parse_access_list(&mut reader, registry) {
        Ok(a) => a,
        Err(reject) => return finish(reject),
    };

    let data = reader.rest();
    if data.len() % BLOCK_SIZE != 0 {
        debug!("write carries {} data bytes, not whole blocks", data.len());
        return Ok(vec![0xFF, STATUS_BLOCK_ACCESS]);
    }

    // Surplus blocks past the block list are ignored.
    let mut chunks = data.chunks_exact(BLOCK_SIZE);
    for (i, access) in accesses.iter().enumerate() {
        let Some(chunk) = chunks.next() else {
            debug!("no data for block list entry {}", i);
            return finish(block_error(i));
        };
        let block = BlockData::try_from(chunk)?;
        let written = registry
            .get_mut(access.service)
            .is_some_and(|svc| svc.write_block(access.block, &block, access.begin, access.end));
        if !written {
            return finish(block_error(i));
        }
    }
    Ok(vec![0, 0])
}

fn finish(reject: Reject) -> Result<Vec<u8>> {
    match reject {
        Reject::Status(status) => Ok(status),
        Reject::Drop(e) => Err(e),
    }
}

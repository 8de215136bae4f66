// libtt3/src/tag/mod.rs

//! Reader-side view of one Type 3 Tag.

use std::fmt;

use crate::ndef::Ndef;
use crate::transport::Transport;
use crate::types::{BlockData, Idm, Pmm, ServiceCode, SystemCode};
use crate::{Error, Result};

/// `Type3Tag` builder
pub mod builder;
/// Block read, write and presence operations
pub mod operations;
/// PMm timing decode
pub mod timing;

pub use builder::Type3TagBuilder;
pub use timing::{Timing, TimingParameters};

/// A Type 3 Tag found by polling, addressed by its IDm.
#[derive(Debug, Clone, PartialEq)]
pub struct Type3Tag {
    idm: Idm,
    pmm: Pmm,
    system_code: SystemCode,
    timing: TimingParameters,
}

impl Type3Tag {
    /// Tag found by Polling; timing is derived from `pmm`.
    pub fn new(idm: Idm, pmm: Pmm, system_code: SystemCode) -> Self {
        Self {
            idm,
            pmm,
            system_code,
            timing: TimingParameters::from_pmm(&pmm),
        }
    }

    /// Start a `Type3TagBuilder`.
    pub fn builder() -> Type3TagBuilder {
        Type3TagBuilder::new()
    }

    /// IDm addressed by every command.
    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    /// PMm reported by Polling.
    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }

    /// System code the tag was activated with.
    pub fn system_code(&self) -> SystemCode {
        self.system_code
    }

    /// Timing decoded from the PMm.
    pub fn timing(&self) -> &TimingParameters {
        &self.timing
    }

    /// Read blocks using ReadWithoutEncryption. Returns the raw block
    /// bytes, 16 per requested block.
    pub fn read_blocks<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        service: ServiceCode,
        block_numbers: &[u16],
    ) -> Result<Vec<u8>> {
        operations::read_blocks(self, transport, service, block_numbers)
    }

    /// Same as `read_blocks`, split into one `BlockData` per block.
    pub fn read_block_data<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        service: ServiceCode,
        block_numbers: &[u16],
    ) -> Result<Vec<BlockData>> {
        let data = self.read_blocks(transport, service, block_numbers)?;
        data.chunks_exact(crate::constants::BLOCK_SIZE)
            .map(BlockData::try_from)
            .collect()
    }

    /// Write blocks using WriteWithoutEncryption. `data` must hold 16
    /// bytes per block number.
    pub fn write_blocks<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        service: ServiceCode,
        data: &[u8],
        block_numbers: &[u16],
    ) -> Result<()> {
        operations::write_blocks(self, transport, service, data, block_numbers)
    }

    /// True if the tag still answers.
    pub fn is_present<T: Transport + ?Sized>(&self, transport: &mut T) -> bool {
        operations::is_present(self, transport)
    }

    /// Open the NDEF data area. Only tags announcing the NDEF system code
    /// carry one.
    pub fn ndef<T: Transport + ?Sized>(&self, transport: &mut T) -> Result<Ndef> {
        if self.system_code != SystemCode::NDEF {
            return Err(Error::NoNdef);
        }
        Ndef::open(self.clone(), transport)
    }
}

impl fmt::Display for Type3Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type3Tag IDm={} PMm={} SYS={}",
            self.idm.to_hex(),
            self.pmm.to_hex(),
            self.system_code
        )
    }
}

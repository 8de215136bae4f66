// libtt3/src/ndef/mod.rs

//! NDEF message access on a Type 3 Tag.
//!
//! The attribute block is cached between calls and dropped after every
//! message read or write, so the next access sees the tag's current state.

/// Attribute block codec
pub mod attribute;

pub use attribute::{AttributeBlock, ParsedAttributeBlock, Version};

use log::{debug, error};

use crate::constants::BLOCK_SIZE;
use crate::tag::Type3Tag;
use crate::tag::operations;
use crate::transport::Transport;
use crate::types::ServiceCode;
use crate::{Error, Result};

const ATTRIBUTE_BLOCK: u16 = 0;

/// NDEF accessor bound to one tag.
#[derive(Debug, Clone)]
pub struct Ndef {
    tag: Type3Tag,
    attr: Option<AttributeBlock>,
}

impl Ndef {
    /// Read and validate the attribute block. Fails if its checksum does
    /// not hold.
    pub fn open<T: Transport + ?Sized>(tag: Type3Tag, transport: &mut T) -> Result<Self> {
        let mut ndef = Self { tag, attr: None };
        ndef.attribute(transport)?;
        Ok(ndef)
    }

    /// Tag this accessor talks to.
    pub fn tag(&self) -> &Type3Tag {
        &self.tag
    }

    /// Forget the cached attribute block.
    pub fn invalidate(&mut self) {
        self.attr = None;
    }

    /// The cached attribute block, read from the tag if absent.
    pub fn attribute<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Result<&AttributeBlock> {
        let attr = match self.attr.take() {
            Some(attr) => attr,
            None => {
                let raw = operations::read_blocks(
                    &self.tag,
                    transport,
                    ServiceCode::NDEF_READ,
                    &[ATTRIBUTE_BLOCK],
                )?;
                AttributeBlock::from_slice(&raw).inspect_err(|e| {
                    error!("checksum error in ndef attribute block: {}", e);
                })?
            }
        };
        Ok(self.attr.insert(attr))
    }

    /// Version of the NDEF mapping
    pub fn version<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Result<Version> {
        Ok(self.attribute(transport)?.version)
    }

    /// Maximum number of message bytes the tag can hold
    pub fn capacity<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Result<usize> {
        Ok(self.attribute(transport)?.capacity())
    }

    /// True if a new message may be written
    pub fn writeable<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Result<bool> {
        Ok(self.attribute(transport)?.writeable)
    }

    /// Read the current NDEF message, `nbr` blocks per command.
    pub fn message<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Result<Vec<u8>> {
        let attr = self.attribute(transport)?.clone();
        let length = attr.message_length as usize;
        let blocks = data_blocks(attr.message_blocks())?;
        debug!("reading {} byte ndef message from {} blocks", length, blocks.len());

        let result = operations::read_chunked(
            &self.tag,
            transport,
            ServiceCode::NDEF_READ,
            &blocks,
            usize::from(attr.nbr),
        );
        self.invalidate();

        let mut data = result?;
        data.truncate(length);
        Ok(data)
    }

    /// Replace the NDEF message, `nbw` blocks per command.
    ///
    /// Writeability and capacity are checked against the cached attribute
    /// block before any traffic. Block 0 is then re-read and rewritten with
    /// WriteF set before any data block is touched, and cleared once all
    /// data blocks are written. A failure in between leaves WriteF set on
    /// the tag; nothing is rolled back.
    pub fn set_message<T: Transport + ?Sized>(&mut self, transport: &mut T, data: &[u8]) -> Result<()> {
        let cached = self.attribute(transport)?;
        if !cached.writeable {
            return Err(Error::NotWriteable);
        }
        if data.len() > cached.capacity() {
            return Err(Error::CapacityExceeded {
                length: data.len(),
                capacity: cached.capacity(),
            });
        }

        self.invalidate();
        let result = self
            .attribute(transport)
            .cloned()
            .and_then(|mut attr| self.write_message(transport, &mut attr, data));
        self.invalidate();
        result
    }

    fn write_message<T: Transport + ?Sized>(
        &self,
        transport: &mut T,
        attr: &mut AttributeBlock,
        data: &[u8],
    ) -> Result<()> {
        debug!("writing {} byte ndef message", data.len());

        attr.writing_in_progress = true;
        attr.message_length = data.len() as u32;
        self.write_attribute(transport, attr)?;

        let blocks = data_blocks(data.len().div_ceil(BLOCK_SIZE))?;
        let mut padded = data.to_vec();
        padded.resize(blocks.len() * BLOCK_SIZE, 0);
        operations::write_chunked(
            &self.tag,
            transport,
            ServiceCode::NDEF_WRITE,
            &padded,
            &blocks,
            usize::from(attr.nbw),
        )?;

        attr.writing_in_progress = false;
        self.write_attribute(transport, attr)
    }

    fn write_attribute<T: Transport + ?Sized>(&self, transport: &mut T, attr: &AttributeBlock) -> Result<()> {
        operations::write_blocks(
            &self.tag,
            transport,
            ServiceCode::NDEF_WRITE,
            &attr.serialize(),
            &[ATTRIBUTE_BLOCK],
        )
    }
}

/// Block numbers 1..=count holding message data.
fn data_blocks(count: usize) -> Result<Vec<u16>> {
    if count > usize::from(u16::MAX) {
        return Err(Error::FrameFormat(format!(
            "message spans {} blocks, beyond the addressable range",
            count
        )));
    }
    Ok((1..=count as u16).collect())
}

// libtt3/src/ndef/attribute.rs

//! The NDEF attribute information block (block 0).
//!
//! Layout:
//!
//! | bytes  | field                                   |
//! |--------|-----------------------------------------|
//! | 0      | version, major in the high nibble       |
//! | 1      | Nbr, blocks per read command            |
//! | 2      | Nbw, blocks per write command           |
//! | 3-4    | Nmaxb, capacity in blocks (big-endian)  |
//! | 5-8    | reserved                                |
//! | 9      | WriteF, 0x0F while a write is in flight |
//! | 10     | RWFlag, 1 if writeable                  |
//! | 11-13  | Ln, message length (big-endian)         |
//! | 14-15  | checksum over bytes 0-13 (big-endian)   |

use derive_more::Display;

use crate::constants::BLOCK_SIZE;
use crate::protocol::checksum::sum16;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size of the attribute block in bytes
pub const ATTRIBUTE_BLOCK_LEN: usize = 16;

/// WriteF value marking an unfinished write. Tags expect exactly this
/// byte, not 0x01.
pub const WRITE_IN_PROGRESS: u8 = 0x0F;

/// NDEF mapping version, one nibble each on the wire.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{}.{}", major, minor)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// High nibble
    pub major: u8,
    /// Low nibble
    pub minor: u8,
}

impl Version {
    /// Mapping version 1.0, the only one written by this crate
    pub const V1_0: Self = Self { major: 1, minor: 0 };

    /// Split a version byte into its nibbles.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            major: byte >> 4,
            minor: byte & 0x0F,
        }
    }

    /// Pack into one byte; each part keeps its low nibble only.
    pub fn to_byte(self) -> u8 {
        (self.major & 0x0F) << 4 | (self.minor & 0x0F)
    }
}

/// Decoded attribute block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeBlock {
    /// Mapping version (byte 0)
    pub version: Version,
    /// Maximum blocks per ReadWithoutEncryption
    pub nbr: u8,
    /// Maximum blocks per WriteWithoutEncryption
    pub nbw: u8,
    /// NDEF area size in blocks
    pub max_blocks: u16,
    /// Bytes 5-8, kept so a rewritten block carries them unchanged
    pub reserved: [u8; 4],
    /// WriteF is 0x0F: a write was started and not finished
    pub writing_in_progress: bool,
    /// RWFlag is 0x01
    pub writeable: bool,
    /// Current NDEF message length in bytes (24 bits on the wire)
    pub message_length: u32,
}

impl Default for AttributeBlock {
    fn default() -> Self {
        Self {
            version: Version::V1_0,
            nbr: 1,
            nbw: 1,
            max_blocks: 0,
            reserved: [0; 4],
            writing_in_progress: false,
            writeable: true,
            message_length: 0,
        }
    }
}

/// Result of decoding 16 raw bytes: the fields plus both checksums, so
/// a caller can inspect a corrupt block before rejecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAttributeBlock {
    /// Decoded fields
    pub block: AttributeBlock,
    /// Checksum carried in bytes 14..16
    pub stored_checksum: u16,
    /// Sum of bytes 0..14
    pub computed_checksum: u16,
}

impl ParsedAttributeBlock {
    /// Stored and computed checksums agree.
    pub fn is_valid(&self) -> bool {
        self.stored_checksum == self.computed_checksum
    }

    /// The decoded block if its checksum holds.
    pub fn into_valid(self) -> Result<AttributeBlock> {
        if !self.is_valid() {
            return Err(Error::AttributeChecksum {
                expected: self.computed_checksum,
                actual: self.stored_checksum,
            });
        }
        Ok(self.block)
    }
}

impl AttributeBlock {
    /// Usable NDEF bytes
    pub fn capacity(&self) -> usize {
        usize::from(self.max_blocks) * BLOCK_SIZE
    }

    /// Size the NDEF area to hold `bytes`, rounding up to whole blocks.
    pub fn set_capacity(&mut self, bytes: usize) {
        self.max_blocks = bytes.div_ceil(BLOCK_SIZE).min(usize::from(u16::MAX)) as u16;
    }

    /// Blocks needed for the current message
    pub fn message_blocks(&self) -> usize {
        (self.message_length as usize).div_ceil(BLOCK_SIZE)
    }

    /// Decode without judging the checksum.
    pub fn parse(bytes: &[u8; ATTRIBUTE_BLOCK_LEN]) -> ParsedAttributeBlock {
        let block = Self {
            version: Version::from_byte(bytes[0]),
            nbr: bytes[1],
            nbw: bytes[2],
            max_blocks: u16::from_be_bytes([bytes[3], bytes[4]]),
            reserved: [bytes[5], bytes[6], bytes[7], bytes[8]],
            writing_in_progress: bytes[9] != 0,
            writeable: bytes[10] != 0,
            message_length: u32::from_be_bytes([0, bytes[11], bytes[12], bytes[13]]),
        };

        ParsedAttributeBlock {
            block,
            stored_checksum: u16::from_be_bytes([bytes[14], bytes[15]]),
            computed_checksum: sum16(&bytes[..14]),
        }
    }

    /// Decode from a byte slice and require a valid checksum.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: &[u8; ATTRIBUTE_BLOCK_LEN] =
            bytes.try_into().map_err(|_| Error::InvalidLength {
                expected: ATTRIBUTE_BLOCK_LEN,
                actual: bytes.len(),
            })?;
        Self::parse(raw).into_valid()
    }

    /// Encode, recomputing the checksum.
    pub fn serialize(&self) -> [u8; ATTRIBUTE_BLOCK_LEN] {
        let mut out = [0u8; ATTRIBUTE_BLOCK_LEN];
        out[0] = self.version.to_byte();
        out[1] = self.nbr;
        out[2] = self.nbw;
        out[3..5].copy_from_slice(&self.max_blocks.to_be_bytes());
        out[5..9].copy_from_slice(&self.reserved);
        out[9] = if self.writing_in_progress {
            WRITE_IN_PROGRESS
        } else {
            0x00
        };
        out[10] = u8::from(self.writeable);
        out[11..14].copy_from_slice(&self.message_length.to_be_bytes()[1..]);
        let checksum = sum16(&out[..14]);
        out[14..].copy_from_slice(&checksum.to_be_bytes());
        out
    }
}

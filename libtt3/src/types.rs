// libtt3/src/types.rs

use crate::Error;
use crate::constants::{PMM_READ_TIMING_OFFSET, PMM_WRITE_TIMING_OFFSET};
use derive_more::{From, Into};
use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// IDm - Newtype Pattern (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap raw IDm bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes in wire order.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::Hex(self.as_bytes()).to_string()
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// PMm - manufacturer parameters (8 bytes). Bytes 5 and 6 carry the
/// read and write timing constants used for timeout derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pmm([u8; 8]);

impl Pmm {
    /// Wrap raw PMm bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes in wire order.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Timing byte for ReadWithoutEncryption (offset 5).
    pub fn read_timing(&self) -> u8 {
        self.0[PMM_READ_TIMING_OFFSET]
    }

    /// Timing byte for WriteWithoutEncryption (offset 6).
    pub fn write_timing(&self) -> u8 {
        self.0[PMM_WRITE_TIMING_OFFSET]
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::Hex(self.as_bytes()).to_string()
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// SystemCode (u16). Transmitted most significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    /// Polling wildcard, answered by every system
    pub const ANY: Self = Self(crate::constants::WILDCARD_SYSTEM_CODE);
    /// NDEF system code 0x12FC
    pub const NDEF: Self = Self(crate::constants::NDEF_SYSTEM_CODE);

    /// Wrap a numeric system code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Numeric value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire form, most significant byte first.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Decode the wire form.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

impl fmt::Display for SystemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.0)
    }
}

/// ServiceCode (u16). Transmitted least significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// NDEF data area, read access (0x000B)
    pub const NDEF_READ: Self = Self(crate::constants::NDEF_READ_SERVICE);
    /// NDEF data area, write access (0x0009)
    pub const NDEF_WRITE: Self = Self(crate::constants::NDEF_WRITE_SERVICE);

    /// Wrap a numeric service code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Numeric value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire form, least significant byte first.
    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Decode the wire form.
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockData([u8; 16]);

impl BlockData {
    /// Wrap one block of raw bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw block content.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Space separated hex, as used in logs.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 16] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 16,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// Block list element: a block number bound to an entry of the command's
/// service list.
///
/// Wire form: numbers below 256 use the 2-byte short form
/// `[0x80 | service_index, number]`; larger numbers use the 3-byte form
/// `[service_index, number_lo, number_hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockAddress {
    /// Index into the command's service list (low nibble)
    pub service_index: u8,
    /// Block number within that service
    pub block_number: u16,
}

impl BlockAddress {
    /// Bit in the first address byte selecting the 2-byte form
    pub const SHORT_FORM: u8 = 0x80;

    /// Address `block_number` through service list entry `service_index`.
    pub fn new(service_index: u8, block_number: u16) -> Self {
        Self {
            service_index: service_index & 0x0F,
            block_number,
        }
    }

    /// Address a block through the first (and usually only) service.
    pub fn block(block_number: u16) -> Self {
        Self::new(0, block_number)
    }

    /// Whether the 2-byte form applies.
    pub fn is_short(&self) -> bool {
        self.block_number < 256
    }

    /// Number of bytes the address occupies on the wire
    pub fn encoded_len(&self) -> usize {
        if self.is_short() { 2 } else { 3 }
    }

    /// Append the wire form to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        if self.is_short() {
            buf.push(Self::SHORT_FORM | self.service_index);
            buf.push(self.block_number as u8);
        } else {
            buf.push(self.service_index);
            buf.extend_from_slice(&self.block_number.to_le_bytes());
        }
    }

    /// Wire form as a new buffer.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf
    }
}

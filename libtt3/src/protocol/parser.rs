// libtt3/src/protocol/parser.rs

use crate::types::Idm;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse an Idm (8 bytes) at `start` index with bounds checking.
pub fn idm_at(data: &[u8], start: usize) -> Result<Idm> {
    let s = slice_at(data, start, 8)?;
    Idm::try_from(s)
}

/// Parse a PMm (8 bytes) at `start` index with bounds checking.
pub fn pmm_at(data: &[u8], start: usize) -> Result<crate::types::Pmm> {
    let s = slice_at(data, start, 8)?;
    crate::types::Pmm::try_from(s)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Ensure the first byte (response code) equals `expected`. Returns
/// UnexpectedResponse on mismatch.
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<()> {
    let actual = byte_at(data, 0)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}

/// Ensure the IDm echoed at `start` is the one the command addressed.
pub fn expect_idm(data: &[u8], start: usize, expected: &Idm) -> Result<()> {
    if idm_at(data, start)? != *expected {
        return Err(Error::IdmMismatch);
    }
    Ok(())
}

/// Forward-only cursor over command parameters. Every read is bounds
/// checked, so a truncated list surfaces as `InvalidLength` instead of a
/// panic.
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next byte.
    pub fn u8(&mut self) -> Result<u8> {
        let b = byte_at(self.data, self.pos)?;
        self.pos += 1;
        Ok(b)
    }

    /// Next two bytes, least significant first.
    pub fn le_u16(&mut self) -> Result<u16> {
        let s = self.take(2)?;
        Ok(u16::from_le_bytes([s[0], s[1]]))
    }

    /// Next `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let s = slice_at(self.data, self.pos, len)?;
        self.pos += len;
        Ok(s)
    }

    /// Everything not consumed yet.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Bytes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

// libtt3/src/tag/timing.rs

//! Response time budgets derived from the PMm timing bytes.
//!
//! Each timing byte packs three fields: bits 0-2 hold `A - 1`, bits 3-5
//! hold `B - 1` and bits 6-7 an exponent `E`. The maximum response time
//! for a command touching `n` blocks is `(A + B * n) * 0.302 * 4^E`
//! milliseconds.

use crate::types::Pmm;

/// Unit of the timing formula in milliseconds (256 * 16 / fc).
const TIME_UNIT_MS: f64 = 0.302;

/// Slack added on top of the tag-advertised budget.
const TIMEOUT_MARGIN_MS: u64 = 5;

/// One decoded PMm timing byte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Fixed part `A`, 1..=8
    pub a: u8,
    /// Per-block part `B`, 1..=8
    pub b: u8,
    /// Unit in milliseconds, `0.302 * 4^E`
    pub base: f64,
}

impl Timing {
    /// Decode one timing byte.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            a: (byte & 0x07) + 1,
            b: ((byte >> 3) & 0x07) + 1,
            base: TIME_UNIT_MS * f64::from(4u32.pow(u32::from(byte >> 6))),
        }
    }

    /// Timeout in milliseconds for a request covering `blocks` blocks.
    pub fn timeout_ms(&self, blocks: usize) -> u64 {
        let units = f64::from(self.a) + f64::from(self.b) * blocks as f64;
        (units * self.base).floor() as u64 + TIMEOUT_MARGIN_MS
    }
}

/// Read and write timing of one tag, derived once from its PMm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingParameters {
    /// ReadWithoutEncryption timing
    pub read: Timing,
    /// WriteWithoutEncryption timing
    pub write: Timing,
}

impl TimingParameters {
    /// Decode PMm bytes 5 and 6.
    pub fn from_pmm(pmm: &Pmm) -> Self {
        Self {
            read: Timing::from_byte(pmm.read_timing()),
            write: Timing::from_byte(pmm.write_timing()),
        }
    }

    /// Read timeout in milliseconds for `blocks` blocks.
    pub fn read_timeout(&self, blocks: usize) -> u64 {
        self.read.timeout_ms(blocks)
    }

    /// Write timeout in milliseconds for `blocks` blocks.
    pub fn write_timeout(&self, blocks: usize) -> u64 {
        self.write.timeout_ms(blocks)
    }
}

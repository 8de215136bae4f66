// libtt3/src/protocol/checksum.rs

/// Arithmetic checksum used by the NDEF attribute block: the plain sum
/// of all bytes, truncated to 16 bits.
pub fn sum16(data: &[u8]) -> u16 {
    data.iter()
        .fold(0u16, |acc, &b| acc.wrapping_add(u16::from(b)))
}

// libtt3/src/constants.rs
//! Common protocol constants used across the crate

/// Size of one tag block in bytes
pub const BLOCK_SIZE: usize = 16;

/// Largest Type 3 frame: the length byte itself is a u8
pub const MAX_FRAME_LEN: usize = 255;

// Command codes (request side). The response code is always command + 1.

/// Polling
pub const CMD_POLLING: u8 = 0x00;
/// RequestResponse (mode query)
pub const CMD_REQUEST_RESPONSE: u8 = 0x04;
/// ReadWithoutEncryption
pub const CMD_READ_WITHOUT_ENCRYPTION: u8 = 0x06;
/// WriteWithoutEncryption
pub const CMD_WRITE_WITHOUT_ENCRYPTION: u8 = 0x08;
/// RequestSystemCode
pub const CMD_REQUEST_SYSTEM_CODE: u8 = 0x0C;

/// Service code for reading the NDEF data area
pub const NDEF_READ_SERVICE: u16 = 0x000B;

/// Service code for writing the NDEF data area
pub const NDEF_WRITE_SERVICE: u16 = 0x0009;

/// System code announced by tags holding an NDEF message
pub const NDEF_SYSTEM_CODE: u16 = 0x12FC;

/// Polling wildcard system code
pub const WILDCARD_SYSTEM_CODE: u16 = 0xFFFF;

/// Status flag 2: a listed service is not registered
pub const STATUS_UNKNOWN_SERVICE: u8 = 0xA1;
/// Status flag 2: block access failed or block data is malformed
pub const STATUS_BLOCK_ACCESS: u8 = 0xA2;
/// Status flag 2: a block list entry names a missing service index
pub const STATUS_SERVICE_INDEX: u8 = 0xA3;

/// PMm offset of the read timing byte
pub const PMM_READ_TIMING_OFFSET: usize = 5;
/// PMm offset of the write timing byte
pub const PMM_WRITE_TIMING_OFFSET: usize = 6;

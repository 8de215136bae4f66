// fixtures.rs: commonly used test payloads and frames

use libtt3::ndef::AttributeBlock;
use libtt3::protocol::Frame;
use libtt3::types::{Idm, Pmm, SystemCode};

pub fn sample_idm_bytes() -> [u8; 8] {
    hex_array("0102030405060708")
}

pub fn sample_pmm_bytes() -> [u8; 8] {
    hex_array("0120220427674d00")
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(sample_idm_bytes())
}

pub fn sample_pmm() -> Pmm {
    Pmm::from_bytes(sample_pmm_bytes())
}

fn hex_array<const N: usize>(s: &str) -> [u8; N] {
    let bytes = hex::decode(s).unwrap();
    bytes.try_into().unwrap()
}

/// Frame from a hex string, length byte included.
pub fn frame(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).unwrap()
}

/// Polling answer from the sample tag, optionally with a system code.
pub fn polling_frame(system_code: Option<SystemCode>) -> Vec<u8> {
    let mut payload = vec![0x01u8];
    payload.extend_from_slice(&sample_idm_bytes());
    payload.extend_from_slice(&sample_pmm_bytes());
    if let Some(sc) = system_code {
        payload.extend_from_slice(&sc.to_be_bytes());
    }
    Frame::encode(&payload).unwrap()
}

/// Addressed command frame to the sample tag.
pub fn command_frame(code: u8, params: &[u8]) -> Vec<u8> {
    let mut payload = vec![code];
    payload.extend_from_slice(&sample_idm_bytes());
    payload.extend_from_slice(params);
    Frame::encode(&payload).unwrap()
}

/// Attribute block v1.0 with the given limits and message state.
pub fn attribute(nbr: u8, nbw: u8, max_blocks: u16, length: u32) -> AttributeBlock {
    AttributeBlock {
        nbr,
        nbw,
        max_blocks,
        message_length: length,
        ..AttributeBlock::default()
    }
}

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the canned tag identity, response frames and
//! an in-memory NDEF tag so tests across the crate and tests/ directory
//! can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::BLOCK_SIZE;
use crate::emulation::{Type3TagEmulation, read_only, write_only};
use crate::ndef::AttributeBlock;
use crate::tag::Type3Tag;
use crate::transport::Transport;
use crate::types::{BlockData, Idm, Pmm, ServiceCode};
use crate::{Error, Result};

/// IDm shared by `sample_tag` and `EmulatedTag`
#[doc(hidden)]
pub const SAMPLE_IDM: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// PMm with read timing 0x67 and write timing 0x4D
#[doc(hidden)]
pub const SAMPLE_PMM: [u8; 8] = [0x01, 0x20, 0x22, 0x04, 0x27, 0x67, 0x4D, 0x00];

/// A tag announcing the NDEF system code.
#[doc(hidden)]
pub fn sample_tag() -> Type3Tag {
    Type3Tag::new(
        Idm::from_bytes(SAMPLE_IDM),
        Pmm::from_bytes(SAMPLE_PMM),
        crate::SystemCode::NDEF,
    )
}

/// Framed ReadWithoutEncryption answer from the sample tag carrying `data`
/// (a multiple of 16 bytes).
#[doc(hidden)]
pub fn read_response(data: &[u8]) -> Vec<u8> {
    let mut payload = vec![0x07];
    payload.extend_from_slice(&SAMPLE_IDM);
    payload.extend_from_slice(&[0, 0, (data.len() / BLOCK_SIZE) as u8]);
    payload.extend_from_slice(data);
    framed(payload)
}

/// Framed `[code, idm, status1, status2]` answer from the sample tag.
#[doc(hidden)]
pub fn status_response(code: u8, status1: u8, status2: u8) -> Vec<u8> {
    let mut payload = vec![code];
    payload.extend_from_slice(&SAMPLE_IDM);
    payload.extend_from_slice(&[status1, status2]);
    framed(payload)
}

fn framed(payload: Vec<u8>) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + 1);
    frame.push((payload.len() + 1) as u8);
    frame.extend(payload);
    frame
}

type Memory = Rc<RefCell<Vec<[u8; BLOCK_SIZE]>>>;

/// In-memory NDEF tag reachable through the reader-side `Transport`.
///
/// Command frames go straight through a `Type3TagEmulation`; its answer
/// is handed back by the next `receive_response`.
#[doc(hidden)]
pub struct EmulatedTag {
    emulation: Type3TagEmulation,
    memory: Memory,
    pending: Option<Vec<u8>>,
    /// Command frames received, in order
    pub sent: Vec<Vec<u8>>,
}

impl EmulatedTag {
    /// Blank NDEF tag with the given Nbr, Nbw and data area size.
    pub fn ndef(nbr: u8, nbw: u8, max_blocks: u16) -> Self {
        let attr = AttributeBlock {
            nbr,
            nbw,
            max_blocks,
            ..AttributeBlock::default()
        };
        let mut blocks = vec![[0u8; BLOCK_SIZE]; usize::from(max_blocks) + 1];
        blocks[0] = attr.serialize();
        let memory: Memory = Rc::new(RefCell::new(blocks));

        let mut emulation =
            Type3TagEmulation::ndef(Idm::from_bytes(SAMPLE_IDM), Pmm::from_bytes(SAMPLE_PMM));
        let reader = memory.clone();
        emulation.register_service(
            ServiceCode::NDEF_READ,
            move |block: u16, _: bool, _: bool| {
                reader
                    .borrow()
                    .get(usize::from(block))
                    .map(|b| BlockData::from_bytes(*b))
            },
            read_only,
        );
        let writer = memory.clone();
        emulation.register_service(
            ServiceCode::NDEF_WRITE,
            write_only,
            move |block: u16, data: &BlockData, _: bool, _: bool| {
                match writer.borrow_mut().get_mut(usize::from(block)) {
                    Some(slot) => {
                        *slot = *data.as_bytes();
                        true
                    }
                    None => false,
                }
            },
        );

        Self {
            emulation,
            memory,
            pending: None,
            sent: Vec::new(),
        }
    }

    /// Current content of `block`.
    pub fn block(&self, block: u16) -> Option<[u8; BLOCK_SIZE]> {
        self.memory.borrow().get(usize::from(block)).copied()
    }

    /// Overwrite `block` without going through a command.
    pub fn set_block(&mut self, block: u16, data: [u8; BLOCK_SIZE]) {
        if let Some(slot) = self.memory.borrow_mut().get_mut(usize::from(block)) {
            *slot = data;
        }
    }

    /// The emulation behind the transport, e.g. to register more services.
    pub fn emulation(&mut self) -> &mut Type3TagEmulation {
        &mut self.emulation
    }
}

impl Transport for EmulatedTag {
    fn send_command(&mut self, frame: &[u8]) -> Result<()> {
        self.sent.push(frame.to_vec());
        self.pending = self.emulation.process(frame);
        Ok(())
    }

    fn receive_response(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        self.pending.take().ok_or(Error::Timeout)
    }
}

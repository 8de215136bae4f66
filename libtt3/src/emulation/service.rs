// libtt3/src/emulation/service.rs

use std::collections::HashMap;

use crate::types::{BlockData, ServiceCode};

/// Application side of a readable service.
///
/// `begin` is set on the first and `end` on the last block a single
/// command reads from this service, so an implementation can take a
/// consistent snapshot across a multi-block read. Returning `None` fails
/// the command with a block access error.
pub trait BlockRead {
    /// Content of `block`, or `None` to fail the access.
    fn read_block(&mut self, block: u16, begin: bool, end: bool) -> Option<BlockData>;
}

/// Application side of a writable service. `begin`/`end` bracket the
/// blocks one command writes to this service. Returning `false` fails the
/// command with a block access error.
pub trait BlockWrite {
    /// Store `data` in `block`; `false` fails the access.
    fn write_block(&mut self, block: u16, data: &BlockData, begin: bool, end: bool) -> bool;
}

impl<F> BlockRead for F
where
    F: FnMut(u16, bool, bool) -> Option<BlockData>,
{
    fn read_block(&mut self, block: u16, begin: bool, end: bool) -> Option<BlockData> {
        self(block, begin, end)
    }
}

impl<F> BlockWrite for F
where
    F: FnMut(u16, &BlockData, bool, bool) -> bool,
{
    fn write_block(&mut self, block: u16, data: &BlockData, begin: bool, end: bool) -> bool {
        self(block, data, begin, end)
    }
}

/// Write handler for services that must not be written.
pub fn read_only(_block: u16, _data: &BlockData, _begin: bool, _end: bool) -> bool {
    false
}

/// Read handler for services that must not be read.
pub fn write_only(_block: u16, _begin: bool, _end: bool) -> Option<BlockData> {
    None
}

/// Read and write handler pair registered under one service code.
pub struct Service {
    read: Box<dyn BlockRead>,
    write: Box<dyn BlockWrite>,
}

impl Service {
    /// Pair a read handler with a write handler.
    pub fn new(read: impl BlockRead + 'static, write: impl BlockWrite + 'static) -> Self {
        Self {
            read: Box::new(read),
            write: Box::new(write),
        }
    }

    /// Run the read handler.
    pub fn read_block(&mut self, block: u16, begin: bool, end: bool) -> Option<BlockData> {
        self.read.read_block(block, begin, end)
    }

    /// Run the write handler.
    pub fn write_block(&mut self, block: u16, data: &BlockData, begin: bool, end: bool) -> bool {
        self.write.write_block(block, data, begin, end)
    }
}

/// Service code -> handler table consulted by the command dispatcher.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<ServiceCode, Service>,
}

impl ServiceRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the handlers for `code`.
    pub fn register(&mut self, code: ServiceCode, service: Service) {
        self.services.insert(code, service);
    }

    /// Whether handlers exist for `code`.
    pub fn contains(&self, code: ServiceCode) -> bool {
        self.services.contains_key(&code)
    }

    /// Handlers for `code`, if registered.
    pub fn get_mut(&mut self, code: ServiceCode) -> Option<&mut Service> {
        self.services.get_mut(&code)
    }

    /// Registered codes in ascending order
    pub fn codes(&self) -> Vec<ServiceCode> {
        let mut codes: Vec<_> = self.services.keys().copied().collect();
        codes.sort();
        codes
    }

    /// Number of registered service codes.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// No service registered.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

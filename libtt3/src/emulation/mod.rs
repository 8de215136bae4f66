// libtt3/src/emulation/mod.rs

//! Type 3 Tag card emulation.
//!
//! [`Type3TagEmulation`] answers reader commands on behalf of a tag whose
//! block storage lives in application callbacks registered per service
//! code. Frames are plain Type 3 frames, length byte included.

/// Read and write command handlers
pub mod dispatch;
/// Service handler traits and registry
pub mod service;

pub use service::{BlockRead, BlockWrite, Service, ServiceRegistry, read_only, write_only};

use std::fmt;

use log::{debug, trace, warn};

use crate::constants::{
    CMD_POLLING, CMD_READ_WITHOUT_ENCRYPTION, CMD_REQUEST_RESPONSE, CMD_REQUEST_SYSTEM_CODE,
    CMD_WRITE_WITHOUT_ENCRYPTION,
};
use crate::protocol::Frame;
use crate::transport::TargetTransport;
use crate::types::{Idm, Pmm, ServiceCode, SystemCode};
use crate::utils::Hex;
use crate::Result;

/// Polling request code asking for the system code in the answer
const REQUEST_SYSTEM_CODE: u8 = 0x01;

/// Emulated Type 3 Tag.
pub struct Type3TagEmulation {
    idm: Idm,
    pmm: Pmm,
    system_code: SystemCode,
    services: ServiceRegistry,
}

impl Type3TagEmulation {
    /// Emulation answering as `idm` for `system_code`, with no services.
    pub fn new(idm: Idm, pmm: Pmm, system_code: SystemCode) -> Self {
        Self {
            idm,
            pmm,
            system_code,
            services: ServiceRegistry::new(),
        }
    }

    /// Emulation announcing the NDEF system code. Services still have to
    /// be registered.
    pub fn ndef(idm: Idm, pmm: Pmm) -> Self {
        Self::new(idm, pmm, SystemCode::NDEF)
    }

    /// IDm the emulation answers with.
    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    /// PMm returned in Polling answers.
    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }

    /// System code matched against Polling requests.
    pub fn system_code(&self) -> SystemCode {
        self.system_code
    }

    /// Registered services.
    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    /// Attach read and write handlers to `code`, replacing earlier ones.
    pub fn register_service(
        &mut self,
        code: ServiceCode,
        read: impl BlockRead + 'static,
        write: impl BlockWrite + 'static,
    ) {
        self.services.register(code, Service::new(read, write));
    }

    /// Answer one inbound frame. `None` means the frame is ignored and
    /// the reader gets no response.
    pub fn process(&mut self, frame: &[u8]) -> Option<Vec<u8>> {
        let payload = match Frame::decode(frame) {
            Ok(p) => p,
            Err(e) => {
                warn!("dropping inbound frame: {}", e);
                return None;
            }
        };
        let (&code, params) = payload.split_first()?;
        debug!("command {:02x}: {}", code, Hex(params));

        if code == CMD_POLLING {
            return self.polling(params);
        }

        // Everything else is addressed to our IDm.
        if params.get(..8)? != self.idm.as_bytes() {
            debug!("ignoring command {:02x} for another idm", code);
            return None;
        }
        let params = &params[8..];

        let body = match code {
            CMD_REQUEST_RESPONSE => Ok(vec![0x00]),
            CMD_READ_WITHOUT_ENCRYPTION => dispatch::read(params, &mut self.services),
            CMD_WRITE_WITHOUT_ENCRYPTION => dispatch::write(params, &mut self.services),
            CMD_REQUEST_SYSTEM_CODE => {
                let mut b = vec![0x01];
                b.extend_from_slice(&self.system_code.to_be_bytes());
                Ok(b)
            }
            other => {
                debug!("unsupported command {:02x}", other);
                return None;
            }
        };

        match body {
            Ok(body) => self.respond(code + 1, &body),
            Err(e) => {
                warn!("dropping malformed command {:02x}: {}", code, e);
                None
            }
        }
    }

    fn polling(&self, params: &[u8]) -> Option<Vec<u8>> {
        if params.len() != 4 {
            return None;
        }
        let sc = SystemCode::from_be_bytes([params[0], params[1]]);
        if sc != SystemCode::ANY && sc != self.system_code {
            trace!("polling for system {} ignored", sc);
            return None;
        }

        let mut payload = vec![CMD_POLLING + 1];
        payload.extend_from_slice(self.idm.as_bytes());
        payload.extend_from_slice(self.pmm.as_bytes());
        if params[2] == REQUEST_SYSTEM_CODE {
            payload.extend_from_slice(&self.system_code.to_be_bytes());
        }
        let response = Frame::encode(&payload).ok()?;
        debug!("response {:02x}: {}", CMD_POLLING + 1, Hex(&response));
        Some(response)
    }

    fn respond(&self, code: u8, body: &[u8]) -> Option<Vec<u8>> {
        let mut payload = Vec::with_capacity(9 + body.len());
        payload.push(code);
        payload.extend_from_slice(self.idm.as_bytes());
        payload.extend_from_slice(body);
        let response = Frame::encode(&payload)
            .inspect_err(|e| warn!("response to {:02x} does not fit a frame: {}", code - 1, e))
            .ok()?;
        debug!("response {:02x}: {}", code, Hex(&response));
        Some(response)
    }

    /// Wait for the next well-formed command. Frames whose length byte
    /// disagrees with their size are dropped, as is silence.
    pub fn wait_command<T: TargetTransport + ?Sized>(
        &self,
        transport: &mut T,
        timeout_ms: u64,
    ) -> Result<Option<Vec<u8>>> {
        let Some(frame) = transport.wait_command(timeout_ms)? else {
            return Ok(None);
        };
        trace!("<<< {}", Hex(&frame));
        if !Frame::is_well_formed(&frame) {
            warn!("dropping frame with bad length byte: {}", Hex(&frame));
            return Ok(None);
        }
        Ok(Some(frame))
    }

    /// Process `command` and transmit the answer, if any. Returns whether
    /// a response went out.
    pub fn send_response<T: TargetTransport + ?Sized>(
        &mut self,
        transport: &mut T,
        command: &[u8],
    ) -> Result<bool> {
        match self.process(command) {
            Some(response) => {
                trace!(">>> {}", Hex(&response));
                transport.send_response(&response)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// One wait/answer round. Returns whether a response went out.
    pub fn serve_one<T: TargetTransport + ?Sized>(
        &mut self,
        transport: &mut T,
        timeout_ms: u64,
    ) -> Result<bool> {
        match self.wait_command(transport, timeout_ms)? {
            Some(command) => self.send_response(transport, &command),
            None => Ok(false),
        }
    }
}

impl fmt::Display for Type3TagEmulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type3TagEmulation IDm={} PMm={} SYS={}",
            self.idm.to_hex(),
            self.pmm.to_hex(),
            self.system_code
        )
    }
}

impl fmt::Debug for Type3TagEmulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type3TagEmulation")
            .field("idm", &self.idm)
            .field("pmm", &self.pmm)
            .field("system_code", &self.system_code)
            .field("services", &self.services.codes())
            .finish()
    }
}

use log::debug;

use crate::protocol::Command;
use crate::tag::Type3Tag;
use crate::transport::Transport;
use crate::{Error, Result};

/// Check whether the tag is still in the field.
///
/// RequestResponse is tried first. Some tags stay silent on it, so a
/// timeout is followed by one Polling for the tag's own system code.
/// Any answer counts; a frame that could not be sent counts as absence.
pub fn is_present<T: Transport + ?Sized>(tag: &Type3Tag, transport: &mut T) -> bool {
    let timeout = tag.timing().read_timeout(1);

    let probe = Command::RequestResponse { idm: *tag.idm() };
    match probe_once(transport, &probe, timeout) {
        Ok(()) => return true,
        Err(Error::Timeout) => debug!("no answer to request response, polling instead"),
        Err(e) => {
            debug!("presence check failed: {}", e);
            return false;
        }
    }

    let poll = Command::Polling {
        system_code: tag.system_code(),
        request_code: 0,
        time_slot: 0,
    };
    probe_once(transport, &poll, timeout).is_ok()
}

fn probe_once<T: Transport + ?Sized>(transport: &mut T, cmd: &Command, timeout: u64) -> Result<()> {
    let frame = crate::protocol::codec::encode_command_frame(cmd)?;
    transport.exchange(&frame, timeout).map(|_| ())
}

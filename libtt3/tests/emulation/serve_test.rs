use libtt3::emulation::Type3TagEmulation;
use libtt3::protocol::codec::{decode_response_frame, encode_command_frame};
use libtt3::protocol::{Command, Response};
use libtt3::test_support::EmulatedTag;
use libtt3::transport::MockTransport;
use libtt3::types::SystemCode;

use crate::common::{self, fixtures};

#[test]
fn serve_one_per_command() -> anyhow::Result<()> {
    common::init_logger();
    let mut emu = Type3TagEmulation::ndef(fixtures::sample_idm(), fixtures::sample_pmm());
    let mut mock = MockTransport::new();

    let poll = Command::Polling {
        system_code: SystemCode::ANY,
        request_code: 1,
        time_slot: 0,
    };
    mock.push_command(encode_command_frame(&poll)?);
    mock.push_command(fixtures::frame("0b 04 0102030405060708"));
    mock.push_command(fixtures::command_frame(0x04, &[]));

    assert!(emu.serve_one(&mut mock, 1000)?);
    // length byte says 11, frame has 10 bytes
    assert!(!emu.serve_one(&mut mock, 1000)?);
    assert!(emu.serve_one(&mut mock, 1000)?);
    assert!(!emu.serve_one(&mut mock, 1000)?);

    assert_eq!(mock.responses_sent.len(), 2);
    match decode_response_frame(&poll, &mock.responses_sent[0])? {
        Response::Polling {
            idm, system_code, ..
        } => {
            assert_eq!(idm, fixtures::sample_idm());
            assert_eq!(system_code, Some(SystemCode::NDEF));
        }
        other => panic!("expected polling response, got {:?}", other),
    }
    assert_eq!(mock.responses_sent[1], fixtures::command_frame(0x05, &[0]));
    Ok(())
}

#[test]
fn send_response_skips_ignored_commands() -> anyhow::Result<()> {
    let mut emu = Type3TagEmulation::ndef(fixtures::sample_idm(), fixtures::sample_pmm());
    let mut mock = MockTransport::new();
    assert!(!emu.send_response(&mut mock, &fixtures::command_frame(0x10, &[]))?);
    assert!(mock.responses_sent.is_empty());
    Ok(())
}

#[test]
fn emulated_tag_speaks_reader_protocol() -> anyhow::Result<()> {
    let mut tag = EmulatedTag::ndef(2, 2, 4);
    let poll = Command::Polling {
        system_code: SystemCode::NDEF,
        request_code: 0,
        time_slot: 0,
    };
    let frame = encode_command_frame(&poll)?;
    let raw = libtt3::transport::Transport::exchange(&mut tag, &frame, 10)?;
    assert!(matches!(
        decode_response_frame(&poll, &raw)?,
        Response::Polling {
            system_code: None,
            ..
        }
    ));
    assert_eq!(tag.emulation().system_code(), SystemCode::NDEF);
    Ok(())
}

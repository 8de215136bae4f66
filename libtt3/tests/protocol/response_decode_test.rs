use libtt3::protocol::codec::decode_response_frame;
use libtt3::protocol::{Command, Response};
use libtt3::types::{BlockAddress, ServiceCode, SystemCode};
use libtt3::Error;

use crate::common::fixtures;

fn read_cmd(blocks: usize) -> Command {
    Command::ReadWithoutEncryption {
        idm: fixtures::sample_idm(),
        services: vec![ServiceCode::NDEF_READ],
        blocks: (0..blocks as u16).map(BlockAddress::block).collect(),
    }
}

#[test]
fn polling_with_and_without_system_code() {
    let cmd = Command::Polling {
        system_code: SystemCode::ANY,
        request_code: 1,
        time_slot: 0,
    };
    match decode_response_frame(&cmd, &fixtures::polling_frame(Some(SystemCode::NDEF))).unwrap() {
        Response::Polling {
            idm,
            pmm,
            system_code,
        } => {
            assert_eq!(idm, fixtures::sample_idm());
            assert_eq!(pmm, fixtures::sample_pmm());
            assert_eq!(system_code, Some(SystemCode::NDEF));
        }
        other => panic!("expected polling response, got {:?}", other),
    }

    match decode_response_frame(&cmd, &fixtures::polling_frame(None)).unwrap() {
        Response::Polling { system_code, .. } => assert_eq!(system_code, None),
        other => panic!("expected polling response, got {:?}", other),
    }
}

#[test]
fn read_returns_block_bytes_in_order() {
    let mut params = vec![0, 0, 2];
    params.extend_from_slice(&[0x11; 16]);
    params.extend_from_slice(&[0x22; 16]);
    let frame = fixtures::command_frame(0x07, &params);

    match decode_response_frame(&read_cmd(2), &frame).unwrap() {
        Response::ReadWithoutEncryption { data, .. } => {
            assert_eq!(&data[..16], &[0x11; 16]);
            assert_eq!(&data[16..], &[0x22; 16]);
        }
        other => panic!("expected read response, got {:?}", other),
    }
}

#[test]
fn checks_run_in_wire_order() {
    // length byte first
    let mut frame = fixtures::command_frame(0x09, &[0xFF, 0xA2]);
    frame[0] += 1;
    assert!(matches!(
        decode_response_frame(&read_cmd(1), &frame),
        Err(Error::FrameFormat(_))
    ));

    // then response code
    let frame = fixtures::command_frame(0x09, &[0xFF, 0xA2]);
    assert!(matches!(
        decode_response_frame(&read_cmd(1), &frame),
        Err(Error::UnexpectedResponse {
            expected: 0x07,
            actual: 0x09
        })
    ));

    // then the echoed IDm
    let mut frame = fixtures::command_frame(0x07, &[0x01, 0xA6]);
    frame[9] ^= 0xFF;
    assert!(matches!(
        decode_response_frame(&read_cmd(1), &frame),
        Err(Error::IdmMismatch)
    ));

    // then the status flags
    let frame = fixtures::command_frame(0x07, &[0x01, 0xA6]);
    assert!(matches!(
        decode_response_frame(&read_cmd(1), &frame),
        Err(Error::FelicaStatus {
            status1: 0x01,
            status2: 0xA6
        })
    ));
}

#[test]
fn read_block_count_must_match_data() {
    let mut params = vec![0, 0, 2];
    params.extend_from_slice(&[0x11; 16]);
    let frame = fixtures::command_frame(0x07, &params);
    assert!(matches!(
        decode_response_frame(&read_cmd(2), &frame),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn request_system_code_lists_codes() {
    let cmd = Command::RequestSystemCode {
        idm: fixtures::sample_idm(),
    };
    let frame = fixtures::command_frame(0x0D, &[2, 0x12, 0xFC, 0x88, 0xB4]);
    match decode_response_frame(&cmd, &frame).unwrap() {
        Response::RequestSystemCode { system_codes, .. } => {
            assert_eq!(system_codes, vec![SystemCode::NDEF, SystemCode::new(0x88B4)]);
        }
        other => panic!("expected system code response, got {:?}", other),
    }
}

#[test]
fn request_response_reports_mode() {
    let cmd = Command::RequestResponse {
        idm: fixtures::sample_idm(),
    };
    let frame = fixtures::command_frame(0x05, &[0]);
    assert!(matches!(
        decode_response_frame(&cmd, &frame).unwrap(),
        Response::RequestResponse { mode: 0, .. }
    ));
}

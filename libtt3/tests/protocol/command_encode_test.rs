use libtt3::protocol::Command;
use libtt3::protocol::codec::encode_command_frame;
use libtt3::types::{BlockAddress, ServiceCode, SystemCode};

use crate::common::fixtures;

#[test]
fn polling_puts_system_code_msb_first() {
    let cmd = Command::Polling {
        system_code: SystemCode::NDEF,
        request_code: 1,
        time_slot: 3,
    };
    assert_eq!(
        encode_command_frame(&cmd).unwrap(),
        fixtures::frame("06 00 12 fc 01 03")
    );
}

#[test]
fn read_lists_services_lsb_first_and_short_addresses() {
    let cmd = Command::ReadWithoutEncryption {
        idm: fixtures::sample_idm(),
        services: vec![ServiceCode::NDEF_READ],
        blocks: vec![BlockAddress::block(0), BlockAddress::block(1)],
    };
    assert_eq!(
        encode_command_frame(&cmd).unwrap(),
        fixtures::frame("12 06 0102030405060708 01 0b00 02 8000 8001")
    );
}

#[test]
fn read_mixes_short_and_long_addresses() {
    let cmd = Command::ReadWithoutEncryption {
        idm: fixtures::sample_idm(),
        services: vec![ServiceCode::NDEF_READ, ServiceCode::new(0x1234)],
        blocks: vec![BlockAddress::new(1, 0xFF), BlockAddress::new(0, 0x0100)],
    };
    let frame = encode_command_frame(&cmd).unwrap();
    assert_eq!(frame[0] as usize, frame.len());
    assert_eq!(&frame[10..], &fixtures::frame("02 0b00 3412 02 81ff 000001")[..]);
}

#[test]
fn write_appends_block_data() {
    let cmd = Command::WriteWithoutEncryption {
        idm: fixtures::sample_idm(),
        services: vec![ServiceCode::NDEF_WRITE],
        blocks: vec![BlockAddress::block(1)],
        data: vec![0xAB; 16],
    };
    let frame = encode_command_frame(&cmd).unwrap();
    assert_eq!(frame.len(), 32);
    assert_eq!(frame[1], 0x08);
    assert_eq!(&frame[10..16], &[1, 0x09, 0x00, 1, 0x80, 1]);
    assert_eq!(&frame[16..], &[0xAB; 16]);
}

#[test]
fn request_commands_carry_only_the_idm() {
    let rr = Command::RequestResponse {
        idm: fixtures::sample_idm(),
    };
    assert_eq!(
        encode_command_frame(&rr).unwrap(),
        fixtures::frame("0a 04 0102030405060708")
    );
    let rs = Command::RequestSystemCode {
        idm: fixtures::sample_idm(),
    };
    assert_eq!(
        encode_command_frame(&rs).unwrap(),
        fixtures::frame("0a 0c 0102030405060708")
    );
}

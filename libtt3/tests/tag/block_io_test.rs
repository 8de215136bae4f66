use libtt3::Error;
use libtt3::tag::Type3Tag;
use libtt3::test_support::{self, EmulatedTag};
use libtt3::transport::MockTransport;
use libtt3::types::{BlockData, ServiceCode, SystemCode};

use crate::common::{self, fixtures};

fn tag() -> Type3Tag {
    Type3Tag::builder()
        .idm(fixtures::sample_idm())
        .pmm(fixtures::sample_pmm())
        .build()
        .unwrap()
}

#[test]
fn builder_and_test_support_agree() {
    assert_eq!(tag(), test_support::sample_tag());
    assert_eq!(tag().system_code(), SystemCode::NDEF);
}

#[test]
fn timeouts_follow_pmm() -> anyhow::Result<()> {
    common::init_logger();
    let tag = tag();
    // read byte 0x67: A=8, B=5, E=1
    assert_eq!(tag.timing().read_timeout(1), ((8.0 + 5.0) * 0.302 * 4.0_f64).floor() as u64 + 5);
    // write byte 0x4D: A=6, B=2, E=1
    assert_eq!(tag.timing().write_timeout(3), ((6.0 + 2.0 * 3.0) * 0.302 * 4.0_f64).floor() as u64 + 5);

    let mut mock = MockTransport::new();
    mock.push_response(test_support::read_response(&[0; 48]));
    tag.read_blocks(&mut mock, ServiceCode::NDEF_READ, &[0, 1, 2])?;
    assert_eq!(mock.timeouts, vec![tag.timing().read_timeout(3)]);
    Ok(())
}

#[test]
fn read_and_write_against_emulated_tag() -> anyhow::Result<()> {
    common::init_logger();
    let tag = tag();
    let mut emulated = EmulatedTag::ndef(4, 4, 8);

    let mut data = vec![0x5A; 16];
    data.extend_from_slice(&[0xA5; 16]);
    tag.write_blocks(&mut emulated, ServiceCode::NDEF_WRITE, &data, &[3, 4])?;
    assert_eq!(emulated.block(3), Some([0x5A; 16]));

    let blocks = tag.read_block_data(&mut emulated, ServiceCode::NDEF_READ, &[4, 3])?;
    assert_eq!(
        blocks,
        vec![BlockData::from_bytes([0xA5; 16]), BlockData::from_bytes([0x5A; 16])]
    );
    Ok(())
}

#[test]
fn emulated_tag_reports_access_errors() {
    let tag = tag();
    let mut emulated = EmulatedTag::ndef(4, 4, 8);

    // block 9 is outside the data area
    match tag.read_blocks(&mut emulated, ServiceCode::NDEF_READ, &[1, 9]) {
        Err(Error::FelicaStatus {
            status1: 0x02,
            status2: 0xA2,
        }) => {}
        other => panic!("expected FelicaStatus, got {:?}", other),
    }

    // the NDEF read service has no write side
    match tag.write_blocks(&mut emulated, ServiceCode::NDEF_READ, &[0; 16], &[1]) {
        Err(Error::FelicaStatus {
            status1: 0x01,
            status2: 0xA2,
        }) => {}
        other => panic!("expected FelicaStatus, got {:?}", other),
    }

    match tag.read_blocks(&mut emulated, ServiceCode::new(0x1234), &[0]) {
        Err(Error::FelicaStatus {
            status1: 0xFF,
            status2: 0xA1,
        }) => {}
        other => panic!("expected FelicaStatus, got {:?}", other),
    }
}

#[test]
fn write_length_is_checked_before_sending() {
    let tag = tag();
    let mut mock = MockTransport::new();
    match tag.write_blocks(&mut mock, ServiceCode::NDEF_WRITE, &[0; 20], &[1, 2]) {
        Err(Error::InvalidDataLength {
            expected: 32,
            actual: 20,
        }) => {}
        other => panic!("expected InvalidDataLength, got {:?}", other),
    }
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn presence_check() {
    let tag = tag();
    let mut emulated = EmulatedTag::ndef(1, 1, 1);
    assert!(tag.is_present(&mut emulated));
    assert_eq!(emulated.sent.len(), 1);

    let mut silent = MockTransport::new();
    assert!(!tag.is_present(&mut silent));
    // request response, then polling
    assert_eq!(silent.sent.len(), 2);
    assert_eq!(silent.sent[1], fixtures::frame("06 00 12 fc 00 00"));
}

#[test]
fn ndef_requires_ndef_system_code() {
    let tag = Type3Tag::new(
        fixtures::sample_idm(),
        fixtures::sample_pmm(),
        SystemCode::new(0x88B4),
    );
    let mut emulated = EmulatedTag::ndef(1, 1, 1);
    assert!(matches!(tag.ndef(&mut emulated), Err(Error::NoNdef)));
    assert!(emulated.sent.is_empty());
}

use std::cell::RefCell;
use std::rc::Rc;

use libtt3::emulation::{Type3TagEmulation, read_only, write_only};
use libtt3::types::{BlockData, ServiceCode, SystemCode};

use crate::common::fixtures;

type Calls = Rc<RefCell<Vec<String>>>;

fn emulation(calls: &Calls) -> Type3TagEmulation {
    let mut emu = Type3TagEmulation::new(
        fixtures::sample_idm(),
        fixtures::sample_pmm(),
        SystemCode::new(0x88B4),
    );
    let reads = calls.clone();
    emu.register_service(
        ServiceCode::new(0x000B),
        move |block: u16, begin: bool, end: bool| {
            reads.borrow_mut().push(format!("r{} {} {}", block, begin, end));
            (block < 4).then(|| BlockData::from_bytes([block as u8; 16]))
        },
        read_only,
    );
    let writes = calls.clone();
    emu.register_service(
        ServiceCode::new(0x0009),
        write_only,
        move |block: u16, data: &BlockData, begin: bool, end: bool| {
            writes
                .borrow_mut()
                .push(format!("w{}={:02x} {} {}", block, data.as_bytes()[0], begin, end));
            true
        },
    );
    emu
}

#[test]
fn polling_ignores_other_systems() {
    let calls = Calls::default();
    let mut emu = emulation(&calls);
    assert!(emu.process(&fixtures::frame("06 00 12 fc 00 00")).is_none());
    assert_eq!(
        emu.process(&fixtures::frame("06 00 88 b4 01 00")).unwrap(),
        fixtures::polling_frame(Some(SystemCode::new(0x88B4)))
    );
    assert_eq!(
        emu.process(&fixtures::frame("06 00 ff ff 00 0f")).unwrap(),
        fixtures::polling_frame(None)
    );
}

#[test]
fn request_system_code_answers_own_code() {
    let calls = Calls::default();
    let mut emu = emulation(&calls);
    assert_eq!(
        emu.process(&fixtures::command_frame(0x0C, &[])).unwrap(),
        fixtures::command_frame(0x0D, &[1, 0x88, 0xB4])
    );
}

#[test]
fn multi_block_read_brackets_callbacks() {
    let calls = Calls::default();
    let mut emu = emulation(&calls);
    let rsp = emu
        .process(&fixtures::command_frame(0x06, &fixtures::frame("01 0b00 03 8000 8001 8002")))
        .unwrap();

    let mut body = vec![0, 0, 3];
    for n in 0..3u8 {
        body.extend_from_slice(&[n; 16]);
    }
    assert_eq!(rsp, fixtures::command_frame(0x07, &body));
    assert_eq!(
        *calls.borrow(),
        vec!["r0 true false", "r1 false false", "r2 false true"]
    );
}

#[test]
fn read_stops_at_first_failed_block() {
    let calls = Calls::default();
    let mut emu = emulation(&calls);
    let rsp = emu
        .process(&fixtures::command_frame(0x06, &fixtures::frame("01 0b00 03 8003 8004 8005")))
        .unwrap();
    assert_eq!(rsp, fixtures::command_frame(0x07, &[0x02, 0xA2, 0x00]));
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn unknown_service_invokes_nothing() {
    let calls = Calls::default();
    let mut emu = emulation(&calls);
    let rsp = emu
        .process(&fixtures::command_frame(0x06, &fixtures::frame("01 9900 01 8000")))
        .unwrap();
    assert_eq!(rsp, fixtures::command_frame(0x07, &[0xFF, 0xA1]));
    assert!(calls.borrow().is_empty());
}

#[test]
fn service_index_out_of_range() {
    let calls = Calls::default();
    let mut emu = emulation(&calls);
    let rsp = emu
        .process(&fixtures::command_frame(0x06, &fixtures::frame("01 0b00 01 8100")))
        .unwrap();
    assert_eq!(rsp, fixtures::command_frame(0x07, &[0x01, 0xA3]));
}

#[test]
fn write_with_duplicated_service_code_tracks_entries() {
    let calls = Calls::default();
    let mut emu = emulation(&calls);
    // the service list names 0x0009 twice; blocks alternate between the entries
    let mut params = fixtures::frame("02 0900 0900 03 8001 8102 8003");
    for fill in [0xA0u8, 0xB0, 0xC0] {
        params.extend_from_slice(&[fill; 16]);
    }
    let rsp = emu.process(&fixtures::command_frame(0x08, &params)).unwrap();
    assert_eq!(rsp, fixtures::command_frame(0x09, &[0, 0]));
    assert_eq!(
        *calls.borrow(),
        vec!["w1=a0 true false", "w2=b0 false false", "w3=c0 false true"]
    );
}

#[test]
fn write_with_partial_block_is_rejected() {
    let calls = Calls::default();
    let mut emu = emulation(&calls);
    let mut params = fixtures::frame("01 0900 01 8001");
    params.extend_from_slice(&[0; 17]);
    let rsp = emu.process(&fixtures::command_frame(0x08, &params)).unwrap();
    assert_eq!(rsp, fixtures::command_frame(0x09, &[0xFF, 0xA2]));
    assert!(calls.borrow().is_empty());
}

#[test]
fn surplus_write_blocks_are_ignored() {
    let calls = Calls::default();
    let mut emu = emulation(&calls);
    let mut params = fixtures::frame("01 0900 01 8001");
    params.extend_from_slice(&[0x11; 16]);
    params.extend_from_slice(&[0x22; 16]);
    let rsp = emu.process(&fixtures::command_frame(0x08, &params)).unwrap();
    assert_eq!(rsp, fixtures::command_frame(0x09, &[0, 0]));
    assert_eq!(*calls.borrow(), vec!["w1=11 true true"]);
}

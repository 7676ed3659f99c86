//! Shared access integration tests
//!
//! A configured superframe is read from many threads at once while request
//! class indices are assigned exactly once per slot.

use std::sync::Arc;
use std::thread;

use integration_tests::{configured_two_frame_superframe, init_test_logging};
use satsim_frame::{FrameError, SuperframeConf};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_configured_superframe_is_send_sync() {
    assert_send_sync::<SuperframeConf>();
}

#[test]
fn test_concurrent_reads() {
    init_test_logging();

    let superframe = Arc::new(configured_two_frame_superframe());
    let expected: Vec<(u8, u16)> = (0..10)
        .map(|c| superframe.resolve_carrier(c).unwrap())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let superframe = Arc::clone(&superframe);
            thread::spawn(move || {
                (0..10)
                    .map(|c| superframe.resolve_carrier(c).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_rc_index_assigned_once_under_contention() {
    let superframe = Arc::new(configured_two_frame_superframe());
    let writers = 4u8;

    let handles: Vec<_> = (0..writers)
        .map(|rc| {
            let superframe = Arc::clone(&superframe);
            thread::spawn(move || {
                let frame = superframe.frame(0).unwrap();
                let mut won = 0usize;
                for index in 0..frame.time_slot_count() {
                    match frame.time_slot(index).unwrap().set_rc_index(rc) {
                        Ok(()) => won += 1,
                        Err(FrameError::RequestClassAlreadySet(_)) => {}
                        Err(e) => panic!("unexpected error: {e}"),
                    }
                }
                won
            })
        })
        .collect();

    let total_won: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    let frame = superframe.frame(0).unwrap();
    assert_eq!(total_won, usize::from(frame.time_slot_count()));

    for index in 0..frame.time_slot_count() {
        let rc = frame.time_slot(index).unwrap().rc_index();
        assert!(rc.is_some_and(|rc| rc < writers));
    }
}

#[test]
fn test_ra_slots_untouched_by_dedicated_assignment() {
    let superframe = configured_two_frame_superframe();
    for slot in superframe.ra_slots(0).unwrap() {
        assert_eq!(slot.rc_index(), None);
    }

    let frame = superframe.frame(0).unwrap();
    frame.time_slot(0).unwrap().set_rc_index(1).unwrap();
    assert!(superframe.ra_slots(0).unwrap().iter().all(|s| s.rc_index().is_none()));
}

//! Superframe scenario integration tests
//!
//! Builds presets and custom layouts end to end and checks the carrier,
//! time slot and random access views across frames.

use std::time::Duration;

use approx::assert_relative_eq;
use integration_tests::{
    configured_two_frame_superframe, init_test_logging, test_waveform_table, two_frame_superframe,
    DEDICATED_WAVEFORM_ID, RA_WAVEFORM_ID, TEST_TARGET_DURATION,
};
use satsim_frame::{
    BtuConf, CarrierBandwidthType, ConfigType, FrameConf, FrameError, FrameSlot, SuperframeConf,
    SuperframeState, TimeSlotConf, TimeSlotConfMap,
};

#[test]
fn test_btu_scenario() {
    let btu = BtuConf::new(1.25e6, 0.2, 0.22).unwrap();
    assert_relative_eq!(btu.occupied_bandwidth_hz(), 1.0417e6, max_relative = 1e-4);
    assert_relative_eq!(btu.effective_bandwidth_hz(), 0.8538e6, max_relative = 1e-4);
    assert_relative_eq!(btu.symbol_rate_baud(), btu.effective_bandwidth_hz());
}

#[test]
fn test_two_frame_carrier_mapping() {
    init_test_logging();

    let superframe = configured_two_frame_superframe();
    assert_eq!(superframe.carrier_count().unwrap(), 10);

    for carrier_id in 0..8 {
        assert_eq!(superframe.frame_of(carrier_id).unwrap(), 0);
    }
    for carrier_id in 8..10 {
        assert_eq!(superframe.frame_of(carrier_id).unwrap(), 1);
    }

    assert_eq!(superframe.ra_channel_count().unwrap(), 2);
    let ra_carriers: Vec<u32> = (0..2)
        .map(|ra| superframe.ra_channel_carrier_id(ra).unwrap())
        .collect();
    assert_eq!(ra_carriers, vec![8, 9]);
}

#[test]
fn test_global_carrier_ranges_are_contiguous() {
    let table = test_waveform_table();
    for config_type in ConfigType::ALL {
        let mut superframe = SuperframeConf::new(config_type);
        superframe
            .configure(50.0e6, TEST_TARGET_DURATION, &table)
            .unwrap();

        let mut expected_base = 0;
        for (frame_id, frame) in superframe.frames().unwrap().iter().enumerate() {
            let frame_id = frame_id as u8;
            assert_eq!(superframe.frame_carrier_base(frame_id).unwrap(), expected_base);
            for local in 0..frame.carrier_count() {
                let global = superframe.carrier_id(frame_id, local).unwrap();
                assert_eq!(global, expected_base + u32::from(local));
                assert_eq!(superframe.frame_of(global).unwrap(), frame_id);
            }
            expected_base += u32::from(frame.carrier_count());
        }
        assert_eq!(superframe.carrier_count().unwrap(), expected_base);
    }
}

#[test]
fn test_ra_channels_follow_random_access_frames() {
    let table = test_waveform_table();
    for config_type in ConfigType::ALL {
        let mut superframe = SuperframeConf::new(config_type);
        superframe
            .configure(50.0e6, TEST_TARGET_DURATION, &table)
            .unwrap();

        let frames = superframe.frames().unwrap();
        let expected: u32 = frames
            .iter()
            .filter(|f| f.is_random_access())
            .map(|f| u32::from(f.carrier_count()))
            .sum();
        assert_eq!(superframe.ra_channel_count().unwrap(), expected, "{config_type}");

        for ra in 0..expected {
            let frame_id = superframe.ra_channel_frame_id(ra).unwrap();
            assert!(superframe.frame(frame_id).unwrap().is_random_access());
            let carrier = superframe.ra_channel_carrier_id(ra).unwrap();
            assert!(superframe.is_random_access_carrier(carrier).unwrap());
            assert_eq!(superframe.ra_channel_payload_in_bytes(ra).unwrap(), 38);
        }
    }
}

#[test]
fn test_frame_slot_indices_round_trip() {
    let superframe = configured_two_frame_superframe();
    for frame in superframe.frames().unwrap() {
        let total = frame.time_slot_count();
        let per_carrier: u16 = (0..frame.carrier_count())
            .map(|c| frame.time_slots(c).unwrap().len() as u16)
            .sum();
        assert_eq!(per_carrier, total);

        let mut index = 0;
        for carrier_id in 0..frame.carrier_count() {
            for local in 0..frame.time_slots(carrier_id).unwrap().len() as u16 {
                assert_eq!(frame.locate_time_slot(index).unwrap(), (carrier_id, local));
                assert_eq!(
                    frame.time_slot(index).unwrap(),
                    frame.carrier_time_slot(carrier_id, local).unwrap()
                );
                index += 1;
            }
        }
        assert!(frame.time_slot(total).is_err());
    }
}

#[test]
fn test_waveform_selection_per_frame() {
    let superframe = configured_two_frame_superframe();
    assert_eq!(superframe.frame_waveform_id(0).unwrap(), DEDICATED_WAVEFORM_ID);
    assert_eq!(superframe.frame_waveform_id(1).unwrap(), RA_WAVEFORM_ID);

    let frame = superframe.frame(1).unwrap();
    assert!(frame
        .time_slots(0)
        .unwrap()
        .iter()
        .all(|slot| slot.waveform_id() == RA_WAVEFORM_ID));
}

#[test]
fn test_frame_duration_is_elapsed_burst_time() {
    let superframe = configured_two_frame_superframe();
    assert_eq!(superframe.frame(0).unwrap().duration(), Duration::from_millis(10));
    assert_eq!(superframe.frame(1).unwrap().duration(), Duration::from_millis(9));
    assert_eq!(superframe.duration().unwrap(), Duration::from_millis(10));

    for frame in superframe.frames().unwrap() {
        for carrier_id in 0..frame.carrier_count() {
            for slot in frame.time_slots(carrier_id).unwrap() {
                assert!(slot.start_time() < frame.duration());
            }
        }
    }
}

#[test]
fn test_carrier_bandwidth_across_frames() {
    let superframe = configured_two_frame_superframe();
    assert_relative_eq!(
        superframe
            .carrier_bandwidth_hz(3, CarrierBandwidthType::Allocated)
            .unwrap(),
        1.25e6
    );
    assert_relative_eq!(
        superframe
            .carrier_bandwidth_hz(8, CarrierBandwidthType::Occupied)
            .unwrap(),
        1.0e6 / 1.2,
        max_relative = 1e-12
    );
    assert_relative_eq!(superframe.carrier_frequency_hz(8).unwrap(), 10.5e6);
}

#[test]
fn test_queries_are_repeatable() {
    let superframe = configured_two_frame_superframe();
    for carrier_id in 0..10 {
        assert_eq!(
            superframe.resolve_carrier(carrier_id).unwrap(),
            superframe.resolve_carrier(carrier_id).unwrap()
        );
        assert_eq!(
            superframe.carrier_frequency_hz(carrier_id).unwrap(),
            superframe.carrier_frequency_hz(carrier_id).unwrap()
        );
    }
    assert_eq!(superframe.ra_slots(0).unwrap(), superframe.ra_slots(0).unwrap());
}

#[test]
fn test_lifecycle() {
    let mut superframe = two_frame_superframe();
    assert_eq!(superframe.state(), SuperframeState::Unconfigured);
    assert_eq!(superframe.ra_channel_count(), Err(FrameError::NotReady));

    superframe
        .configure(12.0e6, TEST_TARGET_DURATION, &test_waveform_table())
        .unwrap();
    assert_eq!(superframe.state(), SuperframeState::Configured);
    assert_eq!(
        superframe.set_frame_random_access(FrameSlot::new(0).unwrap(), true),
        Err(FrameError::AlreadyConfigured)
    );
}

#[test]
fn test_capacity_exceeded_is_fatal_and_atomic() {
    let mut superframe = SuperframeConf::new(ConfigType::Type3);
    let err = superframe
        .configure(50.0e6, Duration::from_millis(100), &test_waveform_table())
        .unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(superframe.state(), SuperframeState::Unconfigured);
    assert!(superframe.frames().is_err());
}

#[test]
fn test_frame_time_slot_boundary() {
    let btu = BtuConf::new(1.0e6, 0.2, 0.3).unwrap();
    let slots: Vec<TimeSlotConf> = (0..FrameConf::MAX_TIME_SLOT_COUNT as u32)
        .map(|i| TimeSlotConf::new(Duration::from_micros(u64::from(i)), 1, 0))
        .collect();
    let frame = FrameConf::new(
        1.0e6,
        Duration::from_millis(10),
        btu,
        TimeSlotConfMap::from([(0, slots)]),
        false,
    )
    .unwrap();

    assert!(frame.time_slot(FrameConf::MAX_TIME_SLOT_INDEX).is_ok());
    assert!(matches!(
        frame.time_slot(2048),
        Err(FrameError::OutOfRange { index: 2048, .. })
    ));
}

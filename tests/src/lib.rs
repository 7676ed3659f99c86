//! Integration test support for satsim
#![allow(missing_docs)]
//!
//! Shared fixtures for the scenario-level tests of the return link frame
//! configuration.
//!
//! # Test Categories
//!
//! 1. **Superframe Scenarios** - Building presets and custom layouts, carrier and RA queries
//! 2. **Configuration Loading** - YAML configuration to a configured superframe
//! 3. **Shared Access** - Concurrent reads and request class assignment

use std::collections::BTreeMap;
use std::time::Duration;

use satsim_common::ReturnLinkConfig;
use satsim_frame::{
    ConfigType, FrameAttributes, FrameError, FrameSlot, SuperframeConf, WaveformBurst,
    WaveformConf,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Dedicated waveform: 1 ms bursts carrying 118 bytes
pub const DEDICATED_WAVEFORM_ID: u32 = 3;

/// Random access waveform: 1.5 ms bursts carrying 38 bytes
pub const RA_WAVEFORM_ID: u32 = 2;

/// Target superframe duration used by the fixtures
pub const TEST_TARGET_DURATION: Duration = Duration::from_millis(10);

/// Initialize logging for tests
///
/// Uses RUST_LOG environment variable if set, otherwise defaults to "info"
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// Waveform table with a dedicated and a random access waveform
pub fn test_waveform_table() -> WaveformConf {
    let waveforms = BTreeMap::from([
        (
            RA_WAVEFORM_ID,
            WaveformBurst {
                burst_duration: Duration::from_micros(1_500),
                payload_bytes: 38,
            },
        ),
        (
            DEDICATED_WAVEFORM_ID,
            WaveformBurst {
                burst_duration: Duration::from_millis(1),
                payload_bytes: 118,
            },
        ),
    ]);
    WaveformConf::with_random_access_waveform(waveforms, DEDICATED_WAVEFORM_ID, RA_WAVEFORM_ID)
        .expect("test waveform table is valid")
}

/// Unconfigured superframe with two frames over 12 MHz:
/// 10 MHz of 1.25 MHz dedicated carriers and 2 MHz of 1 MHz RA carriers.
pub fn two_frame_superframe() -> SuperframeConf {
    let mut superframe = SuperframeConf::new(ConfigType::Type0);
    superframe.set_frame_count(2).expect("frame count fits");
    superframe
        .set_frame_attributes(
            FrameSlot::new(0).expect("valid slot"),
            FrameAttributes {
                allocated_bandwidth_hz: 10.0e6,
                carrier_allocated_bandwidth_hz: 1.25e6,
                ..FrameAttributes::default()
            },
        )
        .expect("unconfigured");
    superframe
        .set_frame_attributes(
            FrameSlot::new(1).expect("valid slot"),
            FrameAttributes {
                allocated_bandwidth_hz: 2.0e6,
                carrier_allocated_bandwidth_hz: 1.0e6,
                random_access: true,
                ..FrameAttributes::default()
            },
        )
        .expect("unconfigured");
    superframe
}

/// The two frame superframe, configured against the test waveform table
pub fn configured_two_frame_superframe() -> SuperframeConf {
    let mut superframe = two_frame_superframe();
    superframe
        .configure(12.0e6, TEST_TARGET_DURATION, &test_waveform_table())
        .expect("two frame superframe configures");
    superframe
}

/// Builds the waveform table and configured superframe described by a
/// return link configuration.
pub fn configure_from(
    config: &ReturnLinkConfig,
) -> Result<(SuperframeConf, WaveformConf), FrameError> {
    let waveforms = WaveformConf::from_config(&config.waveforms)?;
    let mut superframe = SuperframeConf::from_config(&config.superframe)?;
    superframe.configure(
        config.total_bandwidth_hz,
        config.target_duration(),
        &waveforms,
    )?;
    info!(
        config_type = %superframe.config_type(),
        waveforms = waveforms.len(),
        "Test superframe configured from return link config"
    );
    Ok((superframe, waveforms))
}

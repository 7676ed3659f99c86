//! Return link configuration structures
//!
//! Raw, serde-deserializable configuration for the return link frame
//! structure: the total spectrum and target superframe duration, the selected
//! superframe preset with optional per-frame overrides, and the waveform table.
//! These types only carry values; `satsim-frame` turns them into validated
//! domain objects.
//!
//! # Example
//!
//! ```
//! use satsim_common::config::load_return_link_config_from_str;
//!
//! let yaml = r#"
//! total_bandwidth_hz: 12.0e6
//! target_duration_us: 10000
//! superframe:
//!   config_type: 0
//! waveforms:
//!   default_waveform_id: 3
//!   entries:
//!     - id: 3
//!       burst_duration_us: 500
//!       payload_bytes: 118
//! "#;
//! let config = load_return_link_config_from_str(yaml).unwrap();
//! assert_eq!(config.superframe.config_type, 0);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Maximum number of frames a superframe can hold.
pub const MAX_FRAME_COUNT: usize = 10;

/// Number of predefined superframe configuration types.
pub const CONFIG_TYPE_COUNT: u8 = 4;

/// Complete return link frame configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnLinkConfig {
    /// Total spectrum available to the superframe in hertz
    pub total_bandwidth_hz: f64,
    /// Target superframe duration in microseconds
    pub target_duration_us: u64,
    /// Superframe preset selection and overrides
    pub superframe: SuperframeConfig,
    /// Waveform table
    pub waveforms: WaveformTableConfig,
}

impl ReturnLinkConfig {
    /// Returns the target superframe duration.
    pub fn target_duration(&self) -> Duration {
        Duration::from_micros(self.target_duration_us)
    }

    /// Performs shape checks that do not need the preset tables.
    ///
    /// Cross-frame consistency (bandwidth oversubscription, carrier counts,
    /// slot capacity) is checked when the superframe is configured.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.total_bandwidth_hz.is_finite() && self.total_bandwidth_hz > 0.0) {
            return Err(Error::Config(format!(
                "total_bandwidth_hz must be > 0, got {}",
                self.total_bandwidth_hz
            )));
        }
        if self.target_duration_us == 0 {
            return Err(Error::Config("target_duration_us must be > 0".to_string()));
        }
        self.superframe.validate()?;
        self.waveforms.validate()
    }
}

/// Superframe preset selection with optional overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperframeConfig {
    /// Predefined configuration type (0-3)
    pub config_type: u8,
    /// Number of active frames; defaults to the preset's frame count
    #[serde(default)]
    pub frame_count: Option<u8>,
    /// Per-frame attribute overrides applied on top of the preset
    #[serde(default)]
    pub frames: Vec<FrameConfig>,
}

impl SuperframeConfig {
    fn validate(&self) -> Result<(), Error> {
        if self.config_type >= CONFIG_TYPE_COUNT {
            return Err(Error::Config(format!(
                "config_type must be 0-{}, got {}",
                CONFIG_TYPE_COUNT - 1,
                self.config_type
            )));
        }
        if let Some(count) = self.frame_count {
            if usize::from(count) > MAX_FRAME_COUNT {
                return Err(Error::Config(format!(
                    "frame_count {count} exceeds the maximum of {MAX_FRAME_COUNT}"
                )));
            }
        }
        for frame in &self.frames {
            if usize::from(frame.index) >= MAX_FRAME_COUNT {
                return Err(Error::Config(format!(
                    "frame index {} out of range (0-{})",
                    frame.index,
                    MAX_FRAME_COUNT - 1
                )));
            }
        }
        Ok(())
    }
}

/// Attribute overrides for one frame slot. Absent fields keep the preset value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Frame slot index (0-9)
    pub index: u8,
    /// Bandwidth allocated to the whole frame in hertz
    #[serde(default)]
    pub allocated_bandwidth_hz: Option<f64>,
    /// Bandwidth allocated to one carrier in hertz
    #[serde(default)]
    pub carrier_allocated_bandwidth_hz: Option<f64>,
    /// Carrier spacing factor
    #[serde(default)]
    pub carrier_spacing: Option<f64>,
    /// Carrier roll-off factor
    #[serde(default)]
    pub carrier_roll_off: Option<f64>,
    /// Whether the frame carries random access channels
    #[serde(default)]
    pub random_access: Option<bool>,
    /// Waveform used for the frame's time slots
    #[serde(default)]
    pub waveform_id: Option<u32>,
}

/// Waveform table configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformTableConfig {
    /// Waveform used by dedicated frames
    pub default_waveform_id: u32,
    /// Waveform used by random access frames; defaults to the default waveform
    #[serde(default)]
    pub random_access_waveform_id: Option<u32>,
    /// All known waveforms
    pub entries: Vec<WaveformEntryConfig>,
}

impl WaveformTableConfig {
    fn validate(&self) -> Result<(), Error> {
        if self.entries.is_empty() {
            return Err(Error::Config("waveform table has no entries".to_string()));
        }
        for entry in &self.entries {
            if entry.burst_duration_us == 0 {
                return Err(Error::Config(format!(
                    "waveform {} has zero burst duration",
                    entry.id
                )));
            }
        }
        Ok(())
    }
}

/// One waveform of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveformEntryConfig {
    /// Waveform id
    pub id: u32,
    /// Burst duration in microseconds
    pub burst_duration_us: u64,
    /// Payload carried by one burst in bytes
    pub payload_bytes: u32,
}

impl WaveformEntryConfig {
    /// Returns the burst duration.
    pub fn burst_duration(&self) -> Duration {
        Duration::from_micros(self.burst_duration_us)
    }
}

/// Loads a return link configuration from a YAML file and validates its shape.
pub fn load_return_link_config<P: AsRef<Path>>(path: P) -> Result<ReturnLinkConfig, Error> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_return_link_config_from_str(&contents)
}

/// Loads a return link configuration from a YAML string and validates its shape.
pub fn load_return_link_config_from_str(yaml: &str) -> Result<ReturnLinkConfig, Error> {
    let config: ReturnLinkConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

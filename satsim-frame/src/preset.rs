//! Predefined superframe configurations
//!
//! Four standard channelizations of a 50 MHz return link channel. A preset
//! only fills the superframe's per-frame attribute table; the build itself
//! is shared by all of them.

use std::fmt;

use crate::error::FrameError;
use crate::superframe::FrameAttributes;

const ROLL_OFF: f64 = 0.2;
const SPACING: f64 = 0.3;

const fn frame(
    allocated_bandwidth_hz: f64,
    carrier_allocated_bandwidth_hz: f64,
) -> FrameAttributes {
    FrameAttributes {
        allocated_bandwidth_hz,
        carrier_allocated_bandwidth_hz,
        carrier_spacing: SPACING,
        carrier_roll_off: ROLL_OFF,
        random_access: false,
        waveform_id: None,
    }
}

const fn ra_frame(
    allocated_bandwidth_hz: f64,
    carrier_allocated_bandwidth_hz: f64,
) -> FrameAttributes {
    FrameAttributes {
        random_access: true,
        ..frame(allocated_bandwidth_hz, carrier_allocated_bandwidth_hz)
    }
}

/// One dedicated frame of 40 carriers.
const CONFIG_0: [FrameAttributes; 1] = [frame(50.0e6, 1.25e6)];

/// Dedicated frame plus a random access frame.
const CONFIG_1: [FrameAttributes; 2] = [frame(40.0e6, 1.25e6), ra_frame(10.0e6, 1.25e6)];

/// Two dedicated carrier widths plus a random access frame.
const CONFIG_2: [FrameAttributes; 3] = [
    frame(30.0e6, 1.25e6),
    frame(15.0e6, 2.5e6),
    ra_frame(5.0e6, 1.25e6),
];

/// Three dedicated carrier widths plus a random access frame.
const CONFIG_3: [FrameAttributes; 4] = [
    frame(20.0e6, 0.625e6),
    frame(20.0e6, 1.25e6),
    frame(5.0e6, 2.5e6),
    ra_frame(5.0e6, 1.25e6),
];

/// Superframe configuration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConfigType {
    /// Configuration type 0
    #[default]
    Type0,
    /// Configuration type 1
    Type1,
    /// Configuration type 2
    Type2,
    /// Configuration type 3
    Type3,
}

impl ConfigType {
    /// All configuration types in index order
    pub const ALL: [ConfigType; 4] = [
        ConfigType::Type0,
        ConfigType::Type1,
        ConfigType::Type2,
        ConfigType::Type3,
    ];

    /// Configuration type by index (0-3).
    pub fn from_index(index: u8) -> Result<Self, FrameError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| {
                FrameError::out_of_range("config type", usize::from(index), Self::ALL.len())
            })
    }

    /// Index of the configuration type
    pub fn index(self) -> u8 {
        match self {
            ConfigType::Type0 => 0,
            ConfigType::Type1 => 1,
            ConfigType::Type2 => 2,
            ConfigType::Type3 => 3,
        }
    }

    /// Per-frame attributes of the preset, one entry per active frame
    pub fn preset(self) -> &'static [FrameAttributes] {
        match self {
            ConfigType::Type0 => &CONFIG_0,
            ConfigType::Type1 => &CONFIG_1,
            ConfigType::Type2 => &CONFIG_2,
            ConfigType::Type3 => &CONFIG_3,
        }
    }

    /// Number of frames in the preset
    pub fn frame_count(self) -> u8 {
        self.preset().len() as u8
    }

    /// Bandwidth allocated by all frames of the preset in hertz
    pub fn allocated_bandwidth_hz(self) -> f64 {
        self.preset().iter().map(|f| f.allocated_bandwidth_hz).sum()
    }
}

impl TryFrom<u8> for ConfigType {
    type Error = FrameError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CONFIG_TYPE_{}", self.index())
    }
}

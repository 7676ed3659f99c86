//! Return link frame configuration
#![allow(missing_docs)]
//!
//! Describes how a return link channel is divided in frequency and time for
//! multiple access: a superframe holds frames, a frame holds carriers of one
//! bandwidth time unit (BTU) each, and every carrier holds time slots.
//!
//! # Modules
//!
//! - [`btu`] - Carrier bandwidth model (allocated, occupied, effective)
//! - [`time_slot`] - Time slot configuration and request class assignment
//! - [`frame`] - Frame configuration and time slot indexing
//! - [`superframe`] - Superframe attributes, configuration and carrier queries
//! - [`preset`] - The four predefined superframe layouts
//! - [`waveform`] - Waveform table collaborator
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use std::time::Duration;
//!
//! use satsim_frame::{ConfigType, SuperframeConf, WaveformBurst, WaveformConf};
//!
//! let waveforms = WaveformConf::new(
//!     BTreeMap::from([(
//!         3,
//!         WaveformBurst {
//!             burst_duration: Duration::from_millis(1),
//!             payload_bytes: 118,
//!         },
//!     )]),
//!     3,
//! )
//! .unwrap();
//!
//! let mut superframe = SuperframeConf::new(ConfigType::Type1);
//! superframe
//!     .configure(50.0e6, Duration::from_millis(10), &waveforms)
//!     .unwrap();
//!
//! assert_eq!(superframe.carrier_count().unwrap(), 40);
//! assert_eq!(superframe.ra_channel_count().unwrap(), 8);
//! ```

pub mod btu;
pub mod error;
pub mod frame;
pub mod preset;
pub mod superframe;
pub mod time_slot;
pub mod waveform;

pub use btu::{BtuConf, CarrierBandwidthType};
pub use error::FrameError;
pub use frame::{FrameConf, TimeSlotConfMap};
pub use preset::ConfigType;
pub use superframe::{
    frame_name, FrameAttributes, FrameSlot, RaChannel, SuperframeConf, SuperframeState,
};
pub use time_slot::TimeSlotConf;
pub use waveform::{WaveformBurst, WaveformConf, WaveformId, WaveformTable};

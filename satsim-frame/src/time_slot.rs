//! Time slot configuration
//!
//! A time slot is one transmission opportunity inside a frame carrier. All of
//! its fields are fixed at construction except the request class (RC) index,
//! which the scheduler assigns once after the frame structure is built.

use std::sync::OnceLock;
use std::time::Duration;

use crate::error::FrameError;
use crate::waveform::WaveformId;

/// Configuration of one time slot.
#[derive(Debug, Clone)]
pub struct TimeSlotConf {
    start_time: Duration,
    waveform_id: WaveformId,
    carrier_id: u16,
    rc_index: OnceLock<u8>,
}

impl TimeSlotConf {
    /// Creates a time slot.
    ///
    /// * `start_time` - Offset of the slot from the start of its frame
    /// * `waveform_id` - Waveform transmitted in the slot
    /// * `carrier_id` - Carrier of the slot, local to its frame
    pub fn new(start_time: Duration, waveform_id: WaveformId, carrier_id: u16) -> Self {
        Self {
            start_time,
            waveform_id,
            carrier_id,
            rc_index: OnceLock::new(),
        }
    }

    /// Start time of the slot inside its frame
    pub fn start_time(&self) -> Duration {
        self.start_time
    }

    /// Waveform id of the slot
    pub fn waveform_id(&self) -> WaveformId {
        self.waveform_id
    }

    /// Carrier id of the slot inside its frame
    pub fn carrier_id(&self) -> u16 {
        self.carrier_id
    }

    /// Request class index, if the scheduler has assigned one
    pub fn rc_index(&self) -> Option<u8> {
        self.rc_index.get().copied()
    }

    /// Assigns the request class index.
    ///
    /// The index can be written once. Concurrent writers race safely: exactly
    /// one succeeds and the others get `RequestClassAlreadySet`.
    pub fn set_rc_index(&self, rc_index: u8) -> Result<(), FrameError> {
        self.rc_index
            .set(rc_index)
            .map_err(|_| FrameError::RequestClassAlreadySet(self.rc_index().unwrap_or(rc_index)))
    }
}

impl PartialEq for TimeSlotConf {
    fn eq(&self, other: &Self) -> bool {
        self.start_time == other.start_time
            && self.waveform_id == other.waveform_id
            && self.carrier_id == other.carrier_id
            && self.rc_index() == other.rc_index()
    }
}

//! Frame configuration
//!
//! A frame is a frequency sub-band of the superframe. It is divided into
//! carriers of equal width (one BTU each), and every carrier into an ordered
//! sequence of time slots.
//!
//! Time slots are addressed either by `(carrier_id, index)` or by a frame-wide
//! index. The frame-wide index concatenates the per-carrier sequences in
//! ascending carrier id order:
//!
//! ```text
//! carrier 0: [0 1 2]   carrier 1: [3 4 5]   carrier 2: [6 7 8]
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use crate::btu::{BtuConf, CarrierBandwidthType};
use crate::error::FrameError;
use crate::time_slot::TimeSlotConf;

/// Time slots of a frame keyed by carrier id, in transmission order.
pub type TimeSlotConfMap = BTreeMap<u16, Vec<TimeSlotConf>>;

/// Relative tolerance when dividing a frame's bandwidth into whole carriers.
///
/// Covers division rounding only, so a frame that is really narrower than
/// `n` carriers never gets `n`.
const CARRIER_COUNT_RELATIVE_EPSILON: f64 = 4.0 * f64::EPSILON;

/// Configuration of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConf {
    bandwidth_hz: f64,
    duration: Duration,
    is_random_access: bool,
    btu: BtuConf,
    carrier_count: u16,
    base_frequency_hz: f64,
    time_slots: TimeSlotConfMap,
}

impl FrameConf {
    /// Maximum number of time slots in one frame (11-bit slot addressing)
    pub const MAX_TIME_SLOT_COUNT: usize = 2048;
    /// Largest valid frame-wide time slot index
    pub const MAX_TIME_SLOT_INDEX: u16 = (Self::MAX_TIME_SLOT_COUNT - 1) as u16;

    /// Creates a frame.
    ///
    /// * `bandwidth_hz` - Bandwidth of the whole frame
    /// * `duration` - Duration of the frame; every slot must start before it
    /// * `btu` - Bandwidth of one carrier
    /// * `time_slots` - Initial time slots keyed by carrier id
    /// * `is_random_access` - Whether the frame's carriers are random access channels
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the frame cannot hold a single carrier, a
    /// carrier id is outside the frame, or a slot starts outside the frame.
    /// `CapacityExceeded` if the slots do not fit the slot addressing.
    pub fn new(
        bandwidth_hz: f64,
        duration: Duration,
        btu: BtuConf,
        time_slots: TimeSlotConfMap,
        is_random_access: bool,
    ) -> Result<Self, FrameError> {
        let carrier_count = Self::carrier_count_for(bandwidth_hz, &btu)?;
        if duration.is_zero() {
            return Err(FrameError::InvalidConfiguration(
                "frame duration must be > 0".to_string(),
            ));
        }

        let total: usize = time_slots.values().map(Vec::len).sum();
        if total > Self::MAX_TIME_SLOT_COUNT {
            return Err(FrameError::CapacityExceeded(format!(
                "{total} time slots exceed the frame maximum of {}",
                Self::MAX_TIME_SLOT_COUNT
            )));
        }

        let frame = Self {
            bandwidth_hz,
            duration,
            is_random_access,
            btu,
            carrier_count,
            base_frequency_hz: 0.0,
            time_slots: TimeSlotConfMap::new(),
        };
        for (&carrier_id, slots) in &time_slots {
            frame.check_carrier(carrier_id)?;
            for slot in slots {
                frame.check_slot(carrier_id, slot)?;
            }
        }

        Ok(Self { time_slots, ..frame })
    }

    /// Number of whole carriers of `btu` that fit into `bandwidth_hz`.
    ///
    /// Any remainder bandwidth is left unused.
    pub fn carrier_count_for(bandwidth_hz: f64, btu: &BtuConf) -> Result<u16, FrameError> {
        if !(bandwidth_hz.is_finite() && bandwidth_hz > 0.0) {
            return Err(FrameError::InvalidConfiguration(format!(
                "frame bandwidth must be > 0 Hz, got {bandwidth_hz}"
            )));
        }

        let ratio = bandwidth_hz / btu.allocated_bandwidth_hz();
        let carriers = (ratio * (1.0 + CARRIER_COUNT_RELATIVE_EPSILON)).floor();
        if carriers < 1.0 {
            return Err(FrameError::InvalidConfiguration(format!(
                "frame bandwidth {bandwidth_hz} Hz is narrower than one carrier ({} Hz)",
                btu.allocated_bandwidth_hz()
            )));
        }
        if carriers > f64::from(u16::MAX) {
            return Err(FrameError::InvalidConfiguration(format!(
                "frame bandwidth {bandwidth_hz} Hz holds more than {} carriers",
                u16::MAX
            )));
        }

        Ok(carriers as u16)
    }

    /// Places the frame's lowest band edge at `base_frequency_hz`.
    pub fn with_base_frequency_hz(mut self, base_frequency_hz: f64) -> Self {
        self.base_frequency_hz = base_frequency_hz;
        self
    }

    /// Appends a time slot to the end of its carrier.
    ///
    /// Returns the frame-wide index of the added slot. Slots already added to
    /// higher carriers move up by one frame-wide index.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if the frame already holds the maximum number of slots.
    pub fn add_time_slot(&mut self, conf: TimeSlotConf) -> Result<u16, FrameError> {
        let carrier_id = conf.carrier_id();
        self.check_carrier(carrier_id)?;
        self.check_slot(carrier_id, &conf)?;

        let total = usize::from(self.time_slot_count());
        if total >= Self::MAX_TIME_SLOT_COUNT {
            return Err(FrameError::CapacityExceeded(format!(
                "frame already holds the maximum of {} time slots",
                Self::MAX_TIME_SLOT_COUNT
            )));
        }

        let preceding: usize = self
            .time_slots
            .range(..carrier_id)
            .map(|(_, slots)| slots.len())
            .sum();
        let slots = self.time_slots.entry(carrier_id).or_default();
        slots.push(conf);

        Ok((preceding + slots.len() - 1) as u16)
    }

    /// Time slot by frame-wide index.
    pub fn time_slot(&self, index: u16) -> Result<&TimeSlotConf, FrameError> {
        let (carrier_id, local) = self.locate_time_slot(index)?;
        self.carrier_time_slot(carrier_id, local)
    }

    /// Resolves a frame-wide slot index to `(carrier_id, index_in_carrier)`.
    pub fn locate_time_slot(&self, index: u16) -> Result<(u16, u16), FrameError> {
        let mut remaining = usize::from(index);
        for (&carrier_id, slots) in &self.time_slots {
            if remaining < slots.len() {
                return Ok((carrier_id, remaining as u16));
            }
            remaining -= slots.len();
        }

        Err(FrameError::out_of_range(
            "time slot index",
            usize::from(index),
            usize::from(self.time_slot_count()),
        ))
    }

    /// Time slot by carrier id and index inside the carrier.
    pub fn carrier_time_slot(
        &self,
        carrier_id: u16,
        index: u16,
    ) -> Result<&TimeSlotConf, FrameError> {
        let slots = self.time_slots(carrier_id)?;
        slots.get(usize::from(index)).ok_or_else(|| {
            FrameError::out_of_range("carrier time slot index", usize::from(index), slots.len())
        })
    }

    /// All time slots of a carrier in transmission order.
    ///
    /// A valid carrier without slots yields an empty slice.
    pub fn time_slots(&self, carrier_id: u16) -> Result<&[TimeSlotConf], FrameError> {
        if carrier_id >= self.carrier_count {
            return Err(FrameError::out_of_range(
                "carrier id",
                usize::from(carrier_id),
                usize::from(self.carrier_count),
            ));
        }
        Ok(self
            .time_slots
            .get(&carrier_id)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Total number of time slots over all carriers
    pub fn time_slot_count(&self) -> u16 {
        self.time_slots.values().map(Vec::len).sum::<usize>() as u16
    }

    /// Center frequency of a carrier.
    ///
    /// Carriers are laid out back to back from the frame's base frequency,
    /// each one BTU wide.
    pub fn carrier_frequency_hz(&self, carrier_id: u16) -> Result<f64, FrameError> {
        if carrier_id >= self.carrier_count {
            return Err(FrameError::out_of_range(
                "carrier id",
                usize::from(carrier_id),
                usize::from(self.carrier_count),
            ));
        }
        let carrier_bandwidth_hz = self.btu.allocated_bandwidth_hz();
        Ok(self.base_frequency_hz + (f64::from(carrier_id) + 0.5) * carrier_bandwidth_hz)
    }

    /// Bandwidth of the frame's carriers.
    pub fn carrier_bandwidth_hz(&self, bandwidth_type: CarrierBandwidthType) -> f64 {
        self.btu.bandwidth_hz(bandwidth_type)
    }

    /// Frame bandwidth not covered by whole carriers.
    pub fn unused_bandwidth_hz(&self) -> f64 {
        let used = f64::from(self.carrier_count) * self.btu.allocated_bandwidth_hz();
        (self.bandwidth_hz - used).max(0.0)
    }

    /// Bandwidth of the frame in hertz
    pub fn bandwidth_hz(&self) -> f64 {
        self.bandwidth_hz
    }

    /// Duration of the frame
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// BTU of the frame's carriers
    pub fn btu(&self) -> &BtuConf {
        &self.btu
    }

    /// Number of carriers in the frame
    pub fn carrier_count(&self) -> u16 {
        self.carrier_count
    }

    /// Lowest band edge of the frame in hertz
    pub fn base_frequency_hz(&self) -> f64 {
        self.base_frequency_hz
    }

    /// Whether the frame's carriers are random access channels
    pub fn is_random_access(&self) -> bool {
        self.is_random_access
    }

    fn check_carrier(&self, carrier_id: u16) -> Result<(), FrameError> {
        if carrier_id >= self.carrier_count {
            return Err(FrameError::InvalidConfiguration(format!(
                "carrier id {carrier_id} outside frame with {} carriers",
                self.carrier_count
            )));
        }
        Ok(())
    }

    fn check_slot(&self, carrier_id: u16, slot: &TimeSlotConf) -> Result<(), FrameError> {
        if slot.carrier_id() != carrier_id {
            return Err(FrameError::InvalidConfiguration(format!(
                "time slot of carrier {} filed under carrier {carrier_id}",
                slot.carrier_id()
            )));
        }
        if slot.start_time() >= self.duration {
            return Err(FrameError::InvalidConfiguration(format!(
                "time slot starts at {:?}, outside frame duration {:?}",
                slot.start_time(),
                self.duration
            )));
        }
        Ok(())
    }
}

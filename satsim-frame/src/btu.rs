//! Bandwidth Time Unit (BTU)
//!
//! A BTU is the spectral width of one carrier. The allocated bandwidth is
//! reduced by the roll-off factor to give the occupied bandwidth, and the
//! occupied bandwidth is reduced by the spacing factor to give the effective
//! bandwidth, which is also the carrier's symbol rate.

use std::fmt;
use std::str::FromStr;

use crate::error::FrameError;

/// Which of a carrier's bandwidths is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierBandwidthType {
    /// Bandwidth allocated to the carrier, including guard space
    Allocated,
    /// Bandwidth occupied by the carrier's spectrum
    Occupied,
    /// Effective bandwidth, equal to the symbol rate
    Effective,
}

impl fmt::Display for CarrierBandwidthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarrierBandwidthType::Allocated => write!(f, "allocated"),
            CarrierBandwidthType::Occupied => write!(f, "occupied"),
            CarrierBandwidthType::Effective => write!(f, "effective"),
        }
    }
}

impl FromStr for CarrierBandwidthType {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allocated" => Ok(CarrierBandwidthType::Allocated),
            "occupied" => Ok(CarrierBandwidthType::Occupied),
            "effective" => Ok(CarrierBandwidthType::Effective),
            _ => Err(FrameError::InvalidConfiguration(format!(
                "unknown carrier bandwidth type: {s}"
            ))),
        }
    }
}

/// Bandwidth configuration of one carrier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BtuConf {
    allocated_bandwidth_hz: f64,
    occupied_bandwidth_hz: f64,
    effective_bandwidth_hz: f64,
}

impl BtuConf {
    /// Creates a BTU from its allocated bandwidth, roll-off and spacing factors.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the allocated bandwidth is not strictly
    /// positive or either factor is negative or not finite.
    pub fn new(
        allocated_bandwidth_hz: f64,
        roll_off: f64,
        spacing: f64,
    ) -> Result<Self, FrameError> {
        if !(allocated_bandwidth_hz.is_finite() && allocated_bandwidth_hz > 0.0) {
            return Err(FrameError::InvalidConfiguration(format!(
                "BTU allocated bandwidth must be > 0 Hz, got {allocated_bandwidth_hz}"
            )));
        }
        if !(roll_off.is_finite() && roll_off >= 0.0) {
            return Err(FrameError::InvalidConfiguration(format!(
                "BTU roll-off must be >= 0, got {roll_off}"
            )));
        }
        if !(spacing.is_finite() && spacing >= 0.0) {
            return Err(FrameError::InvalidConfiguration(format!(
                "BTU spacing must be >= 0, got {spacing}"
            )));
        }

        let occupied_bandwidth_hz = allocated_bandwidth_hz / (1.0 + roll_off);
        let effective_bandwidth_hz = occupied_bandwidth_hz / (1.0 + spacing);

        Ok(Self {
            allocated_bandwidth_hz,
            occupied_bandwidth_hz,
            effective_bandwidth_hz,
        })
    }

    /// Allocated bandwidth in hertz
    pub fn allocated_bandwidth_hz(&self) -> f64 {
        self.allocated_bandwidth_hz
    }

    /// Occupied bandwidth in hertz
    pub fn occupied_bandwidth_hz(&self) -> f64 {
        self.occupied_bandwidth_hz
    }

    /// Effective bandwidth in hertz
    pub fn effective_bandwidth_hz(&self) -> f64 {
        self.effective_bandwidth_hz
    }

    /// Symbol rate in bauds
    pub fn symbol_rate_baud(&self) -> f64 {
        self.effective_bandwidth_hz
    }

    /// Returns the requested kind of bandwidth in hertz.
    pub fn bandwidth_hz(&self, bandwidth_type: CarrierBandwidthType) -> f64 {
        match bandwidth_type {
            CarrierBandwidthType::Allocated => self.allocated_bandwidth_hz,
            CarrierBandwidthType::Occupied => self.occupied_bandwidth_hz,
            CarrierBandwidthType::Effective => self.effective_bandwidth_hz,
        }
    }
}

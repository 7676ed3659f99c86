//! Superframe configuration
//!
//! A superframe holds up to [`SuperframeConf::MAX_FRAME_COUNT`] frames side by
//! side in frequency. Before it is configured it is just a table of per-frame
//! attributes, usually filled from a [`ConfigType`] preset. [`SuperframeConf::configure`]
//! turns the table into frames, carriers and time slots and freezes the result.
//!
//! Carriers get superframe-wide ids by concatenating the frames' carrier
//! ranges in frame order:
//!
//! ```text
//! frame 0: carriers 0..8   -> global 0..8
//! frame 1: carriers 0..2   -> global 8..10
//! ```
//!
//! Every carrier of a random access frame is one random access (RA) channel.
//! RA channels are numbered in the same frame-then-carrier order.

use std::time::Duration;

use satsim_common::config::{FrameConfig, SuperframeConfig, MAX_FRAME_COUNT};
use tracing::{debug, info, warn};

use crate::btu::{BtuConf, CarrierBandwidthType};
use crate::error::FrameError;
use crate::frame::{FrameConf, TimeSlotConfMap};
use crate::preset::ConfigType;
use crate::time_slot::TimeSlotConf;
use crate::waveform::{WaveformBurst, WaveformId, WaveformTable};

/// Relative tolerance when comparing allocated against available bandwidth.
const BANDWIDTH_TOLERANCE: f64 = 1e-9;

/// Canonical name of a frame slot, used as attribute prefix and in logs.
pub fn frame_name(index: usize) -> String {
    format!("Frame{index}")
}

/// Bounds-checked index into the superframe's frame attribute table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameSlot(u8);

impl FrameSlot {
    /// Creates a frame slot index.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is not below [`SuperframeConf::MAX_FRAME_COUNT`].
    pub fn new(index: usize) -> Result<Self, FrameError> {
        if index >= MAX_FRAME_COUNT {
            return Err(FrameError::out_of_range("frame slot", index, MAX_FRAME_COUNT));
        }
        Ok(Self(index as u8))
    }

    /// Index of the slot
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// All frame slots in order
    pub fn all() -> impl Iterator<Item = FrameSlot> {
        (0..MAX_FRAME_COUNT as u8).map(FrameSlot)
    }
}

impl TryFrom<usize> for FrameSlot {
    type Error = FrameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

/// Configuration attributes of one frame slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAttributes {
    /// Bandwidth allocated to the whole frame in hertz
    pub allocated_bandwidth_hz: f64,
    /// Bandwidth allocated to one carrier in hertz
    pub carrier_allocated_bandwidth_hz: f64,
    /// Carrier spacing factor
    pub carrier_spacing: f64,
    /// Carrier roll-off factor
    pub carrier_roll_off: f64,
    /// Whether the frame's carriers are random access channels
    pub random_access: bool,
    /// Waveform override; `None` lets the waveform table decide
    pub waveform_id: Option<WaveformId>,
}

impl Default for FrameAttributes {
    fn default() -> Self {
        Self {
            allocated_bandwidth_hz: 0.0,
            carrier_allocated_bandwidth_hz: 1.25e6,
            carrier_spacing: 0.3,
            carrier_roll_off: 0.2,
            random_access: false,
            waveform_id: None,
        }
    }
}

impl FrameAttributes {
    /// Applies the fields present in a raw frame configuration.
    pub fn apply(&mut self, config: &FrameConfig) {
        if let Some(v) = config.allocated_bandwidth_hz {
            self.allocated_bandwidth_hz = v;
        }
        if let Some(v) = config.carrier_allocated_bandwidth_hz {
            self.carrier_allocated_bandwidth_hz = v;
        }
        if let Some(v) = config.carrier_spacing {
            self.carrier_spacing = v;
        }
        if let Some(v) = config.carrier_roll_off {
            self.carrier_roll_off = v;
        }
        if let Some(v) = config.random_access {
            self.random_access = v;
        }
        if config.waveform_id.is_some() {
            self.waveform_id = config.waveform_id;
        }
    }

    /// Waveform used for this frame's time slots.
    ///
    /// An explicit override wins; otherwise random access frames use the
    /// table's random access waveform and dedicated frames its default one.
    pub fn select_waveform<W>(&self, table: &W) -> WaveformId
    where
        W: WaveformTable + ?Sized,
    {
        match self.waveform_id {
            Some(id) => id,
            None if self.random_access => table.random_access_waveform_id(),
            None => table.default_waveform_id(),
        }
    }
}

/// A random access channel: one carrier of a random access frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RaChannel {
    /// Frame holding the channel
    pub frame_id: u8,
    /// Carrier of the channel inside its frame
    pub carrier_id: u16,
}

/// Lifecycle state of a superframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuperframeState {
    /// Attributes may still change; queries fail with `NotReady`
    Unconfigured,
    /// Frames are built and immutable
    Configured,
}

/// Built frame structure of a configured superframe.
#[derive(Debug, Clone)]
struct Layout {
    bandwidth_hz: f64,
    duration: Duration,
    frames: Vec<FrameConf>,
    waveforms: Vec<(WaveformId, WaveformBurst)>,
    carrier_bases: Vec<u32>,
    carrier_count: u32,
    ra_channels: Vec<RaChannel>,
}

/// Superframe configuration.
#[derive(Debug, Clone)]
pub struct SuperframeConf {
    config_type: ConfigType,
    frame_count: u8,
    attributes: [FrameAttributes; MAX_FRAME_COUNT],
    layout: Option<Layout>,
}

impl Default for SuperframeConf {
    fn default() -> Self {
        Self::new(ConfigType::default())
    }
}

impl SuperframeConf {
    /// Maximum number of frames in a superframe
    pub const MAX_FRAME_COUNT: usize = MAX_FRAME_COUNT;

    /// Creates an unconfigured superframe populated from a preset.
    pub fn new(config_type: ConfigType) -> Self {
        let mut superframe = Self {
            config_type,
            frame_count: 0,
            attributes: [FrameAttributes::default(); MAX_FRAME_COUNT],
            layout: None,
        };
        superframe.load_preset(config_type);
        superframe
    }

    /// Creates an unconfigured superframe from its raw configuration.
    ///
    /// The preset named by `config_type` is loaded first, then the optional
    /// frame count and per-frame overrides are applied.
    pub fn from_config(config: &SuperframeConfig) -> Result<Self, FrameError> {
        let mut superframe = Self::new(ConfigType::from_index(config.config_type)?);
        if let Some(count) = config.frame_count {
            superframe.set_frame_count(count)?;
        }
        for frame in &config.frames {
            let slot = FrameSlot::new(usize::from(frame.index))?;
            superframe.attributes[slot.index()].apply(frame);
        }
        Ok(superframe)
    }

    fn load_preset(&mut self, config_type: ConfigType) {
        let preset = config_type.preset();
        self.attributes = [FrameAttributes::default(); MAX_FRAME_COUNT];
        self.attributes[..preset.len()].copy_from_slice(preset);
        self.frame_count = config_type.frame_count();
        self.config_type = config_type;
    }

    /// Current lifecycle state
    pub fn state(&self) -> SuperframeState {
        match self.layout {
            Some(_) => SuperframeState::Configured,
            None => SuperframeState::Unconfigured,
        }
    }

    /// Configuration type the attributes were loaded from
    pub fn config_type(&self) -> ConfigType {
        self.config_type
    }

    /// Replaces all frame attributes and the frame count with a preset.
    pub fn set_config_type(&mut self, config_type: ConfigType) -> Result<(), FrameError> {
        self.ensure_unconfigured()?;
        self.load_preset(config_type);
        Ok(())
    }

    /// Number of active frames
    pub fn frame_count(&self) -> u8 {
        self.frame_count
    }

    /// Sets the number of active frames.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if `frame_count` is above [`Self::MAX_FRAME_COUNT`].
    pub fn set_frame_count(&mut self, frame_count: u8) -> Result<(), FrameError> {
        self.ensure_unconfigured()?;
        if usize::from(frame_count) > MAX_FRAME_COUNT {
            return Err(FrameError::CapacityExceeded(format!(
                "frame count {frame_count} exceeds the maximum of {MAX_FRAME_COUNT}"
            )));
        }
        self.frame_count = frame_count;
        Ok(())
    }

    /// Attributes of a frame slot
    pub fn frame_attributes(&self, slot: FrameSlot) -> &FrameAttributes {
        &self.attributes[slot.index()]
    }

    /// Replaces the attributes of a frame slot.
    pub fn set_frame_attributes(
        &mut self,
        slot: FrameSlot,
        attributes: FrameAttributes,
    ) -> Result<(), FrameError> {
        *self.attributes_mut(slot)? = attributes;
        Ok(())
    }

    fn attributes_mut(&mut self, slot: FrameSlot) -> Result<&mut FrameAttributes, FrameError> {
        self.ensure_unconfigured()?;
        Ok(&mut self.attributes[slot.index()])
    }

    /// Sets the bandwidth allocated to a frame.
    pub fn set_frame_allocated_bandwidth_hz(
        &mut self,
        slot: FrameSlot,
        bandwidth_hz: f64,
    ) -> Result<(), FrameError> {
        self.attributes_mut(slot)?.allocated_bandwidth_hz = bandwidth_hz;
        Ok(())
    }

    /// Sets the bandwidth allocated to each carrier of a frame.
    pub fn set_frame_carrier_allocated_bandwidth_hz(
        &mut self,
        slot: FrameSlot,
        bandwidth_hz: f64,
    ) -> Result<(), FrameError> {
        self.attributes_mut(slot)?.carrier_allocated_bandwidth_hz = bandwidth_hz;
        Ok(())
    }

    /// Sets the carrier spacing factor of a frame.
    pub fn set_frame_carrier_spacing(
        &mut self,
        slot: FrameSlot,
        spacing: f64,
    ) -> Result<(), FrameError> {
        self.attributes_mut(slot)?.carrier_spacing = spacing;
        Ok(())
    }

    /// Sets the carrier roll-off factor of a frame.
    pub fn set_frame_carrier_roll_off(
        &mut self,
        slot: FrameSlot,
        roll_off: f64,
    ) -> Result<(), FrameError> {
        self.attributes_mut(slot)?.carrier_roll_off = roll_off;
        Ok(())
    }

    /// Marks a frame as random access or dedicated.
    pub fn set_frame_random_access(
        &mut self,
        slot: FrameSlot,
        random_access: bool,
    ) -> Result<(), FrameError> {
        self.attributes_mut(slot)?.random_access = random_access;
        Ok(())
    }

    /// Overrides the waveform of a frame.
    pub fn set_frame_waveform_id(
        &mut self,
        slot: FrameSlot,
        waveform_id: Option<WaveformId>,
    ) -> Result<(), FrameError> {
        self.attributes_mut(slot)?.waveform_id = waveform_id;
        Ok(())
    }

    pub fn frame_allocated_bandwidth_hz(&self, slot: FrameSlot) -> f64 {
        self.frame_attributes(slot).allocated_bandwidth_hz
    }

    pub fn frame_carrier_allocated_bandwidth_hz(&self, slot: FrameSlot) -> f64 {
        self.frame_attributes(slot).carrier_allocated_bandwidth_hz
    }

    pub fn frame_carrier_spacing(&self, slot: FrameSlot) -> f64 {
        self.frame_attributes(slot).carrier_spacing
    }

    pub fn frame_carrier_roll_off(&self, slot: FrameSlot) -> f64 {
        self.frame_attributes(slot).carrier_roll_off
    }

    pub fn frame_random_access(&self, slot: FrameSlot) -> bool {
        self.frame_attributes(slot).random_access
    }

    /// Builds frames, carriers and time slots from the attribute table.
    ///
    /// * `total_bandwidth_hz` - Spectrum available to the superframe
    /// * `target_duration` - Upper bound for every frame's duration
    /// * `waveforms` - Waveform table resolving burst durations and payloads
    ///
    /// Either the whole structure is built or nothing changes.
    ///
    /// # Errors
    ///
    /// `AlreadyConfigured` on a second call, `InvalidConfiguration` for
    /// inconsistent attributes, `InvalidReference` for unknown waveforms and
    /// `CapacityExceeded` if a frame would hold too many time slots.
    pub fn configure<W>(
        &mut self,
        total_bandwidth_hz: f64,
        target_duration: Duration,
        waveforms: &W,
    ) -> Result<(), FrameError>
    where
        W: WaveformTable + ?Sized,
    {
        self.ensure_unconfigured()?;
        let active = &self.attributes[..usize::from(self.frame_count)];
        let layout = build_layout(active, total_bandwidth_hz, target_duration, waveforms)?;

        info!(
            config_type = %self.config_type,
            frames = layout.frames.len(),
            carriers = layout.carrier_count,
            ra_channels = layout.ra_channels.len(),
            duration_us = layout.duration.as_micros() as u64,
            "Superframe configured"
        );
        self.layout = Some(layout);
        Ok(())
    }

    fn ensure_unconfigured(&self) -> Result<(), FrameError> {
        match self.layout {
            Some(_) => Err(FrameError::AlreadyConfigured),
            None => Ok(()),
        }
    }

    fn layout(&self) -> Result<&Layout, FrameError> {
        self.layout.as_ref().ok_or(FrameError::NotReady)
    }

    /// Bandwidth given to the superframe in hertz
    pub fn bandwidth_hz(&self) -> Result<f64, FrameError> {
        Ok(self.layout()?.bandwidth_hz)
    }

    /// Duration of the superframe, the longest of its frames
    pub fn duration(&self) -> Result<Duration, FrameError> {
        Ok(self.layout()?.duration)
    }

    /// All built frames in frame id order
    pub fn frames(&self) -> Result<&[FrameConf], FrameError> {
        Ok(&self.layout()?.frames)
    }

    /// Built frame by id.
    pub fn frame(&self, frame_id: u8) -> Result<&FrameConf, FrameError> {
        let frames = &self.layout()?.frames;
        frames
            .get(usize::from(frame_id))
            .ok_or_else(|| {
                FrameError::out_of_range("frame id", usize::from(frame_id), frames.len())
            })
    }

    /// Waveform used by a frame's time slots
    pub fn frame_waveform_id(&self, frame_id: u8) -> Result<WaveformId, FrameError> {
        self.frame(frame_id)?;
        Ok(self.layout()?.waveforms[usize::from(frame_id)].0)
    }

    /// Global id of a frame's first carrier
    pub fn frame_carrier_base(&self, frame_id: u8) -> Result<u32, FrameError> {
        self.frame(frame_id)?;
        Ok(self.layout()?.carrier_bases[usize::from(frame_id)])
    }

    /// Number of carriers over all frames
    pub fn carrier_count(&self) -> Result<u32, FrameError> {
        Ok(self.layout()?.carrier_count)
    }

    /// Converts a frame-local carrier id into a superframe-wide carrier id.
    pub fn carrier_id(&self, frame_id: u8, frame_carrier_id: u16) -> Result<u32, FrameError> {
        let frame = self.frame(frame_id)?;
        if frame_carrier_id >= frame.carrier_count() {
            return Err(FrameError::out_of_range(
                "frame carrier id",
                usize::from(frame_carrier_id),
                usize::from(frame.carrier_count()),
            ));
        }
        Ok(self.layout()?.carrier_bases[usize::from(frame_id)] + u32::from(frame_carrier_id))
    }

    /// Frame holding a superframe-wide carrier.
    pub fn frame_of(&self, carrier_id: u32) -> Result<u8, FrameError> {
        self.resolve_carrier(carrier_id).map(|(frame_id, _)| frame_id)
    }

    /// Resolves a superframe-wide carrier id to `(frame_id, frame_carrier_id)`.
    pub fn resolve_carrier(&self, carrier_id: u32) -> Result<(u8, u16), FrameError> {
        let layout = self.layout()?;
        if carrier_id >= layout.carrier_count {
            return Err(FrameError::out_of_range(
                "carrier id",
                carrier_id as usize,
                layout.carrier_count as usize,
            ));
        }

        // Bases are strictly increasing since every frame has a carrier.
        let frame_index = layout.carrier_bases.partition_point(|&base| base <= carrier_id) - 1;
        let local = carrier_id - layout.carrier_bases[frame_index];
        Ok((frame_index as u8, local as u16))
    }

    /// Center frequency of a carrier relative to the superframe's low band edge.
    pub fn carrier_frequency_hz(&self, carrier_id: u32) -> Result<f64, FrameError> {
        let (frame_id, local) = self.resolve_carrier(carrier_id)?;
        self.frame(frame_id)?.carrier_frequency_hz(local)
    }

    /// Bandwidth of a carrier.
    pub fn carrier_bandwidth_hz(
        &self,
        carrier_id: u32,
        bandwidth_type: CarrierBandwidthType,
    ) -> Result<f64, FrameError> {
        let frame_id = self.frame_of(carrier_id)?;
        Ok(self.frame(frame_id)?.carrier_bandwidth_hz(bandwidth_type))
    }

    /// Returns true if the carrier belongs to a random access frame.
    pub fn is_random_access_carrier(&self, carrier_id: u32) -> Result<bool, FrameError> {
        let frame_id = self.frame_of(carrier_id)?;
        Ok(self.frame(frame_id)?.is_random_access())
    }

    /// Number of RA channels
    pub fn ra_channel_count(&self) -> Result<u32, FrameError> {
        Ok(self.layout()?.ra_channels.len() as u32)
    }

    /// RA channel descriptor.
    pub fn ra_channel(&self, ra_channel: u32) -> Result<RaChannel, FrameError> {
        let channels = &self.layout()?.ra_channels;
        channels
            .get(ra_channel as usize)
            .copied()
            .ok_or_else(|| {
                FrameError::out_of_range("RA channel", ra_channel as usize, channels.len())
            })
    }

    /// Superframe-wide carrier id of an RA channel
    pub fn ra_channel_carrier_id(&self, ra_channel: u32) -> Result<u32, FrameError> {
        let channel = self.ra_channel(ra_channel)?;
        self.carrier_id(channel.frame_id, channel.carrier_id)
    }

    /// Frame of an RA channel
    pub fn ra_channel_frame_id(&self, ra_channel: u32) -> Result<u8, FrameError> {
        Ok(self.ra_channel(ra_channel)?.frame_id)
    }

    /// Time slots of an RA channel in transmission order.
    pub fn ra_slots(&self, ra_channel: u32) -> Result<&[TimeSlotConf], FrameError> {
        let channel = self.ra_channel(ra_channel)?;
        self.frame(channel.frame_id)?.time_slots(channel.carrier_id)
    }

    /// Number of time slots of an RA channel
    pub fn ra_slot_count(&self, ra_channel: u32) -> Result<u16, FrameError> {
        Ok(self.ra_slots(ra_channel)?.len() as u16)
    }

    /// Payload of one RA channel burst in bytes.
    pub fn ra_channel_payload_in_bytes(&self, ra_channel: u32) -> Result<u32, FrameError> {
        let channel = self.ra_channel(ra_channel)?;
        Ok(self.layout()?.waveforms[usize::from(channel.frame_id)].1.payload_bytes)
    }
}

/// Builds the frame structure for the active frame attributes.
fn build_layout<W>(
    attributes: &[FrameAttributes],
    total_bandwidth_hz: f64,
    target_duration: Duration,
    waveforms: &W,
) -> Result<Layout, FrameError>
where
    W: WaveformTable + ?Sized,
{
    if attributes.len() > MAX_FRAME_COUNT {
        return Err(FrameError::CapacityExceeded(format!(
            "{} frames exceed the maximum of {MAX_FRAME_COUNT}",
            attributes.len()
        )));
    }
    if attributes.is_empty() {
        return Err(FrameError::InvalidConfiguration(
            "superframe has no active frames".to_string(),
        ));
    }
    if !(total_bandwidth_hz.is_finite() && total_bandwidth_hz > 0.0) {
        return Err(FrameError::InvalidConfiguration(format!(
            "superframe bandwidth must be > 0 Hz, got {total_bandwidth_hz}"
        )));
    }
    if target_duration.is_zero() {
        return Err(FrameError::InvalidConfiguration(
            "superframe target duration must be > 0".to_string(),
        ));
    }

    let allocated_hz: f64 = attributes.iter().map(|a| a.allocated_bandwidth_hz).sum();
    if allocated_hz > total_bandwidth_hz * (1.0 + BANDWIDTH_TOLERANCE) {
        return Err(FrameError::InvalidConfiguration(format!(
            "frames allocate {allocated_hz} Hz, more than the available {total_bandwidth_hz} Hz"
        )));
    }

    let mut frames = Vec::with_capacity(attributes.len());
    let mut frame_waveforms = Vec::with_capacity(attributes.len());
    let mut base_frequency_hz = 0.0;

    for (index, attrs) in attributes.iter().enumerate() {
        let btu = BtuConf::new(
            attrs.carrier_allocated_bandwidth_hz,
            attrs.carrier_roll_off,
            attrs.carrier_spacing,
        )?;
        let carrier_count = FrameConf::carrier_count_for(attrs.allocated_bandwidth_hz, &btu)?;

        let waveform_id = attrs.select_waveform(waveforms);
        let burst = waveforms.lookup(waveform_id)?;
        let (time_slots, duration) =
            place_bursts(carrier_count, waveform_id, burst, target_duration)?;

        let frame = FrameConf::new(
            attrs.allocated_bandwidth_hz,
            duration,
            btu,
            time_slots,
            attrs.random_access,
        )?
        .with_base_frequency_hz(base_frequency_hz);

        let unused_hz = frame.unused_bandwidth_hz();
        debug!(
            frame = %frame_name(index),
            carriers = frame.carrier_count(),
            time_slots = frame.time_slot_count(),
            waveform_id,
            random_access = frame.is_random_access(),
            unused_hz,
            duration_us = duration.as_micros() as u64,
            "Frame built"
        );
        if unused_hz > attrs.allocated_bandwidth_hz * BANDWIDTH_TOLERANCE {
            warn!(
                frame = %frame_name(index),
                unused_hz,
                "Frame bandwidth is not a whole number of carriers"
            );
        }

        base_frequency_hz += attrs.allocated_bandwidth_hz;
        frames.push(frame);
        frame_waveforms.push((waveform_id, burst));
    }

    let mut carrier_bases = Vec::with_capacity(frames.len());
    let mut ra_channels = Vec::new();
    let mut carrier_count: u32 = 0;
    for (frame_id, frame) in frames.iter().enumerate() {
        carrier_bases.push(carrier_count);
        carrier_count += u32::from(frame.carrier_count());
        if frame.is_random_access() {
            ra_channels.extend((0..frame.carrier_count()).map(|carrier_id| RaChannel {
                frame_id: frame_id as u8,
                carrier_id,
            }));
        }
    }

    let duration = frames
        .iter()
        .map(FrameConf::duration)
        .max()
        .unwrap_or_default();

    Ok(Layout {
        bandwidth_hz: total_bandwidth_hz,
        duration,
        frames,
        waveforms: frame_waveforms,
        carrier_bases,
        carrier_count,
        ra_channels,
    })
}

/// Fills every carrier with back-to-back bursts from offset zero.
///
/// Returns the slots and the time actually covered by them.
fn place_bursts(
    carrier_count: u16,
    waveform_id: WaveformId,
    burst: WaveformBurst,
    target_duration: Duration,
) -> Result<(TimeSlotConfMap, Duration), FrameError> {
    if burst.burst_duration.is_zero() {
        return Err(FrameError::InvalidConfiguration(format!(
            "waveform {waveform_id} has zero burst duration"
        )));
    }

    let per_carrier = target_duration.as_nanos() / burst.burst_duration.as_nanos();
    if per_carrier == 0 {
        return Err(FrameError::InvalidConfiguration(format!(
            "waveform {waveform_id} burst of {:?} does not fit the target duration {:?}",
            burst.burst_duration,
            target_duration
        )));
    }

    let total = per_carrier * u128::from(carrier_count);
    if total > FrameConf::MAX_TIME_SLOT_COUNT as u128 {
        return Err(FrameError::CapacityExceeded(format!(
            "{carrier_count} carriers of {per_carrier} slots need {total} time slots, \
             frame maximum is {}",
            FrameConf::MAX_TIME_SLOT_COUNT
        )));
    }

    // Bounded by the slot capacity above.
    let per_carrier = per_carrier as u32;
    let time_slots = (0..carrier_count)
        .map(|carrier_id| {
            let slots: Vec<TimeSlotConf> = (0..per_carrier)
                .map(|i| TimeSlotConf::new(burst.burst_duration * i, waveform_id, carrier_id))
                .collect();
            (carrier_id, slots)
        })
        .collect();

    Ok((time_slots, burst.burst_duration * per_carrier))
}

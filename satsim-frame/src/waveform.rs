//! Waveform table collaborator
//!
//! The frame structure needs two facts about a waveform: how long one burst
//! lasts and how many payload bytes it carries. Where those come from
//! (modulation and coding tables, link budget files) is up to the
//! implementation of [`WaveformTable`]. [`WaveformConf`] is a simple
//! in-memory table.

use std::collections::BTreeMap;
use std::time::Duration;

use satsim_common::config::WaveformTableConfig;

use crate::error::FrameError;

/// Waveform identifier
pub type WaveformId = u32;

/// Burst properties of one waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformBurst {
    /// Duration of one burst
    pub burst_duration: Duration,
    /// Payload carried by one burst in bytes
    pub payload_bytes: u32,
}

/// Source of waveform burst properties.
///
/// Must be fully populated before a superframe is configured against it.
pub trait WaveformTable {
    /// Looks up a waveform.
    ///
    /// # Errors
    ///
    /// `InvalidReference` if the id is unknown.
    fn lookup(&self, waveform_id: WaveformId) -> Result<WaveformBurst, FrameError>;

    /// Waveform used by dedicated frames
    fn default_waveform_id(&self) -> WaveformId;

    /// Waveform used by random access frames
    fn random_access_waveform_id(&self) -> WaveformId {
        self.default_waveform_id()
    }
}

/// In-memory waveform table.
#[derive(Debug, Clone)]
pub struct WaveformConf {
    waveforms: BTreeMap<WaveformId, WaveformBurst>,
    default_waveform_id: WaveformId,
    random_access_waveform_id: WaveformId,
}

impl WaveformConf {
    /// Creates a table whose default waveform is also used for random access.
    ///
    /// # Errors
    ///
    /// `InvalidReference` if the default waveform is not in the table,
    /// `InvalidConfiguration` if any burst has zero duration.
    pub fn new(
        waveforms: BTreeMap<WaveformId, WaveformBurst>,
        default_waveform_id: WaveformId,
    ) -> Result<Self, FrameError> {
        Self::with_random_access_waveform(waveforms, default_waveform_id, default_waveform_id)
    }

    /// Creates a table with a separate random access waveform.
    pub fn with_random_access_waveform(
        waveforms: BTreeMap<WaveformId, WaveformBurst>,
        default_waveform_id: WaveformId,
        random_access_waveform_id: WaveformId,
    ) -> Result<Self, FrameError> {
        if let Some((id, _)) = waveforms.iter().find(|(_, w)| w.burst_duration.is_zero()) {
            return Err(FrameError::InvalidConfiguration(format!(
                "waveform {id} has zero burst duration"
            )));
        }
        for id in [default_waveform_id, random_access_waveform_id] {
            if !waveforms.contains_key(&id) {
                return Err(FrameError::InvalidReference(id));
            }
        }

        Ok(Self {
            waveforms,
            default_waveform_id,
            random_access_waveform_id,
        })
    }

    /// Builds the table from its raw configuration.
    pub fn from_config(config: &WaveformTableConfig) -> Result<Self, FrameError> {
        let mut waveforms = BTreeMap::new();
        for entry in &config.entries {
            let burst = WaveformBurst {
                burst_duration: entry.burst_duration(),
                payload_bytes: entry.payload_bytes,
            };
            if waveforms.insert(entry.id, burst).is_some() {
                return Err(FrameError::InvalidConfiguration(format!(
                    "duplicate waveform id {}",
                    entry.id
                )));
            }
        }

        Self::with_random_access_waveform(
            waveforms,
            config.default_waveform_id,
            config
                .random_access_waveform_id
                .unwrap_or(config.default_waveform_id),
        )
    }

    /// Number of waveforms in the table
    pub fn len(&self) -> usize {
        self.waveforms.len()
    }

    /// Returns true if the table holds no waveforms
    pub fn is_empty(&self) -> bool {
        self.waveforms.is_empty()
    }
}

impl WaveformTable for WaveformConf {
    fn lookup(&self, waveform_id: WaveformId) -> Result<WaveformBurst, FrameError> {
        self.waveforms
            .get(&waveform_id)
            .copied()
            .ok_or(FrameError::InvalidReference(waveform_id))
    }

    fn default_waveform_id(&self) -> WaveformId {
        self.default_waveform_id
    }

    fn random_access_waveform_id(&self) -> WaveformId {
        self.random_access_waveform_id
    }
}

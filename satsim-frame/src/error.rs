//! Error types for frame configuration

use thiserror::Error;

use crate::waveform::WaveformId;

/// Errors raised while building or querying the return link frame structure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrameError {
    /// Inconsistent or out-of-range input parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Bad index or id on a query
    #[error("{what} {index} out of range (limit {limit})")]
    OutOfRange {
        /// Kind of index that was rejected
        what: &'static str,
        /// Rejected value
        index: usize,
        /// Exclusive upper bound
        limit: usize,
    },

    /// A hard capacity limit would be exceeded; the build must abort
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// Unknown waveform id
    #[error("Unknown waveform id: {0}")]
    InvalidReference(WaveformId),

    /// Query issued before the superframe was configured
    #[error("Superframe is not configured")]
    NotReady,

    /// Attribute change or reconfiguration after the superframe was configured
    #[error("Superframe is already configured")]
    AlreadyConfigured,

    /// Second write of a time slot's request class index
    #[error("Request class index already set to {0}")]
    RequestClassAlreadySet(u8),
}

impl FrameError {
    pub(crate) fn out_of_range(what: &'static str, index: usize, limit: usize) -> Self {
        FrameError::OutOfRange { what, index, limit }
    }

    /// Returns true for errors after which the affected build cannot continue.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FrameError::CapacityExceeded(_))
    }
}

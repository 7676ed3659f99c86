//! Common types and utilities for satsim
//!
//! This crate provides the shared error type, logging bootstrap and the raw
//! return link configuration model used across the satsim crates.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    load_return_link_config, load_return_link_config_from_str, FrameConfig, ReturnLinkConfig,
    SuperframeConfig, WaveformEntryConfig, WaveformTableConfig, CONFIG_TYPE_COUNT,
    MAX_FRAME_COUNT,
};
pub use error::Error;
pub use logging::{init_logging, init_logging_with_filter, LogLevel};

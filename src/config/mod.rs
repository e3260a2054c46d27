//! Configuration management
//!
//! Settings are layered with figment: embedded defaults from
//! `default-config.toml`, an optional file, `WORDFREQ_` environment
//! variables and finally command-line overrides.

pub mod core;

pub use self::core::{ConfigOverrides, InputConfig, OutputConfig, StatisticsConfig, WordfreqConfig};

//! Shared utilities for modalkit.
//!
//! - [`id`] - prefixed ULID presentation identifiers
//! - [`log`] - tracing setup

pub mod id;
pub mod log;

pub use id::{is_presentation_id, presentation_id, PRESENTATION_PREFIX};
pub use log::{default_log_path, LogConfig, LogLevel};

//! Configuration management module
//!
//! Loads the process-wide settings from compiled-in defaults, the `.env`
//! override file and the process environment, in that order of priority.

pub mod settings;
pub mod source;

pub use settings::{DatabaseSettings, LoggingSettings, SecuritySettings, ServerSettings, Settings};
pub use source::ConfigSource;

//! clipsync-core: configuration for the clipboard sync backend.
//!
//! Settings are read from the environment once at process start and passed
//! by reference to whatever needs them. No hidden global state.

pub mod config;
pub mod error;

pub use config::{build_database_url, Settings};
pub use error::{ConfigError, Result};

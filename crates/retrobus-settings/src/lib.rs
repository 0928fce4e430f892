//! Retrobus Settings Crate
//!
//! Handles configuration loading and the authoritative owner of
//! range-valued emulator settings.

pub mod config;
pub mod error;
pub mod store;

pub use config::{Config, Frontend, UiSettings};
pub use error::{SettingsError, SettingsResult};
pub use store::{default_specs, SettingSpec, SettingStore};

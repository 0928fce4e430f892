//! Null front-end: no user interface at all.
//!
//! Applies the configured initial state, logs where every owned setting
//! ended up and returns. Useful for headless runs and for checking a
//! configuration file.

use retrobus_settings::{Config, SettingStore, SettingsResult};
use retrobus_ui::UiBus;

/// Apply `config` through `store` and report the resulting values.
pub fn run_null(bus: &UiBus, store: &SettingStore, config: &Config) -> SettingsResult<()> {
    store.apply_config(bus, config)?;
    for tag in store.tags() {
        if let Some(value) = store.value(tag) {
            tracing::info!("{} = {}", tag, value);
        }
    }
    Ok(())
}

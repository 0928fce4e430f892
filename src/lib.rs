//! # Retrobus
//!
//! Shared state bus for emulator front-ends:
//! - A message-group bus with ordered delivery, preemption and reentrancy guarding
//! - One state group per UI tag, with sentinel next/prev/auto requests
//! - An authoritative setting store that clamps requests before listeners see them
//! - Command line and null front-ends
//!
//! ## Architecture
//!
//! 1. **retrobus-core** - Client registry, message groups, dispatcher
//! 2. **retrobus-ui** - UI tags, state messages, range adjustment
//! 3. **retrobus-settings** - Configuration and the setting store
//! 4. **retrobus** - Logging setup, front-ends and the main binary

pub mod frontend;

pub use retrobus_core::{ClientId, Error, GroupId, Messenger, Result};
pub use retrobus_settings::{default_specs, Config, Frontend, SettingStore, SettingsError};
pub use retrobus_ui::{
    adjust_value_range, AdjustFlags, StateData, StateMessage, UiBus, UiTag, AUTO, NEXT, PREV,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to the command line front-end
/// - RUST_LOG environment variable support
/// - `default_level` when RUST_LOG does not say otherwise
pub fn init_logging(default_level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;
    use tracing::level_filters::LevelFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

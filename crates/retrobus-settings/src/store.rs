//! Setting store
//!
//! The authoritative owner of range-valued emulator settings. It preempts
//! each tag it owns, resolves incoming requests against the tag's range and
//! records the result, so every listener after it sees a sanitized value.

use retrobus_core::{shared_map, ClientId, SharedHashMap};
use retrobus_ui::{adjust_value_range, AdjustFlags, UiBus, UiTag};

use crate::config::Config;
use crate::error::SettingsResult;

/// Range and defaults for one owned tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingSpec {
    pub tag: UiTag,
    pub default: i32,
    pub min: i32,
    pub max: i32,
    pub flags: AdjustFlags,
}

impl SettingSpec {
    /// A plain range, clamped at both ends
    pub const fn range(tag: UiTag, default: i32, min: i32, max: i32) -> Self {
        Self {
            tag,
            default,
            min,
            max,
            flags: AdjustFlags::NONE,
        }
    }

    /// An on/off switch that toggles on next/previous
    pub const fn toggle(tag: UiTag, default: i32) -> Self {
        Self {
            tag,
            default,
            min: 0,
            max: 1,
            flags: AdjustFlags::CYCLE,
        }
    }

    /// A list of choices that wraps around
    pub const fn cycle(tag: UiTag, default: i32, count: i32) -> Self {
        Self {
            tag,
            default,
            min: 0,
            max: count - 1,
            flags: AdjustFlags::CYCLE,
        }
    }

    /// Keep "auto" visible to listeners while resolving to the default
    pub const fn keep_auto(mut self) -> Self {
        self.flags = self.flags.union(AdjustFlags::KEEP_AUTO);
        self
    }
}

/// Ranges for the built-in range-valued tags
pub fn default_specs() -> Vec<SettingSpec> {
    vec![
        SettingSpec::cycle(UiTag::Machine, 0, 8),
        SettingSpec::toggle(UiTag::TapeFlagFast, 1),
        SettingSpec::toggle(UiTag::TapeFlagPadAuto, 1),
        SettingSpec::toggle(UiTag::TapeFlagRewrite, 0),
        SettingSpec::toggle(UiTag::DiskWriteEnable, 1),
        SettingSpec::toggle(UiTag::DiskWriteBack, 0),
        SettingSpec::toggle(UiTag::Fullscreen, 0),
        SettingSpec::toggle(UiTag::Menubar, 1),
        SettingSpec::toggle(UiTag::VdgInverse, 0),
        SettingSpec::cycle(UiTag::Ccr, 1, 5).keep_auto(),
        SettingSpec::cycle(UiTag::Picture, 1, 4),
        SettingSpec::toggle(UiTag::NtscScaling, 1),
        SettingSpec::cycle(UiTag::TvInput, 0, 4),
        SettingSpec::range(UiTag::Brightness, 50, 0, 100),
        SettingSpec::range(UiTag::Contrast, 50, 0, 100),
        SettingSpec::range(UiTag::Saturation, 50, 0, 100),
        SettingSpec::range(UiTag::Hue, 0, -179, 180),
        SettingSpec::range(UiTag::Zoom, 2, 1, 8),
        SettingSpec::range(UiTag::AudioVolume, 70, 0, 150),
        SettingSpec::toggle(UiTag::Ratelimit, 1),
        SettingSpec::toggle(UiTag::RatelimitLatch, 1),
        SettingSpec::cycle(UiTag::Keymap, 0, 3).keep_auto(),
        SettingSpec::toggle(UiTag::KbdTranslate, 0),
        SettingSpec::cycle(UiTag::JoyRight, 1, 4),
        SettingSpec::cycle(UiTag::JoyLeft, 2, 4),
        SettingSpec::cycle(UiTag::PrintDestination, 0, 3),
        SettingSpec::toggle(UiTag::ConfigAutosave, 0),
    ]
}

/// Owner of range-valued settings on a [`UiBus`]
pub struct SettingStore {
    client: ClientId,
    specs: Vec<SettingSpec>,
    values: SharedHashMap<UiTag, i32>,
}

impl SettingStore {
    /// Register with the bus and preempt every tag in `specs`
    ///
    /// Each tag starts at its default value.
    pub fn attach(bus: &UiBus, specs: impl IntoIterator<Item = SettingSpec>) -> Self {
        let client = bus.register();
        let values = shared_map();
        let specs: Vec<SettingSpec> = specs.into_iter().collect();

        for spec in &specs {
            values.borrow_mut().insert(spec.tag, spec.default);
            let values = values.clone();
            let spec = *spec;
            bus.tag_preempt(client, spec.tag, move |tag, msg| {
                let current = values.borrow().get(&tag).copied().unwrap_or(spec.default);
                let resolved =
                    adjust_value_range(msg, current, spec.default, spec.min, spec.max, spec.flags);
                values.borrow_mut().insert(tag, resolved);
                tracing::debug!("{} resolved to {} (was {})", tag, resolved, current);
            });
        }

        tracing::debug!("Setting store {} owns {} tag(s)", client, specs.len());
        Self {
            client,
            specs,
            values,
        }
    }

    /// Client id the store registered under
    pub fn client(&self) -> ClientId {
        self.client
    }

    /// Current value of an owned tag
    pub fn value(&self, tag: UiTag) -> Option<i32> {
        self.values.borrow().get(&tag).copied()
    }

    /// Range declaration for an owned tag
    pub fn spec(&self, tag: UiTag) -> Option<&SettingSpec> {
        self.specs.iter().find(|s| s.tag == tag)
    }

    /// Owned tags in declaration order
    pub fn tags(&self) -> impl Iterator<Item = UiTag> + '_ {
        self.specs.iter().map(|s| s.tag)
    }

    /// Publish the configured initial state
    ///
    /// Values go out as ordinary requests so the store clamps them and
    /// listeners already attached see the result.
    pub fn apply_config(&self, bus: &UiBus, config: &Config) -> SettingsResult<()> {
        for (tag, value) in config.initial_state()? {
            let msg = bus.update_state(None, tag, value, None);
            tracing::info!("Initial {} = {}", tag, msg.value);
        }
        Ok(())
    }

    /// Write the store's current values into a config
    pub fn snapshot_into(&self, config: &mut Config) {
        let values = self.values.borrow();
        for spec in &self.specs {
            if let Some(value) = values.get(&spec.tag) {
                config.set_state(spec.tag, *value);
            }
        }
    }

    /// Leave every tag and release the client id
    pub fn detach(self, bus: &UiBus) {
        bus.unregister(self.client);
    }
}

impl std::fmt::Debug for SettingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingStore")
            .field("client", &self.client)
            .field("tags", &self.specs.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrobus_ui::{AUTO, NEXT, PREV};

    #[test]
    fn test_defaults_loaded() {
        let bus = UiBus::new();
        let store = SettingStore::attach(&bus, default_specs());
        assert_eq!(store.value(UiTag::AudioVolume), Some(70));
        assert_eq!(store.value(UiTag::Zoom), Some(2));
        assert_eq!(store.value(UiTag::Action), None);
        assert_eq!(store.tags().count(), default_specs().len());
    }

    #[test]
    fn test_requests_are_clamped() {
        let bus = UiBus::new();
        let store = SettingStore::attach(&bus, default_specs());

        let msg = bus.update_state(None, UiTag::AudioVolume, 400, None);
        assert_eq!(msg.value, 150);
        assert_eq!(store.value(UiTag::AudioVolume), Some(150));

        bus.update_state(None, UiTag::Zoom, PREV, None);
        bus.update_state(None, UiTag::Zoom, PREV, None);
        assert_eq!(store.value(UiTag::Zoom), Some(1));
    }

    #[test]
    fn test_toggle_cycles() {
        let bus = UiBus::new();
        let store = SettingStore::attach(&bus, [SettingSpec::toggle(UiTag::Fullscreen, 0)]);
        bus.update_state(None, UiTag::Fullscreen, NEXT, None);
        assert_eq!(store.value(UiTag::Fullscreen), Some(1));
        bus.update_state(None, UiTag::Fullscreen, NEXT, None);
        assert_eq!(store.value(UiTag::Fullscreen), Some(0));
    }

    #[test]
    fn test_keep_auto_tags_forward_sentinel() {
        let bus = UiBus::new();
        let store = SettingStore::attach(&bus, default_specs());
        bus.update_state(None, UiTag::Keymap, 2, None);

        let msg = bus.update_state(None, UiTag::Keymap, AUTO, None);
        assert_eq!(msg.value, AUTO);
        assert_eq!(store.value(UiTag::Keymap), Some(0));
    }

    #[test]
    fn test_negative_range_takes_values_literally() {
        let bus = UiBus::new();
        let store = SettingStore::attach(&bus, default_specs());
        bus.update_state(None, UiTag::Hue, NEXT, None);
        assert_eq!(store.value(UiTag::Hue), Some(NEXT));
    }

    #[test]
    fn test_keep_auto_builder() {
        let spec = SettingSpec::cycle(UiTag::Ccr, 1, 5).keep_auto();
        assert!(spec.flags.contains(AdjustFlags::CYCLE));
        assert!(spec.flags.contains(AdjustFlags::KEEP_AUTO));
        assert_eq!(spec.max, 4);
    }

    #[test]
    fn test_detach_releases_tags() {
        let bus = UiBus::new();
        let store = SettingStore::attach(&bus, default_specs());
        let client = store.client();
        store.detach(&bus);

        assert!(!bus.messenger().is_registered(client));
        let msg = bus.update_state(None, UiTag::AudioVolume, 400, None);
        assert_eq!(msg.value, 400);
    }
}

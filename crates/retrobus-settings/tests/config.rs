use retrobus_settings::{default_specs, Config, Frontend, SettingStore, SettingsError};
use retrobus_ui::{UiBus, UiTag};
use tempfile::tempdir;

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::new();
    config.ui.frontend = Frontend::Null;
    config.set_state(UiTag::Zoom, 4);
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_is_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "ui": { "echo_changes": false }, "state": { "menubar": 0 } }"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert!(!config.ui.echo_changes);
    assert_eq!(config.ui.frontend, Frontend::Cli);
    assert_eq!(config.state.get("menubar"), Some(&0));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "ui: {}").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ref ext) if ext == "yaml"));
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Config::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(_)));
}

#[test]
fn test_unknown_tag_in_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[state]\nhyperdrive = 1\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("state.hyperdrive"));
}

#[test]
fn test_apply_config_clamps_and_snapshots() {
    let bus = UiBus::new();
    let store = SettingStore::attach(&bus, default_specs());

    let mut config = Config::new();
    config.set_state(UiTag::AudioVolume, 999);
    config.set_state(UiTag::Fullscreen, 1);
    store.apply_config(&bus, &config).unwrap();

    assert_eq!(store.value(UiTag::AudioVolume), Some(150));
    assert_eq!(store.value(UiTag::Fullscreen), Some(1));

    let mut saved = Config::new();
    store.snapshot_into(&mut saved);
    assert_eq!(saved.state.get("volume"), Some(&150));
    assert_eq!(saved.state.get("fullscreen"), Some(&1));
    assert_eq!(saved.state.len(), default_specs().len());
}

#[test]
fn test_mixed_case_key_in_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[state]\nVolume = 10\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { ref key, .. } if key == "state.Volume"));
}

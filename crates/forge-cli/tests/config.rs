use forge_cli::config::{CURRENT_VERSION, ForgeConfig, load_config_from, migrate, save_config_to};
use forge_export::styles::PageGeometry;
use serde_json::json;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, ForgeConfig::default());
    assert_eq!(config.log_level, "info");
    assert_eq!(config.default_geometry, PageGeometry::Print);
}

#[test]
fn save_then_load_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = ForgeConfig {
        config_version: 0,
        default_geometry: PageGeometry::Widescreen,
        output_dir: Some(dir.path().join("decks")),
        log_level: "debug".to_string(),
    };

    save_config_to(&config, &path).unwrap();
    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.default_geometry, PageGeometry::Widescreen);
    assert_eq!(loaded.output_dir, config.output_dir);
    assert_eq!(loaded.log_level, "debug");
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn v0_widescreen_flag_is_migrated() {
    let migrated = migrate(json!({ "widescreen": true, "log_level": "warn" }), 0).unwrap();
    assert_eq!(migrated["default_geometry"], "widescreen");
    assert_eq!(migrated["config_version"], 1);
    assert!(migrated.get("widescreen").is_none());

    let config: ForgeConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.default_geometry, PageGeometry::Widescreen);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn v0_file_without_flag_defaults_to_print() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.default_geometry, PageGeometry::Print);
    assert_eq!(config.config_version, 1);
}

#[test]
fn newer_version_is_refused() {
    let err = migrate(json!({ "config_version": 99 }), 99).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_refused() {
    assert!(migrate(json!(["print"]), 0).is_err());
}

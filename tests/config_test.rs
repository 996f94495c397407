//! 設定ファイルのテスト

use health_tracker::config::Config;
use health_tracker::error::HealthError;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_load_missing_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.water_goal_ml, 2000);
    assert_eq!(config.water_presets_ml, vec![250, 500]);
    assert!(config.store_path.is_none());
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("health").join("config.json");

    let mut config = Config::default();
    config.set_water_goal(2500).unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.water_goal_ml, 2500);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"water_goal_ml": 1800}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.water_goal_ml, 1800);
    assert_eq!(config.water_presets_ml, vec![250, 500]);
}

#[test]
fn test_zero_water_goal_rejected() {
    let mut config = Config::default();
    let err = config.set_water_goal(0).unwrap_err();
    assert!(matches!(err, HealthError::Config(_)));
    assert_eq!(config.water_goal_ml, 2000);
}

#[test]
fn test_resolve_store_path() {
    let config = Config {
        store_path: Some("/tmp/custom.json".into()),
        ..Default::default()
    };
    assert_eq!(
        config.resolve_store_path(None).unwrap(),
        Path::new("/tmp/custom.json")
    );
    assert_eq!(
        config.resolve_store_path(Some(Path::new("/tmp/cli.json"))).unwrap(),
        Path::new("/tmp/cli.json")
    );
}

#[test]
fn test_load_rejects_zero_water_goal() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"water_goal_ml": 0}"#).unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, HealthError::Config(_)));
}

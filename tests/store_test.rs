//! JSONファイル保存領域のテスト
//!
//! 状態の保存・再読み込みがブラウザと同じキー構成で行われることを検証

use health_tracker::error::HealthError;
use health_tracker::store::FileStore;
use health_tracker_common::{AppState, KeyValueStore};
use tempfile::tempdir;

/// 存在しないファイルは空として開く
#[test]
fn test_open_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FileStore::open(&dir.path().join("storage.json")).unwrap();

    assert_eq!(store.get("waterConsumed").unwrap(), None);
    assert_eq!(store.get("foodEntries").unwrap(), None);
}

/// 保存のたびにファイルへ書き出される
#[test]
fn test_set_writes_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("storage.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set("waterConsumed", "500").unwrap();
    assert!(path.exists());

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("waterConsumed").unwrap().as_deref(), Some("500"));
    assert_eq!(reopened.path(), path.as_path());
}

/// 水分と食事記録が再起動後も残る
#[test]
fn test_state_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    {
        let mut store = FileStore::open(&path).unwrap();
        let mut state = AppState::load(&store, 2000).unwrap();
        state.add_water(&mut store, 250).unwrap();
        state.add_custom_water(&mut store, "500").unwrap();
        state
            .log_meal(&mut store, "Lunch", "Chicken stir-fry", "", 1_700_000_000_000)
            .unwrap();
    }

    let store = FileStore::open(&path).unwrap();
    let state = AppState::load(&store, 2000).unwrap();
    assert_eq!(state.water.consumed_ml, 750);
    assert_eq!(state.water.progress_width(), "37.5%");
    assert_eq!(state.journal.len(), 1);
    assert_eq!(state.journal.entries()[0].description, "Chicken stir-fry");

    // ブラウザと同じキーと値の形式
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["waterConsumed"], "750");
    let entries: serde_json::Value =
        serde_json::from_str(raw["foodEntries"].as_str().unwrap()).unwrap();
    assert_eq!(entries[0]["type"], "Lunch");
    assert_eq!(entries[0]["photoUrl"], "");
}

/// 壊れた保存ファイル
#[test]
fn test_open_corrupt_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, HealthError::JsonParse(_)));
}

/// 値が壊れていても既定値で読み込める
#[test]
fn test_corrupt_values_fall_back() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    std::fs::write(&path, r#"{"waterConsumed":"oops","foodEntries":"[1,2"}"#).unwrap();

    let store = FileStore::open(&path).unwrap();
    let state = AppState::load(&store, 2000).unwrap();
    assert_eq!(state.water.consumed_ml, 0);
    assert!(state.journal.is_empty());
}

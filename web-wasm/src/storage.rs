//! ブラウザの localStorage を使った保存領域

use gloo::storage::{LocalStorage, Storage};
use health_tracker_common::{Error, KeyValueStore, Result};

/// localStorage（状態を持たないのでどこでも生成してよい）
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::Storage(format!("読込失敗 {}: {:?}", key, e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("保存失敗 {}: {:?}", key, e)))
    }
}

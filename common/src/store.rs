//! キー・バリュー保存領域
//!
//! ブラウザの localStorage と同じ文字列キー・文字列値のモデル。
//! 実装はブラウザ(web-wasm)、JSONファイル(CLI)、メモリ(テスト)の3種類。

use crate::error::Result;
use std::collections::HashMap;

/// 水分摂取量のキー（整数の文字列）
pub const WATER_CONSUMED_KEY: &str = "waterConsumed";

/// 食事記録のキー（FoodEntryのJSON配列）
pub const FOOD_ENTRIES_KEY: &str = "foodEntries";

/// 文字列キー・文字列値の保存領域
pub trait KeyValueStore {
    /// 値を取得（未設定ならNone）
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上の保存領域
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

//! 食事記録（フードジャーナル）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 食事区分の選択肢
pub const MEAL_TYPES: [&str; 4] = ["Breakfast", "Lunch", "Dinner", "Snack"];

/// 食事記録1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    #[serde(rename = "type")]
    pub meal_type: String,
    pub description: String,
    #[serde(default)]
    pub photo_url: String,
    /// 記録時刻（Unixエポックからのミリ秒）
    pub timestamp: i64,
}

impl FoodEntry {
    pub fn has_photo(&self) -> bool {
        !self.photo_url.is_empty()
    }
}

/// 食事記録の一覧（新しい順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodJournal {
    entries: Vec<FoodEntry>,
}

impl FoodJournal {
    pub fn from_entries(entries: Vec<FoodEntry>) -> Self {
        Self { entries }
    }

    /// 食事を記録して先頭に追加
    pub fn log(
        &mut self,
        meal_type: &str,
        description: &str,
        photo_url: &str,
        now_ms: i64,
    ) -> Result<&FoodEntry> {
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::EmptyMealDescription);
        }

        self.entries.insert(
            0,
            FoodEntry {
                meal_type: meal_type.to_string(),
                description: description.to_string(),
                photo_url: photo_url.trim().to_string(),
                timestamp: now_ms,
            },
        );
        Ok(&self.entries[0])
    }

    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<FoodEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }
}

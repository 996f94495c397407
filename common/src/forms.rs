//! 入力フォームの状態
//!
//! 送信に成功したときにどの入力欄を消すかをここで決める。

use crate::error::Result;
use crate::journal::{FoodEntry, MEAL_TYPES};
use crate::state::AppState;
use crate::store::KeyValueStore;
use crate::suggester::SuggesterState;

/// 入力欄で送信扱いになるキー
pub const SUBMIT_KEY: &str = "Enter";

/// 食事記録フォーム
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealForm {
    pub meal_type: String,
    pub description: String,
    pub photo_url: String,
}

impl Default for MealForm {
    fn default() -> Self {
        Self {
            meal_type: MEAL_TYPES[0].to_string(),
            description: String::new(),
            photo_url: String::new(),
        }
    }
}

impl MealForm {
    /// 記録して保存。成功したら説明と写真URLだけ消す（区分は残す）
    pub fn submit<S: KeyValueStore + ?Sized>(
        &mut self,
        state: &mut AppState,
        store: &mut S,
        now_ms: i64,
    ) -> Result<FoodEntry> {
        let entry = state.log_meal(store, &self.meal_type, &self.description, &self.photo_url, now_ms)?;
        self.description.clear();
        self.photo_url.clear();
        Ok(entry)
    }
}

/// 水分のカスタム入力欄
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaterForm {
    pub custom_amount: String,
}

impl WaterForm {
    /// 追加して保存。成功したら入力欄を消す
    pub fn submit<S: KeyValueStore + ?Sized>(
        &mut self,
        state: &mut AppState,
        store: &mut S,
    ) -> Result<u32> {
        let amount = state.add_custom_water(store, &self.custom_amount)?;
        self.custom_amount.clear();
        Ok(amount)
    }
}

/// 食材入力欄
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientForm {
    pub ingredients: String,
}

impl IngredientForm {
    /// 検索ボタン
    pub fn submit(&self, current: SuggesterState) -> Result<SuggesterState> {
        current.search(&self.ingredients)
    }

    /// キー入力（Enterなら検索、それ以外は何もしない）
    pub fn key_press(&self, key: &str, current: SuggesterState) -> Result<Option<SuggesterState>> {
        if key != SUBMIT_KEY {
            return Ok(None);
        }
        self.submit(current).map(Some)
    }
}

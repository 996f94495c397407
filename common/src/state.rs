//! アプリケーション状態
//!
//! 各ハンドラに状態と保存領域を明示的に渡す。
//! 起動時に `load`、変更のたびに即座に保存する。

use crate::error::Result;
use crate::journal::{FoodEntry, FoodJournal};
use crate::navigation::{navigate, Section};
use crate::store::{KeyValueStore, FOOD_ENTRIES_KEY, WATER_CONSUMED_KEY};
use crate::water::{parse_leading_int, parse_water_amount, WaterTracker};

/// アプリケーションの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub section: Section,
    pub water: WaterTracker,
    pub journal: FoodJournal,
}

impl AppState {
    /// 保存領域から状態を読み込み
    ///
    /// 未設定のキーは0/空リスト。壊れた値は警告を出して既定値にする。
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, water_goal_ml: u32) -> Result<Self> {
        let mut water = WaterTracker::new(water_goal_ml);
        if let Some(raw) = store.get(WATER_CONSUMED_KEY)? {
            water.consumed_ml = match parse_leading_int(&raw).map(u32::try_from) {
                Some(Ok(value)) => value,
                _ => {
                    tracing::warn!(value = %raw, "ignoring invalid stored water amount");
                    0
                }
            };
        }

        let journal = match store.get(FOOD_ENTRIES_KEY)? {
            Some(raw) => FoodJournal::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring unreadable stored food entries");
                FoodJournal::default()
            }),
            None => FoodJournal::default(),
        };

        tracing::debug!(
            water_consumed = water.consumed_ml,
            food_entries = journal.len(),
            "state loaded"
        );

        Ok(Self {
            section: Section::default(),
            water,
            journal,
        })
    }

    /// 水分を追加して保存
    ///
    /// 保存に失敗した場合は状態を変更しない。
    pub fn add_water<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, amount_ml: u32) -> Result<()> {
        let mut water = self.water;
        water.add(amount_ml);
        store.set(WATER_CONSUMED_KEY, &water.consumed_ml.to_string())?;

        self.water = water;
        tracing::info!(amount_ml, consumed_ml = self.water.consumed_ml, "water added");
        Ok(())
    }

    /// カスタム入力欄の値を検証して水分を追加
    pub fn add_custom_water<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        input: &str,
    ) -> Result<u32> {
        let amount = parse_water_amount(input)?;
        self.add_water(store, amount)?;
        Ok(amount)
    }

    /// 食事を記録して保存
    ///
    /// 保存に失敗した場合は記録を追加しない。
    pub fn log_meal<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &mut S,
        meal_type: &str,
        description: &str,
        photo_url: &str,
        now_ms: i64,
    ) -> Result<FoodEntry> {
        let mut journal = self.journal.clone();
        let entry = journal.log(meal_type, description, photo_url, now_ms)?.clone();
        store.set(FOOD_ENTRIES_KEY, &journal.to_json()?)?;

        self.journal = journal;
        tracing::info!(meal_type = %entry.meal_type, entries = self.journal.len(), "meal logged");
        Ok(entry)
    }

    /// セクションが表示中か（ナビボタンのアクティブ表示も同じ判定）
    pub fn is_shown(&self, section: Section) -> bool {
        self.section == section
    }

    /// セクションを切り替え
    pub fn navigate(&mut self, requested_id: &str) -> Section {
        self.section = navigate(self.section, requested_id);
        self.section
    }
}

//! 端末向けの表示整形

use chrono::{DateTime, Local};
use health_tracker_common::{FoodEntry, RecipeListView, WaterTracker, CATALOG};
use indicatif::{ProgressBar, ProgressStyle};

/// 例: "750 / 2000 ml (37.5%)"
pub fn format_water_status(water: &WaterTracker) -> String {
    format!(
        "{} / {} ml ({})",
        water.consumed_ml,
        water.goal_ml,
        water.progress_width()
    )
}

/// 目標に対する進捗バー
pub fn water_progress_bar(water: &WaterTracker) -> ProgressBar {
    let goal = u64::from(water.goal_ml.max(1));
    let bar = ProgressBar::new(goal);
    let style = ProgressStyle::with_template("{bar:40.cyan/blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_position(u64::from(water.consumed_ml).min(goal));
    bar.set_message(water.progress_width());
    bar
}

/// 記録時刻をローカル時刻で表示
pub fn format_time(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

/// 食事記録1件
pub fn format_food_entry(entry: &FoodEntry) -> String {
    let mut text = format!(
        "{} - {}\n  {}",
        entry.meal_type,
        format_time(entry.timestamp),
        entry.description
    );
    if entry.has_photo() {
        text.push_str(&format!("\n  📷 {}", entry.photo_url));
    }
    text
}

/// レシピ検索結果
pub fn format_recipe_view(view: &RecipeListView) -> String {
    match view {
        RecipeListView::Placeholder(text) => text.clone(),
        RecipeListView::Cards(cards) => cards
            .iter()
            .map(|card| {
                format!(
                    "{}\n  {}\n  {}",
                    card.heading(),
                    card.needs_line(),
                    card.missing.text()
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// 組み込みレシピ一覧
pub fn format_catalog() -> String {
    CATALOG
        .iter()
        .map(|r| format!("{}: {}", r.name, r.ingredients.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

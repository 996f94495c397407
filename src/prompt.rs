//! 対話式入力

use crate::error::Result;
use dialoguer::{Input, Select};
use health_tracker_common::RecipeCard;

/// 食材をカンマ区切りで入力
pub fn prompt_ingredients() -> Result<String> {
    let line: String = Input::new()
        .with_prompt("食材（カンマ区切り）")
        .allow_empty(true)
        .interact_text()?;
    Ok(line)
}

/// 作り方を表示するレシピを選択（Escで中止）
pub fn select_recipe(cards: &[RecipeCard]) -> Result<Option<&RecipeCard>> {
    if cards.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = cards.iter().map(RecipeCard::heading).collect();
    let selection = Select::new()
        .with_prompt("作り方を表示するレシピ")
        .items(items.as_slice())
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| &cards[i]))
}

/// クイック追加の量を選択（Escで中止）
pub fn select_preset(presets_ml: &[u32]) -> Result<Option<u32>> {
    if presets_ml.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = presets_ml.iter().map(|ml| format!("{} ml", ml)).collect();
    let selection = Select::new()
        .with_prompt("追加する量")
        .items(items.as_slice())
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| presets_ml[i]))
}

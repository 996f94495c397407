//! レシピ検索結果の表示用モデル
//!
//! スコア付きレシピを画面表示用のカード一覧に変換する。
//! Web(Leptos)とCLIの両方がこのモデルを描画する。

use crate::catalog::instructions_detail;
use crate::error::{Error, Result};
use crate::matcher::ScoredRecipe;

/// 一致なしのときのプレースホルダ
pub const NO_MATCH_PLACEHOLDER: &str = "No recipes match your ingredients. Try adding more!";

/// 完全一致マーカー
pub const PERFECT_MATCH_MARKER: &str = "(Perfect Match!)";

/// 一致率 (0.0〜1.0) を整数パーセントに変換（0.5は0から遠い方へ丸める）
pub fn match_percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

/// 不足食材の表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingLine {
    Missing(Vec<String>),
    PerfectMatch,
}

impl MissingLine {
    pub fn is_perfect_match(&self) -> bool {
        matches!(self, MissingLine::PerfectMatch)
    }

    pub fn text(&self) -> String {
        match self {
            MissingLine::Missing(items) => format!("Missing: {}", items.join(", ")),
            MissingLine::PerfectMatch => PERFECT_MATCH_MARKER.to_string(),
        }
    }
}

/// レシピカード（1件分の表示）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub name: String,
    pub percent: u32,
    pub ingredients: Vec<String>,
    pub missing: MissingLine,
    pub instructions: String,
}

impl RecipeCard {
    pub fn from_scored(scored: &ScoredRecipe) -> Self {
        let missing = if scored.is_perfect_match() {
            MissingLine::PerfectMatch
        } else {
            MissingLine::Missing(scored.missing.clone())
        };

        Self {
            name: scored.recipe.name.to_string(),
            percent: match_percent(scored.match_score),
            ingredients: scored.recipe.ingredients.iter().map(|s| s.to_string()).collect(),
            missing,
            instructions: scored.recipe.instructions.to_string(),
        }
    }

    /// 見出し 例: "Chicken Stir-Fry (40% Match)"
    pub fn heading(&self) -> String {
        format!("{} ({}% Match)", self.name, self.percent)
    }

    /// 例: "Needs: chicken, onion, carrot"
    pub fn needs_line(&self) -> String {
        format!("Needs: {}", self.ingredients.join(", "))
    }

    /// カード選択時に表示する作り方
    pub fn detail(&self) -> String {
        instructions_detail(&self.name, &self.instructions)
    }
}

/// 検索結果リストの表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeListView {
    /// 1行だけのメッセージ
    Placeholder(String),
    Cards(Vec<RecipeCard>),
}

impl RecipeListView {
    /// スコア付きレシピ一覧を表示用に変換
    pub fn render(results: &[ScoredRecipe]) -> Self {
        if results.is_empty() {
            return RecipeListView::Placeholder(NO_MATCH_PLACEHOLDER.to_string());
        }
        RecipeListView::Cards(results.iter().map(RecipeCard::from_scored).collect())
    }

    /// 検索結果（入力エラーを含む）から表示を作る
    ///
    /// 入力エラーはプレースホルダとして表示し、それ以外はそのまま返す。
    pub fn from_search(outcome: Result<Vec<ScoredRecipe>>) -> Result<Self> {
        match outcome {
            Ok(results) => Ok(Self::render(&results)),
            Err(Error::EmptyIngredientInput) => {
                Ok(RecipeListView::Placeholder(Error::EmptyIngredientInput.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    pub fn cards(&self) -> &[RecipeCard] {
        match self {
            RecipeListView::Cards(cards) => cards,
            RecipeListView::Placeholder(_) => &[],
        }
    }
}

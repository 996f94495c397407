//! レシピ提案パネルの状態

use crate::catalog::CATALOG;
use crate::error::Result;
use crate::matcher::search;
use crate::render::RecipeListView;

/// 提案パネルの状態（検索は同期的に完了する）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggesterState {
    #[default]
    Idle,
    Displaying(RecipeListView),
}

impl SuggesterState {
    /// 検索を実行して表示状態へ遷移
    pub fn search(self, input: &str) -> Result<Self> {
        let view = RecipeListView::from_search(search(input, CATALOG))?;
        Ok(SuggesterState::Displaying(view))
    }

    pub fn view(&self) -> Option<&RecipeListView> {
        match self {
            SuggesterState::Idle => None,
            SuggesterState::Displaying(view) => Some(view),
        }
    }
}

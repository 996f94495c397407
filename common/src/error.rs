//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 食材が一つも入力されていない
    #[error("Please enter at least one ingredient.")]
    EmptyIngredientInput,

    /// 水分量が数値でない、または0以下
    #[error("Please enter a valid amount of water.")]
    InvalidWaterAmount,

    /// 食事の説明が空
    #[error("Please enter a description for your meal.")]
    EmptyMealDescription,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// ユーザー入力の検証エラーかどうか
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyIngredientInput | Error::InvalidWaterAmount | Error::EmptyMealDescription
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

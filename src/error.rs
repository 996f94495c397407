use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("レシピが見つかりません: {0}")]
    RecipeNotFound(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] health_tracker_common::Error),
}

impl HealthError {
    /// ユーザー入力の検証エラーかどうか
    pub fn is_input_error(&self) -> bool {
        matches!(self, HealthError::Common(e) if e.is_input_error())
    }
}

impl From<dialoguer::Error> for HealthError {
    fn from(e: dialoguer::Error) -> Self {
        HealthError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HealthError>;

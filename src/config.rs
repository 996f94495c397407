use crate::error::{HealthError, Result};
use health_tracker_common::{DEFAULT_WATER_GOAL_ML, DEFAULT_WATER_PRESETS_ML};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub water_goal_ml: u32,
    pub water_presets_ml: Vec<u32>,
    /// 保存ファイルの場所（未指定なら設定ディレクトリのstorage.json）
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            water_goal_ml: DEFAULT_WATER_GOAL_ML,
            water_presets_ml: DEFAULT_WATER_PRESETS_ML.to_vec(),
            store_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| HealthError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("health-tracker"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 保存ファイルのパス（コマンドライン指定 > 設定 > 既定）
    pub fn resolve_store_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("storage.json")),
        }
    }

    pub fn set_water_goal(&mut self, goal_ml: u32) -> Result<()> {
        check_water_goal(goal_ml)?;
        self.water_goal_ml = goal_ml;
        Ok(())
    }

    /// 手で編集された設定ファイルも同じ条件で検証
    pub fn validate(&self) -> Result<()> {
        check_water_goal(self.water_goal_ml)
    }
}

fn check_water_goal(goal_ml: u32) -> Result<()> {
    if goal_ml == 0 {
        return Err(HealthError::Config("目標量は1以上を指定してください".into()));
    }
    Ok(())
}

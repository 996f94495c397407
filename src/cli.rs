use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "health-tracker")]
#[command(about = "水分・食事記録とレシピ提案", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 保存ファイル（デフォルト: ~/.config/health-tracker/storage.json）
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 水分摂取量の記録
    Water {
        #[command(subcommand)]
        action: WaterAction,
    },

    /// 食事の記録
    Meal {
        #[command(subcommand)]
        action: MealAction,
    },

    /// 手持ちの食材からレシピを提案
    Recipe {
        #[command(subcommand)]
        action: RecipeAction,
    },

    /// 設定を表示/編集
    Config {
        /// 1日の目標量 (ml) を設定
        #[arg(long)]
        set_water_goal: Option<u32>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum WaterAction {
    /// 水分を追加（例: 250, 300ml）
    Add {
        #[arg(required = true, allow_hyphen_values = true)]
        amount: String,
    },

    /// クイック追加の量から選んで追加
    Quick,

    /// 現在の摂取量と進捗を表示
    Status,
}

#[derive(Subcommand)]
pub enum MealAction {
    /// 食事を記録
    Log {
        /// 食事の説明
        #[arg(short, long)]
        description: String,

        /// 食事区分 (Breakfast/Lunch/Dinner/Snack など)
        #[arg(short = 't', long, default_value = "Breakfast")]
        meal_type: String,

        /// 写真のURL
        #[arg(short, long, default_value = "")]
        photo_url: String,
    },

    /// 記録を新しい順に表示
    List,
}

#[derive(Subcommand)]
pub enum RecipeAction {
    /// 食材（カンマ区切り）でレシピを検索
    Search {
        /// 例: "chicken, rice"（省略時は入力を求める）
        ingredients: Option<String>,

        /// 結果から1件選んで作り方を表示
        #[arg(long)]
        select: bool,
    },

    /// 組み込みレシピ一覧
    List,

    /// レシピの作り方を表示
    Show {
        #[arg(required = true)]
        name: String,
    },
}

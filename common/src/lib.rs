//! Health Tracker Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック

pub mod catalog;
pub mod error;
pub mod forms;
pub mod journal;
pub mod matcher;
pub mod navigation;
pub mod render;
pub mod state;
pub mod store;
pub mod suggester;
pub mod water;

pub use catalog::{find_recipe, RecipeRecord, CATALOG};
pub use error::{Error, Result};
pub use forms::{IngredientForm, MealForm, WaterForm};
pub use journal::{FoodEntry, FoodJournal, MEAL_TYPES};
pub use matcher::{search, ScoredRecipe, UserIngredientSet};
pub use navigation::{navigate, Section};
pub use render::{match_percent, MissingLine, RecipeCard, RecipeListView};
pub use state::AppState;
pub use store::{KeyValueStore, MemoryStore};
pub use suggester::SuggesterState;
pub use water::{parse_water_amount, WaterTracker, DEFAULT_WATER_GOAL_ML, DEFAULT_WATER_PRESETS_ML};

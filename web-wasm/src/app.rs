//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    header::Header,
    nav_bar::NavBar,
    water_panel::WaterPanel,
    food_journal::FoodJournalPanel,
    recipe_panel::RecipePanel,
};
use crate::storage::LocalStore;
use health_tracker_common::{AppState, Section, DEFAULT_WATER_GOAL_ML, DEFAULT_WATER_PRESETS_ML};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 起動時に保存済みの状態を読み込む
    let initial = AppState::load(&LocalStore, DEFAULT_WATER_GOAL_ML).unwrap_or_else(|e| {
        gloo::console::error!(format!("状態の読み込みに失敗: {}", e));
        AppState::default()
    });
    let state = RwSignal::new(initial);

    let is_hidden = move |section: Section| move || state.with(|s| !s.is_shown(section));

    view! {
        <div class="container">
            <Header />
            <NavBar state=state />

            <section
                id=Section::WaterTracker.id()
                class="app-section"
                class:hidden=is_hidden(Section::WaterTracker)
            >
                <WaterPanel state=state presets=DEFAULT_WATER_PRESETS_ML.to_vec() />
            </section>

            <section
                id=Section::FoodJournal.id()
                class="app-section"
                class:hidden=is_hidden(Section::FoodJournal)
            >
                <FoodJournalPanel state=state />
            </section>

            <section
                id=Section::RecipeSuggester.id()
                class="app-section"
                class:hidden=is_hidden(Section::RecipeSuggester)
            >
                <RecipePanel />
            </section>
        </div>
    }
}

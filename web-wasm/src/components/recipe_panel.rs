//! レシピ提案のパネル

use leptos::ev;
use leptos::prelude::*;
use crate::notice::notify;
use health_tracker_common::{IngredientForm, RecipeCard, RecipeListView, SuggesterState};
use web_sys::KeyboardEvent;

#[component]
pub fn RecipePanel() -> impl IntoView {
    let form = RwSignal::new(IngredientForm::default());
    let (suggester, set_suggester) = signal(SuggesterState::default());

    let on_search = move |_: ev::MouseEvent| {
        match form.with_untracked(|f| f.submit(suggester.get_untracked())) {
            Ok(next) => set_suggester.set(next),
            Err(e) => notify(&e),
        }
    };

    let on_keypress = move |ev: KeyboardEvent| {
        match form.with_untracked(|f| f.key_press(&ev.key(), suggester.get_untracked())) {
            Ok(Some(next)) => set_suggester.set(next),
            Ok(None) => {}
            Err(e) => notify(&e),
        }
    };

    view! {
        <div class="recipe-suggester">
            <h2>"Recipe Suggester"</h2>
            <div class="form-group">
                <input
                    type="text"
                    id="ingredient-input"
                    placeholder="e.g. chicken, rice, onion"
                    prop:value=move || form.with(|f| f.ingredients.clone())
                    on:input=move |ev| form.update(|f| f.ingredients = event_target_value(&ev))
                    on:keypress=on_keypress
                />
                <button
                    id="search-recipe-button"
                    class="btn btn-primary"
                    on:click=on_search
                >
                    "Find Recipes"
                </button>
            </div>

            <ul id="suggested-recipes-list">
                {move || match suggester.get() {
                    SuggesterState::Idle => ().into_any(),
                    SuggesterState::Displaying(RecipeListView::Placeholder(text)) => {
                        view! { <li class="placeholder-text">{text}</li> }.into_any()
                    }
                    SuggesterState::Displaying(RecipeListView::Cards(cards)) => cards
                        .into_iter()
                        .map(|card| view! { <RecipeCardItem card=card /> })
                        .collect_view()
                        .into_any(),
                }}
            </ul>
        </div>
    }
}

#[component]
pub fn RecipeCardItem(card: RecipeCard) -> impl IntoView {
    let detail = card.detail();
    let missing = if card.missing.is_perfect_match() {
        view! {
            <span class="perfect-match" style="color: #4CAF50; font-weight: bold;">
                {card.missing.text()}
            </span>
        }
        .into_any()
    } else {
        view! { <span class="missing-ingredients">{card.missing.text()}</span> }.into_any()
    };

    view! {
        <li class="recipe-card" on:click=move |_| gloo::dialogs::alert(&detail)>
            <div class="recipe-details">
                <h4>{card.heading()}</h4>
                <p>{card.needs_line()}</p>
                {missing}
            </div>
        </li>
    }
}

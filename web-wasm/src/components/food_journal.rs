//! 食事記録のパネル

use leptos::ev;
use leptos::prelude::*;
use crate::notice::notify;
use crate::storage::LocalStore;
use health_tracker_common::{AppState, FoodEntry, MealForm, MEAL_TYPES};
use wasm_bindgen::JsValue;

/// 記録時刻をブラウザのロケールで表示
fn local_time(timestamp_ms: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp_ms as f64));
    date.to_locale_time_string("default").into()
}

#[component]
pub fn FoodJournalPanel(state: RwSignal<AppState>) -> impl IntoView {
    let form = RwSignal::new(MealForm::default());

    let on_log_meal = move |_: ev::MouseEvent| {
        let now_ms = js_sys::Date::now() as i64;
        let mut draft = form.get_untracked();

        match state.try_update(|s| draft.submit(s, &mut LocalStore, now_ms)) {
            Some(Ok(_)) => form.set(draft),
            Some(Err(e)) => notify(&e),
            None => {}
        }
    };

    let options = MEAL_TYPES
        .into_iter()
        .map(|option| {
            view! {
                <option value=option selected=move || form.with(|f| f.meal_type == option)>
                    {option}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="food-journal">
            <h2>"Food Journal"</h2>
            <div class="form-group">
                <select
                    id="meal-type-input"
                    on:change=move |ev| form.update(|f| f.meal_type = event_target_value(&ev))
                >
                    {options}
                </select>
                <input
                    type="text"
                    id="food-description-input"
                    placeholder="What did you eat?"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <input
                    type="url"
                    id="food-photo-input"
                    placeholder="Photo URL (optional)"
                    prop:value=move || form.with(|f| f.photo_url.clone())
                    on:input=move |ev| form.update(|f| f.photo_url = event_target_value(&ev))
                />
                <button id="log-meal-button" class="btn btn-primary" on:click=on_log_meal>
                    "Log Meal"
                </button>
            </div>

            <ul id="food-log-list">
                {move || {
                    state.with(|s| {
                        s.journal
                            .entries()
                            .iter()
                            .cloned()
                            .map(|entry| view! { <FoodLogItem entry=entry /> })
                            .collect_view()
                    })
                }}
            </ul>
        </div>
    }
}

#[component]
fn FoodLogItem(entry: FoodEntry) -> impl IntoView {
    let photo = entry.has_photo().then(|| {
        view! { <img src=entry.photo_url.clone() alt="Meal photo" class="food-photo" /> }
    });

    view! {
        <li>
            <div class="food-details">
                <p class="meal-type">
                    {format!("{} - {}", entry.meal_type, local_time(entry.timestamp))}
                </p>
                <p>{entry.description.clone()}</p>
            </div>
            {photo}
        </li>
    }
}

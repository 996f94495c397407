//! 水分摂取トラッカーのパネル

use leptos::ev;
use leptos::prelude::*;
use crate::components::progress_bar::ProgressBar;
use crate::notice::notify;
use crate::storage::LocalStore;
use health_tracker_common::{AppState, WaterForm};

#[component]
pub fn WaterPanel(state: RwSignal<AppState>, presets: Vec<u32>) -> impl IntoView {
    let form = RwSignal::new(WaterForm::default());

    let add_water = move |amount: u32| {
        let result = state.try_update(|s| s.add_water(&mut LocalStore, amount));
        if let Some(Err(e)) = result {
            notify(&e);
        }
    };

    let add_custom_water = move |_: ev::MouseEvent| {
        let mut draft = form.get_untracked();
        match state.try_update(|s| draft.submit(s, &mut LocalStore)) {
            Some(Ok(_)) => form.set(draft),
            Some(Err(e)) => notify(&e),
            None => {}
        }
    };

    let percent = Signal::derive(move || state.with(|s| s.water.progress_percent()));
    let label = Signal::derive(move || {
        state.with(|s| format!("{} / {} ml", s.water.consumed_ml, s.water.goal_ml))
    });

    let preset_buttons = presets
        .into_iter()
        .map(|amount| {
            view! {
                <button data-amount=amount.to_string() on:click=move |_| add_water(amount)>
                    {format!("+{} ml", amount)}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="water-tracker">
            <h2>"Water Tracker"</h2>
            <p>
                <span id="water-consumed">{move || state.with(|s| s.water.consumed_ml)}</span>
                " ml consumed"
            </p>

            <ProgressBar id="water-progress-bar" percent=percent label=label />

            <div class="water-input-controls">
                {preset_buttons}
                <input
                    type="number"
                    id="custom-water-input"
                    placeholder="Custom amount (ml)"
                    prop:value=move || form.with(|f| f.custom_amount.clone())
                    on:input=move |ev| {
                        form.update(|f| f.custom_amount = event_target_value(&ev));
                    }
                />
                <button id="add-custom-water" on:click=add_custom_water>
                    "Add"
                </button>
            </div>
        </div>
    }
}

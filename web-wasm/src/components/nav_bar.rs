//! セクション切り替えボタン

use leptos::prelude::*;
use health_tracker_common::{AppState, Section};

#[component]
pub fn NavBar(state: RwSignal<AppState>) -> impl IntoView {
    let buttons = Section::ALL
        .into_iter()
        .map(|section| {
            let is_active = move || state.with(|s| s.is_shown(section));
            view! {
                <button
                    data-section=section.id()
                    class:active=is_active
                    on:click=move |_| {
                        state.update(|s| {
                            s.navigate(section.id());
                        });
                    }
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav id="main-nav">
            {buttons}
        </nav>
    }
}

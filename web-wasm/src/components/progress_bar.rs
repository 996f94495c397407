//! プログレスバーコンポーネント

use leptos::prelude::*;

/// 進捗バー（percent は 0〜100）
#[component]
pub fn ProgressBar(
    #[prop(into)] id: String,
    percent: Signal<f64>,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    id=id
                    class="progress-fill"
                    style=move || format!("width: {}%", percent.get())
                />
            </div>
            <p class="progress-text">{move || label.get()}</p>
        </div>
    }
}

//! Neutral placeholder rendered while the session or a page fetch is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="loading__spinner"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}

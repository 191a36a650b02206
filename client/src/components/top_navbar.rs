//! Page header with the greeting and the theme toggle.

#[cfg(test)]
#[path = "top_navbar_test.rs"]
mod top_navbar_test;

use leptos::prelude::*;

use crate::net::types::Identity;
use crate::state::session::BrowserSession;

/// Header greeting for the signed-in user.
pub fn greeting(identity: Option<&Identity>) -> String {
    match identity {
        Some(user) => format!("Welcome back, {}", user.username),
        None => "Welcome".to_owned(),
    }
}

#[component]
pub fn TopNavbar(#[prop(into)] title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let theme = Memo::new(move |_| session.with(|s| s.theme()));
    let hello = Memo::new(move |_| session.with(|s| greeting(s.identity())));

    let on_toggle = move |_| {
        session.update(|s| {
            s.toggle_theme();
        });
    };

    view! {
        <header class="top-navbar">
            <div class="top-navbar__heading">
                <h1 class="top-navbar__title">{title}</h1>
                <span class="top-navbar__greeting">{move || hello.get()}</span>
            </div>
            <div class="top-navbar__actions">
                {children.map(|children| children())}
                <button
                    class="btn btn--ghost top-navbar__theme"
                    type="button"
                    title=move || theme.get().toggle_label()
                    aria-label=move || theme.get().toggle_label()
                    on:click=on_toggle
                >
                    {move || theme.get().toggle_icon()}
                </button>
            </div>
        </header>
    }
}

//! Landing route for the Google OAuth hand-off.
//!
//! The backend redirects here with `userId`, `username` and `email` query
//! parameters. The session gate validates them, signs in on success, and
//! says where to go next either way.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading::LoadingIndicator;
use crate::state::session::{BrowserSession, Navigation};

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let query = use_query_map();
    let navigate = use_navigate();

    // Untracked reads only, so this runs exactly once after mount.
    Effect::new(move || {
        let params = query.get_untracked();
        let mut next = Navigation::LoginFailed;
        session.update(|s| next = s.complete_oauth_handoff(|key| params.get(key)));
        navigate(&next.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! {
        <div class="auth-page">
            <LoadingIndicator label="Completing sign-in..."/>
        </div>
    }
}

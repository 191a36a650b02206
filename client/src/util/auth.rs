//! Route guard wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component mounts exactly one route tree per phase. This guard
//! watches the current path and replaces it whenever it falls outside the
//! reachable set, so a stale URL (bookmarked protected page while logged out,
//! `/login` right after signing in) always lands on the right home route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{BrowserSession, Phase};
use crate::util::routes::{AppRoute, GateDecision, decide};

/// Where `path` must be replaced to, if anywhere.
pub fn redirect_for(phase: &Phase, path: &str) -> Option<AppRoute> {
    match decide(phase, path) {
        GateDecision::Redirect(target) => Some(target),
        GateDecision::Loading | GateDecision::Render(_) => None,
    }
}

/// Re-run the gate on every session or path change and redirect as needed.
pub fn install_route_guard<F>(session: RwSignal<BrowserSession>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        let target = session.with(|s| redirect_for(s.phase(), &path));
        if let Some(target) = target {
            log::debug!("route guard: {path} -> {target}");
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

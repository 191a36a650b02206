//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form state, deletes)
//! and delegates rendering details to `components`. Protected pages read the
//! signed-in user from the session gate in context; they are only mounted
//! while the gate is authenticated.

pub mod categories;
pub mod credits;
pub mod dashboard;
pub mod expenses;
pub mod login;
pub mod oauth_callback;
pub mod register;
pub mod stats;
pub mod thresholds;

use leptos::prelude::*;

use crate::state::session::BrowserSession;

/// Id of the signed-in user, read without subscribing.
pub(crate) fn current_user_id(session: RwSignal<BrowserSession>) -> Option<i64> {
    session.with_untracked(|s| s.identity().map(|user| user.id))
}

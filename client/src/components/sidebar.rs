//! Protected-shell navigation rail with the signed-in user's badge.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::BrowserSession;
use crate::util::routes::ProtectedRoute;

/// Glyph shown beside each navigation entry.
fn nav_icon(route: ProtectedRoute) -> &'static str {
    match route {
        ProtectedRoute::Dashboard => "▦",
        ProtectedRoute::Expenses => "₹",
        ProtectedRoute::Categories => "◧",
        ProtectedRoute::Credits => "+",
        ProtectedRoute::Thresholds => "!",
        ProtectedRoute::Statistics => "▤",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let identity = Memo::new(move |_| session.with(|s| s.identity().cloned()));
    let pathname = use_location().pathname;

    let on_logout = move |_| session.update(|s| s.logout());

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"₹"</span>
                <span class="sidebar__title">"Cashflow"</span>
            </div>
            <nav class="sidebar__nav">
                {ProtectedRoute::ALL
                    .iter()
                    .map(|route| {
                        let route = *route;
                        let active = move || pathname.with(|path| path.trim_end_matches('/') == route.path().trim_end_matches('/'));
                        view! {
                            <a href=route.path() class="sidebar__link" class:sidebar__link--active=active>
                                <span class="sidebar__icon">{nav_icon(route)}</span>
                                <span class="sidebar__label">{route.label()}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                {move || {
                    identity
                        .get()
                        .map(|user| {
                            view! {
                                <div class="user-badge">
                                    <span class="user-badge__avatar">{user.initial().to_string()}</span>
                                    <div class="user-badge__text">
                                        <span class="user-badge__name">{user.username}</span>
                                        <span class="user-badge__email">{user.email}</span>
                                    </div>
                                </div>
                            }
                        })
                }}
                <button class="btn btn--ghost sidebar__logout" type="button" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{loading::LoadingIndicator, sidebar::Sidebar};
use crate::pages::{
    categories::CategoriesPage, credits::CreditsPage, dashboard::DashboardPage, expenses::ExpensesPage,
    login::LoginPage, oauth_callback::OAuthCallbackPage, register::RegisterPage, stats::StatsPage,
    thresholds::ThresholdsPage,
};
use crate::state::session::BrowserSession;
use crate::util::auth::install_route_guard;
use crate::util::dark_mode;
use crate::util::routes::RouteSet;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one session gate for the page, resolves it after mount, and
/// renders exactly one route tree for the current phase. The server never
/// sees durable storage, so it always renders the resolving placeholder and
/// the client swaps in the real tree once `resolve` has run.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(BrowserSession::new(BrowserStorage));
    provide_context(session);

    // Effects only run in the browser, after hydration.
    Effect::new(move || session.update(|s| s.resolve()));

    let theme = Memo::new(move |_| session.with(|s| s.theme()));
    Effect::new(move || dark_mode::apply(theme.get()));

    let route_set = Memo::new(move |_| session.with(|s| RouteSet::for_phase(s.phase())));

    view! {
        <Stylesheet id="leptos" href="/pkg/cashflow.css"/>
        <Title text="Cashflow"/>

        <Router>
            <RouteGuard/>
            {move || match route_set.get() {
                None => view! { <LoadingIndicator/> }.into_any(),
                Some(RouteSet::Public) => view! { <PublicRoutes/> }.into_any(),
                Some(RouteSet::Protected) => view! { <ProtectedShell/> }.into_any(),
            }}
        </Router>
    }
}

/// Keeps the location inside the reachable route set.
#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let navigate = use_navigate();
    install_route_guard(session, use_location().pathname, navigate);
}

#[component]
fn PublicRoutes() -> impl IntoView {
    view! {
        <main class="auth-layout">
            <Routes fallback=|| view! { <LoadingIndicator/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=(StaticSegment("oauth2"), StaticSegment("callback")) view=OAuthCallbackPage/>
            </Routes>
        </main>
    }
}

#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <div class="app-container">
            <Sidebar/>
            <main class="main-content">
                <Routes fallback=|| view! { <LoadingIndicator/> }>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("expenses") view=ExpensesPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("credits") view=CreditsPage/>
                    <Route path=StaticSegment("thresholds") view=ThresholdsPage/>
                    <Route path=StaticSegment("stats") view=StatsPage/>
                </Routes>
            </main>
        </div>
    }
}

//! Login page supporting username/password and Google OAuth sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::{self, ApiFailure, ApiResult, GOOGLE_OAUTH_URL};
use crate::net::types::Credentials;
use crate::state::session::{BrowserSession, OAUTH_FAILED};
use crate::util::routes::{ProtectedRoute, PublicRoute};
use crate::util::task;

/// Trim and require both login fields.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter your username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// User-facing text for a failed login.
pub fn login_error_message(failure: &ApiFailure) -> String {
    match failure.status() {
        Some(401) => failure.server_message().unwrap_or("Invalid username or password").to_owned(),
        Some(404) => "User not found. Please register first.".to_owned(),
        Some(status) if (200..300).contains(&status) => failure.server_message().unwrap_or("Login failed").to_owned(),
        _ => "Login failed. Please try again.".to_owned(),
    }
}

/// Banner for the `error` query parameter left by a failed OAuth hand-off.
pub fn oauth_notice(error: Option<&str>) -> Option<&'static str> {
    (error == Some(OAUTH_FAILED)).then_some("Sign-in failed. Please try again.")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(
        oauth_notice(query.with_untracked(|q| q.get("error")).as_deref()).map(str::to_owned),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        task::spawn(async move {
            match api::login(&credentials).await {
                ApiResult::Success(identity) => {
                    session.update(|s| s.login(identity));
                    navigate(ProtectedRoute::Dashboard.path(), NavigateOptions::default());
                }
                ApiResult::Failure(failure) => {
                    log::debug!("login rejected: {failure:?}");
                    error.set(Some(login_error_message(&failure)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__brand">
                    <span class="auth-card__logo">"₹"</span>
                    <h2>"Cashflow"</h2>
                    <p class="auth-card__subtitle">"Sign in to manage your finances"</p>
                </div>
                {move || error.get().map(|message| view! { <div class="alert alert--danger" role="alert">{message}</div> })}
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label" for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        class="form-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                    <label class="form-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="form-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-divider"><span>"or"</span></div>
                <a
                    href=GOOGLE_OAUTH_URL
                    class="btn btn--outline btn--block"
                    on:click=move |ev| {
                        ev.prevent_default();
                        #[cfg(feature = "hydrate")]
                        {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href(GOOGLE_OAUTH_URL);
                            }
                        }
                    }
                >
                    "Continue with Google"
                </a>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=PublicRoute::Register.path()>"Register"</a>
                </p>
            </div>
        </div>
    }
}

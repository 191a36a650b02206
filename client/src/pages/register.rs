//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, ApiFailure, ApiResult};
use crate::net::types::Registration;
use crate::state::session::BrowserSession;
use crate::util::routes::{ProtectedRoute, PublicRoute};
use crate::util::task;

/// Raw field values of the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Check the form and build the request payload.
    pub fn validate(&self) -> Result<Registration, &'static str> {
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err("Username, email and password are required");
        }
        Ok(Registration {
            username: username.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
        })
    }
}

/// User-facing text for a failed registration.
pub fn registration_error_message(failure: &ApiFailure) -> String {
    failure.server_message().unwrap_or("Registration failed. Please try again.").to_owned()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegistrationForm {
            first_name: first_name.get(),
            last_name: last_name.get(),
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        let registration = match form.validate() {
            Ok(registration) => registration,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        task::spawn(async move {
            match api::register(&registration).await {
                ApiResult::Success(identity) => {
                    session.update(|s| s.login(identity));
                    navigate(ProtectedRoute::Dashboard.path(), NavigateOptions::default());
                }
                ApiResult::Failure(failure) => error.set(Some(registration_error_message(&failure))),
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-label">{label}</label>
            <input
                class="form-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    error.set(None);
                }
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__brand">
                    <span class="auth-card__logo">"₹"</span>
                    <h2>"Cashflow"</h2>
                    <p class="auth-card__subtitle">"Create your account"</p>
                </div>
                {move || error.get().map(|message| view! { <div class="alert alert--danger" role="alert">{message}</div> })}
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group">{field("First Name", "text", "John", first_name)}</div>
                        <div class="form-group">{field("Last Name", "text", "Doe", last_name)}</div>
                    </div>
                    {field("Username *", "text", "johndoe", username)}
                    {field("Email *", "email", "john@example.com", email)}
                    {field("Password *", "password", "Min 6 characters", password)}
                    {field("Confirm Password *", "password", "Confirm password", confirm_password)}
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=PublicRoute::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

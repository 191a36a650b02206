//! Dismissible banner for threshold alerts and form feedback.

#[cfg(test)]
#[path = "alert_banner_test.rs"]
mod alert_banner_test;

use leptos::prelude::*;

use crate::net::types::AlertKind;

/// Visual severity of a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertTone {
    Danger,
    Warning,
    Info,
    Success,
}

impl AlertTone {
    /// Severity for a threshold alert: a breach outranks a warning.
    pub fn for_alert(kind: AlertKind) -> Self {
        match kind {
            AlertKind::Breach => Self::Danger,
            AlertKind::Warning => Self::Warning,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Danger => "alert alert--danger",
            Self::Warning => "alert alert--warning",
            Self::Info => "alert alert--info",
            Self::Success => "alert alert--success",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Danger => "⛔",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
            Self::Success => "✓",
        }
    }
}

#[component]
pub fn AlertBanner(
    tone: AlertTone,
    #[prop(into)] message: String,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=tone.class() role="alert">
            <span class="alert__icon">{tone.icon()}</span>
            <span class="alert__message">{message}</span>
            {on_close.map(|on_close| {
                view! {
                    <button class="alert__close" type="button" aria-label="Dismiss" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                }
            })}
        </div>
    }
}

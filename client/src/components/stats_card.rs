//! Single-figure summary card used on the dashboard and statistics pages.

use leptos::prelude::*;

/// Accent colour of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardTone {
    #[default]
    Primary,
    Success,
    Danger,
    Warning,
    Info,
}

impl CardTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "stats-card stats-card--primary",
            Self::Success => "stats-card stats-card--success",
            Self::Danger => "stats-card stats-card--danger",
            Self::Warning => "stats-card stats-card--warning",
            Self::Info => "stats-card stats-card--info",
        }
    }

    /// Success for a non-negative balance, danger otherwise.
    pub fn for_balance(balance: f64) -> Self {
        if balance < 0.0 { Self::Danger } else { Self::Success }
    }
}

#[component]
pub fn StatsCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] tone: CardTone,
    #[prop(optional, into)] icon: Option<String>,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            {icon.map(|icon| view! { <span class="stats-card__icon">{icon}</span> })}
            <div class="stats-card__body">
                <span class="stats-card__value">{move || value.get()}</span>
                <span class="stats-card__label">{label}</span>
            </div>
        </div>
    }
}

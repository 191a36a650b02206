//! Spending limits with their live alerts.
//!
//! Thresholds are listed with usage bars; toggling pauses evaluation without
//! losing the limit. Alerts come from the backend's own evaluation, so the
//! page re-fetches them after every change.

#[cfg(test)]
#[path = "thresholds_test.rs"]
mod thresholds_test;

use leptos::prelude::*;

use crate::components::alert_banner::{AlertBanner, AlertTone};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::loading::LoadingIndicator;
use crate::components::top_navbar::TopNavbar;
use crate::net::api::{self, ApiResult};
use crate::net::types::{Alert, Category, Threshold, ThresholdInput, ThresholdPeriod};
use crate::pages::current_user_id;
use crate::state::listing::Listing;
use crate::state::session::BrowserSession;
use crate::util::format;
use crate::util::routes::ProtectedRoute;
use crate::util::task;

/// Alert percentage pre-filled in the form.
pub const DEFAULT_ALERT_PERCENTAGE: i32 = 80;

/// Raw field values of the set-threshold form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThresholdForm {
    pub limit_amount: String,
    pub category_id: String,
    pub period: ThresholdPeriod,
    pub alert_percentage: String,
}

impl Default for ThresholdForm {
    fn default() -> Self {
        Self {
            limit_amount: String::new(),
            category_id: String::new(),
            period: ThresholdPeriod::Monthly,
            alert_percentage: DEFAULT_ALERT_PERCENTAGE.to_string(),
        }
    }
}

impl ThresholdForm {
    /// An empty category means an overall limit.
    pub fn validate(&self, user_id: i64) -> Result<ThresholdInput, &'static str> {
        let limit_amount = format::parse_amount(&self.limit_amount).ok_or("Enter a valid limit")?;
        let category_id = match self.category_id.trim() {
            "" => None,
            raw => Some(raw.parse::<i64>().map_err(|_| "Select a valid category")?),
        };
        let alert_percentage = self
            .alert_percentage
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|pct| (1..=100).contains(pct))
            .ok_or("Alert percentage must be between 1 and 100")?;
        Ok(ThresholdInput { limit_amount, threshold_type: self.period, alert_percentage, user_id, category_id })
    }
}

/// Usage bar colour: breached at 100%, warning from 80%.
pub fn usage_class(usage: f64) -> &'static str {
    if usage >= 100.0 {
        "progress__bar progress__bar--danger"
    } else if usage >= 80.0 {
        "progress__bar progress__bar--warning"
    } else {
        "progress__bar progress__bar--success"
    }
}

#[component]
pub fn ThresholdsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let listing = RwSignal::new(Listing::<Threshold>::default());
    let alerts = RwSignal::new(Vec::<Alert>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let form = RwSignal::new(ThresholdForm::default());
    let show_form = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<i64>);

    let reload = move || {
        let Some(user_id) = current_user_id(session) else {
            return;
        };
        listing.update(Listing::begin);
        task::spawn(async move {
            let thresholds = api::list_thresholds(user_id).await;
            let fetched_alerts = api::check_thresholds(user_id).await;
            let fetched_categories = api::list_categories(user_id).await;
            listing.update(|l| l.finish(thresholds));
            alerts.set(fetched_alerts.ok().unwrap_or_default());
            if let ApiResult::Success(fetched) = fetched_categories {
                categories.set(fetched);
            }
        });
    };
    reload();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(user_id) = current_user_id(session) else {
            return;
        };
        let input = match form.with(|f| f.validate(user_id)) {
            Ok(input) => input,
            Err(message) => {
                notice.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        task::spawn(async move {
            match api::set_threshold(&input).await {
                ApiResult::Success(_) => {
                    show_form.set(false);
                    form.set(ThresholdForm::default());
                    reload();
                }
                ApiResult::Failure(failure) => notice.set(Some(format!("Error setting threshold: {failure}"))),
            }
            busy.set(false);
        });
    };

    let toggle = move |id: i64| {
        task::spawn(async move {
            match api::toggle_threshold(id).await {
                ApiResult::Success(_) => reload(),
                ApiResult::Failure(failure) => notice.set(Some(format!("Error toggling threshold: {failure}"))),
            }
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        task::spawn(async move {
            match api::delete_threshold(id).await {
                ApiResult::Success(()) => reload(),
                ApiResult::Failure(failure) => notice.set(Some(format!("Error deleting threshold: {failure}"))),
            }
        });
    });

    view! {
        <TopNavbar title=ProtectedRoute::Thresholds.title()>
            <button class="btn btn--primary" type="button" on:click=move |_| show_form.update(|open| *open = !*open)>
                {move || if show_form.get() { "Close" } else { "+ Set Threshold" }}
            </button>
        </TopNavbar>
        {move || notice.get().map(|message| view! {
            <AlertBanner tone=AlertTone::Danger message=message on_close=Callback::new(move |()| notice.set(None))/>
        })}
        <Show when=move || alerts.with(|a| !a.is_empty())>
            <section class="alerts-stack">
                <h5 class="section-title">{move || format!("Active Alerts ({})", alerts.with(Vec::len))}</h5>
                {move || alerts.get().into_iter().map(|alert| view! {
                    <AlertBanner tone=AlertTone::for_alert(alert.alert_type) message=alert.message/>
                }).collect_view()}
            </section>
        </Show>
        <Show when=move || show_form.get()>
            <form class="card form-card" on:submit=on_submit>
                <h3 class="card__header">"Set Spending Threshold"</h3>
                <div class="form-grid">
                    <label class="form-label">
                        "Limit Amount *"
                        <input class="form-input" type="number" step="0.01" placeholder="0.00"
                            prop:value=move || form.with(|f| f.limit_amount.clone())
                            on:input=move |ev| form.update(|f| f.limit_amount = event_target_value(&ev))/>
                    </label>
                    <label class="form-label">
                        "Category"
                        <select class="form-input"
                            prop:value=move || form.with(|f| f.category_id.clone())
                            on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))>
                            <option value="">"Overall (all categories)"</option>
                            {move || categories.get().into_iter().map(|category| view! {
                                <option value=category.id.to_string()>{category.name}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form-label">
                        "Period"
                        <select class="form-input"
                            prop:value=move || form.with(|f| f.period.as_str())
                            on:change=move |ev| {
                                if let Some(period) = ThresholdPeriod::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.period = period);
                                }
                            }>
                            {ThresholdPeriod::ALL.iter().map(|period| view! {
                                <option value=period.as_str()>{period.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form-label">
                        "Alert at (%)"
                        <input class="form-input" type="number" min="1" max="100"
                            prop:value=move || form.with(|f| f.alert_percentage.clone())
                            on:input=move |ev| form.update(|f| f.alert_percentage = event_target_value(&ev))/>
                    </label>
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Set Threshold"</button>
            </form>
        </Show>
        {move || {
            let (loading, error, rows) = listing.with(|l| (l.loading, l.error.clone(), l.items.clone()));
            if loading && rows.is_empty() {
                return view! { <LoadingIndicator/> }.into_any();
            }
            if let Some(error) = error {
                return view! { <section class="card"><p class="empty-state">{error}</p></section> }.into_any();
            }
            if rows.is_empty() {
                return view! {
                    <section class="card empty-state">
                        <h5>"No thresholds set"</h5>
                        <p>"Set spending limits to get alerts when you're overspending"</p>
                    </section>
                }.into_any();
            }
            view! {
                <div class="card-grid">
                    {rows.into_iter().map(|threshold| threshold_card(threshold, toggle, pending_delete)).collect_view()}
                </div>
            }.into_any()
        }}
        <ConfirmModal
            open=Signal::derive(move || pending_delete.get().is_some())
            title="Delete threshold"
            message=Signal::derive(|| "Delete this threshold?".to_owned())
            on_confirm=on_confirm_delete
            on_cancel=Callback::new(move |()| pending_delete.set(None))
        />
    }
}

fn threshold_card<T>(threshold: Threshold, toggle: T, pending_delete: RwSignal<Option<i64>>) -> impl IntoView
where
    T: Fn(i64) + Copy + Send + Sync + 'static,
{
    let id = threshold.id;
    let active = threshold.is_active.unwrap_or(false);
    let breached = threshold.is_breached.unwrap_or(false);
    let usage = threshold.usage_percentage.unwrap_or(0.0);
    let remaining = threshold.remaining_amount.unwrap_or(0.0);
    let period = threshold.threshold_type.unwrap_or_default().as_str();
    let alert_at = threshold.alert_percentage.unwrap_or(DEFAULT_ALERT_PERCENTAGE);
    let bar_width = format!("width: {:.1}%", usage.clamp(0.0, 100.0));
    let (status_class, status_text) = if active { ("badge badge--success", "Active") } else { ("badge badge--muted", "Inactive") };
    let (toggle_title, toggle_text) = if active { ("Disable", "Pause") } else { ("Enable", "Resume") };
    let remaining_class = if remaining < 0.0 { "fw-semibold amount--negative" } else { "fw-semibold amount--positive" };

    view! {
        <div class="card threshold-card" class:threshold-card--breached=breached>
            <div class="threshold-card__head">
                <div>
                    <h5>{threshold.scope_label()}</h5>
                    <span class=status_class>{status_text}</span>
                    {breached.then(|| view! { <span class="badge badge--danger">"Breached!"</span> })}
                </div>
                <div class="btn-group">
                    <button class="btn btn--outline btn--small" type="button"
                        title=toggle_title
                        on:click=move |_| toggle(id)>
                        {toggle_text}
                    </button>
                    <button class="btn btn--danger-outline btn--small" type="button" aria-label="Delete threshold"
                        on:click=move |_| pending_delete.set(Some(id))>"Delete"</button>
                </div>
            </div>
            <div class="threshold-card__usage">
                <div class="threshold-card__figures">
                    <span>{format::amount(threshold.current_spending.unwrap_or(0.0))}</span>
                    <span>{format::amount(threshold.limit_amount)}</span>
                </div>
                <div class="progress"><div class=usage_class(usage) style=bar_width></div></div>
                <div class="text-muted text-small">
                    {format!("{} used • {period} limit • Alert at {alert_at}%", format::percent(usage))}
                </div>
            </div>
            <div class="threshold-card__foot">
                <span>"Remaining:"</span>
                <span class=remaining_class>{format::amount(remaining)}</span>
            </div>
        </div>
    }
}

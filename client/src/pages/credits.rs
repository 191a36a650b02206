//! Income records with create, delete and the running total.

#[cfg(test)]
#[path = "credits_test.rs"]
mod credits_test;

use leptos::prelude::*;

use crate::components::alert_banner::{AlertBanner, AlertTone};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::loading::LoadingIndicator;
use crate::components::stats_card::{CardTone, StatsCard};
use crate::components::top_navbar::TopNavbar;
use crate::net::api::{self, ApiResult};
use crate::net::types::{Credit, CreditInput};
use crate::pages::current_user_id;
use crate::state::listing::Listing;
use crate::state::session::BrowserSession;
use crate::util::format;
use crate::util::routes::ProtectedRoute;
use crate::util::task;

/// Income kinds offered by the form, as `(wire value, label)`.
pub const CREDIT_TYPES: [(&str, &str); 5] = [
    ("SALARY", "Salary"),
    ("BONUS", "Bonus"),
    ("INVESTMENT", "Investment"),
    ("REFUND", "Refund"),
    ("OTHER", "Other"),
];

/// Raw field values of the add-credit form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreditForm {
    pub amount: String,
    pub source: String,
    pub description: String,
    pub credit_date: String,
    pub credit_type: String,
}

impl CreditForm {
    /// Blank salary entry dated `today`.
    pub fn blank(today: String) -> Self {
        Self {
            amount: String::new(),
            source: String::new(),
            description: String::new(),
            credit_date: today,
            credit_type: CREDIT_TYPES[0].0.to_owned(),
        }
    }

    pub fn validate(&self, user_id: i64) -> Result<CreditInput, &'static str> {
        let amount = format::parse_amount(&self.amount).ok_or("Enter a valid amount")?;
        let source = format::non_blank(&self.source).ok_or("Source is required")?;
        Ok(CreditInput {
            amount,
            source: Some(source),
            description: format::non_blank(&self.description),
            credit_date: format::non_blank(&self.credit_date),
            credit_type: format::non_blank(&self.credit_type),
            user_id,
        })
    }
}

/// Sum of the listed credits, used when the total endpoint fails.
pub fn listed_total(credits: &[Credit]) -> f64 {
    credits.iter().map(|c| c.amount).sum()
}

#[component]
pub fn CreditsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let listing = RwSignal::new(Listing::<Credit>::default());
    let total = RwSignal::new(None::<f64>);
    let form = RwSignal::new(CreditForm::blank(format::today_iso()));
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
            let credits = api::list_credits(user_id).await;
            let sum = api::total_credits(user_id).await;
            listing.update(|l| l.finish(credits));
            total.set(sum.ok());
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
            match api::add_credit(&input).await {
                ApiResult::Success(_) => {
                    show_form.set(false);
                    form.set(CreditForm::blank(format::today_iso()));
                    reload();
                }
                ApiResult::Failure(failure) => notice.set(Some(format!("Error adding credit: {failure}"))),
            }
            busy.set(false);
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        task::spawn(async move {
            match api::delete_credit(id).await {
                ApiResult::Success(()) => reload(),
                ApiResult::Failure(failure) => notice.set(Some(format!("Error deleting credit: {failure}"))),
            }
        });
    });

    let bind = move |pick: fn(&mut CreditForm) -> &mut String| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| *pick(f) = value);
        }
    };

    let total_label = Signal::derive(move || {
        let value = total.get().unwrap_or_else(|| listing.with(|l| listed_total(&l.items)));
        format::amount(value)
    });

    view! {
        <TopNavbar title=ProtectedRoute::Credits.title()>
            <button class="btn btn--primary" type="button" on:click=move |_| show_form.update(|open| *open = !*open)>
                {move || if show_form.get() { "Close" } else { "+ Add Credit" }}
            </button>
        </TopNavbar>
        {move || notice.get().map(|message| view! {
            <AlertBanner tone=AlertTone::Danger message=message on_close=Callback::new(move |()| notice.set(None))/>
        })}
        <div class="stats-grid stats-grid--single">
            <StatsCard label="Total Credits" icon="↑" tone=CardTone::Success value=total_label/>
        </div>
        <Show when=move || show_form.get()>
            <form class="card form-card" on:submit=on_submit>
                <h3 class="card__header">"Add New Credit"</h3>
                <div class="form-grid">
                    <label class="form-label">
                        "Amount *"
                        <input class="form-input" type="number" step="0.01" placeholder="0.00"
                            prop:value=move || form.with(|f| f.amount.clone())
                            on:input=bind(|f| &mut f.amount)/>
                    </label>
                    <label class="form-label">
                        "Source *"
                        <input class="form-input" type="text" placeholder="e.g., Company Name"
                            prop:value=move || form.with(|f| f.source.clone())
                            on:input=bind(|f| &mut f.source)/>
                    </label>
                    <label class="form-label">
                        "Type"
                        <select class="form-input"
                            prop:value=move || form.with(|f| f.credit_type.clone())
                            on:change=bind(|f| &mut f.credit_type)>
                            {CREDIT_TYPES.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form-label">
                        "Description"
                        <input class="form-input" type="text" placeholder="Optional description"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=bind(|f| &mut f.description)/>
                    </label>
                    <label class="form-label">
                        "Date"
                        <input class="form-input" type="date"
                            prop:value=move || form.with(|f| f.credit_date.clone())
                            on:input=bind(|f| &mut f.credit_date)/>
                    </label>
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Add Credit"</button>
            </form>
        </Show>
        <section class="card">
            {move || {
                let (loading, error, rows) = listing.with(|l| (l.loading, l.error.clone(), l.items.clone()));
                if loading && rows.is_empty() {
                    return view! { <LoadingIndicator/> }.into_any();
                }
                if let Some(error) = error {
                    return view! { <p class="empty-state">{error}</p> }.into_any();
                }
                if rows.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <h5>"No credits yet"</h5>
                            <p>"Click \"Add Credit\" to record your income"</p>
                        </div>
                    }.into_any();
                }
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Source"</th>
                                <th>"Description"</th>
                                <th>"Type"</th>
                                <th class="text-end">"Amount"</th>
                                <th class="text-end">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|credit| {
                                let id = credit.id;
                                view! {
                                    <tr>
                                        <td>{credit.credit_date.unwrap_or_default()}</td>
                                        <td class="fw-semibold">{credit.source.unwrap_or_default()}</td>
                                        <td>{credit.description.unwrap_or_else(|| "-".to_owned())}</td>
                                        <td><span class="badge badge--success">{credit.credit_type.unwrap_or_default()}</span></td>
                                        <td class="text-end amount--positive">{format!("+{}", format::amount(credit.amount))}</td>
                                        <td class="text-end">
                                            <button class="btn btn--danger-outline btn--small" type="button" aria-label="Delete credit"
                                                on:click=move |_| pending_delete.set(Some(id))>"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </section>
        <ConfirmModal
            open=Signal::derive(move || pending_delete.get().is_some())
            title="Delete credit"
            message=Signal::derive(|| "Are you sure you want to delete this credit?".to_owned())
            on_confirm=on_confirm_delete
            on_cancel=Callback::new(move |()| pending_delete.set(None))
        />
    }
}

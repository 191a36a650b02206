//! Expense list with create and delete.

#[cfg(test)]
#[path = "expenses_test.rs"]
mod expenses_test;

use leptos::prelude::*;

use crate::components::alert_banner::{AlertBanner, AlertTone};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::loading::LoadingIndicator;
use crate::components::top_navbar::TopNavbar;
use crate::net::api::{self, ApiResult};
use crate::net::types::{Category, Expense, ExpenseInput};
use crate::pages::current_user_id;
use crate::state::listing::Listing;
use crate::state::session::BrowserSession;
use crate::util::format;
use crate::util::routes::ProtectedRoute;
use crate::util::task;

/// Payment methods offered by the form, as `(wire value, label)`.
pub const PAYMENT_METHODS: [(&str, &str); 4] =
    [("CASH", "Cash"), ("CARD", "Card"), ("UPI", "UPI"), ("BANK", "Bank Transfer")];

/// Raw field values of the add-expense form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub description: String,
    pub category_id: String,
    pub expense_date: String,
    pub payment_method: String,
}

impl ExpenseForm {
    /// Blank form dated `today`, paid in cash.
    pub fn blank(today: String) -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            category_id: String::new(),
            expense_date: today,
            payment_method: PAYMENT_METHODS[0].0.to_owned(),
        }
    }

    pub fn validate(&self, user_id: i64) -> Result<ExpenseInput, &'static str> {
        let amount = format::parse_amount(&self.amount).ok_or("Enter a valid amount")?;
        let category_id = self.category_id.trim().parse::<i64>().map_err(|_| "Select a category")?;
        Ok(ExpenseInput {
            amount,
            description: format::non_blank(&self.description),
            expense_date: format::non_blank(&self.expense_date),
            payment_method: format::non_blank(&self.payment_method),
            merchant_name: None,
            user_id,
            category_id,
        })
    }
}

#[component]
pub fn ExpensesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let listing = RwSignal::new(Listing::<Expense>::default());
    let categories = RwSignal::new(Vec::<Category>::new());
    let form = RwSignal::new(ExpenseForm::blank(format::today_iso()));
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
            let expenses = api::list_expenses(user_id).await;
            let fetched = api::list_categories(user_id).await;
            listing.update(|l| l.finish(expenses));
            if let ApiResult::Success(fetched) = fetched {
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
            match api::add_expense(&input).await {
                ApiResult::Success(_) => {
                    show_form.set(false);
                    form.set(ExpenseForm::blank(format::today_iso()));
                    reload();
                }
                ApiResult::Failure(failure) => notice.set(Some(format!("Error adding expense: {failure}"))),
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
            match api::delete_expense(id).await {
                ApiResult::Success(()) => listing.update(|l| l.remove_where(|e| e.id == id)),
                ApiResult::Failure(failure) => notice.set(Some(format!("Error deleting expense: {failure}"))),
            }
        });
    });

    let bind = move |pick: fn(&mut ExpenseForm) -> &mut String| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| *pick(f) = value);
        }
    };

    view! {
        <TopNavbar title=ProtectedRoute::Expenses.title()>
            <button class="btn btn--primary" type="button" on:click=move |_| show_form.update(|open| *open = !*open)>
                {move || if show_form.get() { "Close" } else { "+ Add Expense" }}
            </button>
        </TopNavbar>
        {move || notice.get().map(|message| view! {
            <AlertBanner tone=AlertTone::Danger message=message on_close=Callback::new(move |()| notice.set(None))/>
        })}
        <Show when=move || show_form.get()>
            <form class="card form-card" on:submit=on_submit>
                <h3 class="card__header">"Add New Expense"</h3>
                <div class="form-grid">
                    <label class="form-label">
                        "Amount *"
                        <input class="form-input" type="number" step="0.01" placeholder="0.00"
                            prop:value=move || form.with(|f| f.amount.clone())
                            on:input=bind(|f| &mut f.amount)/>
                    </label>
                    <label class="form-label">
                        "Category *"
                        <select class="form-input"
                            prop:value=move || form.with(|f| f.category_id.clone())
                            on:change=bind(|f| &mut f.category_id)>
                            <option value="">"Select category"</option>
                            {move || categories.get().into_iter().map(|category| view! {
                                <option value=category.id.to_string()>{category.name}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <label class="form-label">
                        "Description"
                        <input class="form-input" type="text" placeholder="What was this for?"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=bind(|f| &mut f.description)/>
                    </label>
                    <label class="form-label">
                        "Date"
                        <input class="form-input" type="date"
                            prop:value=move || form.with(|f| f.expense_date.clone())
                            on:input=bind(|f| &mut f.expense_date)/>
                    </label>
                    <label class="form-label">
                        "Payment Method"
                        <select class="form-input"
                            prop:value=move || form.with(|f| f.payment_method.clone())
                            on:change=bind(|f| &mut f.payment_method)>
                            {PAYMENT_METHODS.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Add Expense"</button>
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
                            <h5>"No expenses yet"</h5>
                            <p>"Click \"Add Expense\" to start tracking your spending"</p>
                        </div>
                    }.into_any();
                }
                view! {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Description"</th>
                                <th>"Category"</th>
                                <th>"Payment"</th>
                                <th class="text-end">"Amount"</th>
                                <th class="text-end">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|expense| {
                                let id = expense.id;
                                view! {
                                    <tr>
                                        <td>{expense.expense_date.unwrap_or_default()}</td>
                                        <td>{expense.description.unwrap_or_else(|| "-".to_owned())}</td>
                                        <td><span class="badge">{expense.category_name.unwrap_or_default()}</span></td>
                                        <td>{expense.payment_method.unwrap_or_default()}</td>
                                        <td class="text-end amount--negative">{format!("-{}", format::amount(expense.amount))}</td>
                                        <td class="text-end">
                                            <button class="btn btn--danger-outline btn--small" type="button" aria-label="Delete expense"
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
            title="Delete expense"
            message=Signal::derive(|| "Are you sure you want to delete this expense?".to_owned())
            on_confirm=on_confirm_delete
            on_cancel=Callback::new(move |()| pending_delete.set(None))
        />
    }
}

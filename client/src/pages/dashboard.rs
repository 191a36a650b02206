//! Dashboard landing page for signed-in users.
//!
//! Shows the all-time summary, any threshold alerts, the five most recent
//! expenses, and the category breakdown. A failed fetch never blanks the
//! page: each section degrades to its empty form.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::alert_banner::{AlertBanner, AlertTone};
use crate::components::loading::LoadingIndicator;
use crate::components::stats_card::{CardTone, StatsCard};
use crate::components::top_navbar::TopNavbar;
use crate::net::api::{self, ApiResult};
use crate::net::types::{Alert, Expense, ExpenseSummary};
use crate::pages::current_user_id;
use crate::state::session::BrowserSession;
use crate::util::format;
use crate::util::routes::ProtectedRoute;
use crate::util::task;

/// Number of expenses listed under "Recent Expenses".
pub const RECENT_EXPENSES: usize = 5;

/// Everything the dashboard renders, already degraded for failures.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub summary: ExpenseSummary,
    pub alerts: Vec<Alert>,
    pub recent: Vec<Expense>,
}

impl DashboardData {
    /// Combine the three dashboard fetches. Failures become empty sections.
    pub fn assemble(
        summary: ApiResult<ExpenseSummary>,
        alerts: ApiResult<Vec<Alert>>,
        expenses: ApiResult<Vec<Expense>>,
    ) -> Self {
        let summary = summary.into_result().unwrap_or_else(|failure| {
            log::warn!("dashboard summary unavailable: {failure}");
            ExpenseSummary::default()
        });
        let alerts = alerts.ok().unwrap_or_default();
        let mut recent = expenses.ok().unwrap_or_default();
        recent.truncate(RECENT_EXPENSES);
        Self { summary, alerts, recent }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let data = RwSignal::new(None::<DashboardData>);

    if let Some(user_id) = current_user_id(session) {
        task::spawn(async move {
            let summary = api::expense_summary(user_id).await;
            let alerts = api::threshold_alerts(user_id).await;
            let expenses = api::list_expenses(user_id).await;
            data.set(Some(DashboardData::assemble(summary, alerts, expenses)));
        });
    }

    let summary = move || data.with(|d| d.as_ref().map(|d| d.summary.clone()).unwrap_or_default());

    view! {
        <TopNavbar title=ProtectedRoute::Dashboard.title()/>
        <Show when=move || data.with(Option::is_some) fallback=|| view! { <LoadingIndicator/> }>
            <div class="alerts-stack">
                {move || {
                    data.with(|d| d.as_ref().map(|d| d.alerts.clone()).unwrap_or_default())
                        .into_iter()
                        .map(|alert| view! { <AlertBanner tone=AlertTone::for_alert(alert.alert_type) message=alert.message/> })
                        .collect_view()
                }}
            </div>
            <div class="stats-grid">
                <StatsCard
                    label="Total Credits"
                    icon="↑"
                    tone=CardTone::Success
                    value=Signal::derive(move || format::amount(summary().total_credits))
                />
                <StatsCard
                    label="Total Expenses"
                    icon="↓"
                    tone=CardTone::Danger
                    value=Signal::derive(move || format::amount(summary().total_expenses))
                />
                <StatsCard
                    label="Net Balance"
                    icon="="
                    tone=CardTone::Primary
                    value=Signal::derive(move || format::amount(summary().net_balance))
                />
                <StatsCard
                    label="Transactions"
                    icon="#"
                    tone=CardTone::Warning
                    value=Signal::derive(move || summary().expense_count.to_string())
                />
            </div>
            <div class="dashboard-grid">
                <section class="card">
                    <div class="card__header">
                        <span>"Recent Expenses"</span>
                        <a href=ProtectedRoute::Expenses.path() class="btn btn--primary btn--small">"View All"</a>
                    </div>
                    {move || {
                        let recent = data.with(|d| d.as_ref().map(|d| d.recent.clone()).unwrap_or_default());
                        if recent.is_empty() {
                            return view! { <p class="empty-state">"No expenses yet. Start tracking!"</p> }.into_any();
                        }
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Description"</th>
                                        <th>"Category"</th>
                                        <th>"Date"</th>
                                        <th class="text-end">"Amount"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {recent
                                        .into_iter()
                                        .map(|expense| {
                                            view! {
                                                <tr>
                                                    <td>{expense.description.unwrap_or_else(|| "No description".to_owned())}</td>
                                                    <td><span class="badge">{expense.category_name.unwrap_or_default()}</span></td>
                                                    <td>{expense.expense_date.unwrap_or_default()}</td>
                                                    <td class="text-end amount--negative">{format!("-{}", format::amount(expense.amount))}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    }}
                </section>
                <section class="card">
                    <div class="card__header">"Category Breakdown"</div>
                    {move || {
                        let breakdown = summary().category_breakdown;
                        if breakdown.is_empty() {
                            return view! { <p class="empty-state">"No data available"</p> }.into_any();
                        }
                        breakdown
                            .into_iter()
                            .map(|category| {
                                let width = format!("width: {:.1}%", category.percentage.clamp(0.0, 100.0));
                                view! {
                                    <div class="breakdown-row">
                                        <div class="breakdown-row__label">
                                            <span>{category.category_name}</span>
                                            <span class="fw-semibold">{format::amount(category.total_amount)}</span>
                                        </div>
                                        <div class="progress"><div class="progress__bar" style=width></div></div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </section>
            </div>
        </Show>
    }
}

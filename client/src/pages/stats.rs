//! Monthly statistics and spending trends, rendered as tables.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use leptos::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::components::stats_card::{CardTone, StatsCard};
use crate::components::top_navbar::TopNavbar;
use crate::net::api::{self, ApiResult, DEFAULT_TREND_MONTHS};
use crate::net::types::{MonthlyStats, MonthlyTrend};
use crate::pages::current_user_id;
use crate::state::session::BrowserSession;
use crate::util::format;
use crate::util::routes::ProtectedRoute;
use crate::util::task;

/// How many months back the period picker reaches.
pub const PICKER_MONTHS: u32 = 12;

const MONTH_NAMES: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// `(year, month)` parsed from an ISO `YYYY-MM-DD` date.
pub fn year_month(iso_date: &str) -> Option<(i32, u32)> {
    let mut parts = iso_date.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Move `(year, month)` back by `offset` months.
pub fn months_before((year, month): (i32, u32), offset: u32) -> (i32, u32) {
    let index = i64::from(year) * 12 + i64::from(month) - 1 - i64::from(offset);
    let year = i32::try_from(index.div_euclid(12)).unwrap_or(year);
    let month = u32::try_from(index.rem_euclid(12)).unwrap_or(0) + 1;
    (year, month)
}

/// Picker entries, newest first.
pub fn period_options(anchor: (i32, u32), count: u32) -> Vec<(i32, u32)> {
    (0..count).map(|offset| months_before(anchor, offset)).collect()
}

pub fn period_label((year, month): (i32, u32)) -> String {
    let name = (month as usize).checked_sub(1).and_then(|i| MONTH_NAMES.get(i)).copied().unwrap_or("?");
    format!("{name} {year}")
}

fn period_value((year, month): (i32, u32)) -> String {
    format!("{year}-{month}")
}

/// Month-over-month change, signed, or "-" without a previous month.
pub fn change_label(stats: &MonthlyStats) -> String {
    match stats.change_percentage {
        Some(pct) if stats.is_increase => format!("+{}", format::percent(pct.abs())),
        Some(pct) => format!("-{}", format::percent(pct.abs())),
        None => "-".to_owned(),
    }
}

#[component]
pub fn StatsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let period = RwSignal::new(year_month(&format::today_iso()));
    let category = RwSignal::new(None::<i64>);
    let stats = RwSignal::new(None::<MonthlyStats>);
    let trends = RwSignal::new(Vec::<MonthlyTrend>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let selected = period.get();
        let category_id = category.get();
        let Some(user_id) = current_user_id(session) else {
            return;
        };
        loading.set(true);
        task::spawn(async move {
            let (year, month) = selected.map_or((None, None), |(y, m)| (Some(y), Some(m)));
            let monthly = api::monthly_stats(user_id, year, month).await;
            let trend = api::monthly_trends(user_id, DEFAULT_TREND_MONTHS, category_id).await;
            match monthly {
                ApiResult::Success(fetched) => {
                    if selected.is_none() {
                        period.set(Some((fetched.year, fetched.month)));
                    }
                    stats.set(Some(fetched));
                    error.set(None);
                }
                ApiResult::Failure(failure) => {
                    stats.set(None);
                    error.set(Some(failure.to_string()));
                }
            }
            trends.set(trend.ok().unwrap_or_default());
            loading.set(false);
        });
    });

    let stat = move |pick: fn(&MonthlyStats) -> String| {
        Signal::derive(move || stats.with(|s| s.as_ref().map_or_else(|| "-".to_owned(), pick)))
    };

    view! {
        <TopNavbar title=ProtectedRoute::Statistics.label()>
            <select
                class="form-input form-input--inline"
                prop:value=move || period.get().map(period_value).unwrap_or_default()
                on:change=move |ev| {
                    if let Some(selected) = year_month(&format!("{}-01", event_target_value(&ev))) {
                        period.set(Some(selected));
                    }
                }
            >
                {move || period.get().map(|anchor| {
                    period_options(anchor, PICKER_MONTHS).into_iter().map(|option| view! {
                        <option value=period_value(option)>{period_label(option)}</option>
                    }).collect_view()
                })}
            </select>
        </TopNavbar>
        {move || error.get().map(|message| view! { <div class="alert alert--danger" role="alert">{message}</div> })}
        <Show when=move || !loading.get() || stats.with(Option::is_some) fallback=|| view! { <LoadingIndicator/> }>
            <div class="stats-grid">
                <StatsCard label="Total Spent" icon="₹" tone=CardTone::Danger value=stat(|s| format::amount(s.total_spent))/>
                <StatsCard label="Daily Average" icon="≈" tone=CardTone::Primary value=stat(|s| format::amount(s.avg_daily))/>
                <StatsCard
                    label="Top Category"
                    icon="★"
                    tone=CardTone::Info
                    value=stat(|s| s.top_category_name.clone().unwrap_or_else(|| "-".to_owned()))
                />
                <StatsCard label="vs Last Month" icon="±" tone=CardTone::Warning value=stat(change_label)/>
            </div>
            <div class="dashboard-grid">
                <section class="card">
                    <div class="card__header">
                        <span>"Spending Trend"</span>
                        <select
                            class="form-input form-input--inline"
                            prop:value=move || category.get().map(|id| id.to_string()).unwrap_or_default()
                            on:change=move |ev| category.set(event_target_value(&ev).parse::<i64>().ok())
                        >
                            <option value="">"All Categories"</option>
                            {move || stats.with(|s| s.as_ref().map(|s| s.category_breakdown.clone()).unwrap_or_default())
                                .into_iter()
                                .filter_map(|share| share.category_id.map(|id| view! {
                                    <option value=id.to_string()>{share.category_name}</option>
                                }))
                                .collect_view()}
                        </select>
                    </div>
                    {move || {
                        let rows = trends.get();
                        if rows.is_empty() {
                            return view! { <p class="empty-state">"No trend data yet"</p> }.into_any();
                        }
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Month"</th>
                                        <th class="text-end">"Transactions"</th>
                                        <th class="text-end">"Spent"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|row| view! {
                                        <tr>
                                            <td>{format!("{} {}", row.month_name, row.year)}</td>
                                            <td class="text-end">{row.transaction_count}</td>
                                            <td class="text-end">{format::amount(row.total_spent)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </section>
                <section class="card">
                    <div class="card__header">"By Category"</div>
                    {move || {
                        let shares = stats.with(|s| s.as_ref().map(|s| s.category_breakdown.clone()).unwrap_or_default());
                        if shares.is_empty() {
                            return view! { <p class="empty-state">"No data for this month"</p> }.into_any();
                        }
                        view! {
                            <table class="table">
                                <tbody>
                                    {shares.into_iter().map(|share| {
                                        let swatch = share.color.map(|c| format!("background: {c}")).unwrap_or_default();
                                        view! {
                                            <tr>
                                                <td><span class="swatch" style=swatch></span>{share.category_name}</td>
                                                <td class="text-end">{format::amount(share.amount)}</td>
                                                <td class="text-end text-muted">{format::percent(share.percentage)}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </section>
            </div>
            <section class="card">
                <div class="card__header">"Daily Spending"</div>
                {move || {
                    let days = stats.with(|s| {
                        s.as_ref()
                            .map(|s| s.daily_breakdown.iter().filter(|d| d.amount > 0.0).cloned().collect::<Vec<_>>())
                            .unwrap_or_default()
                    });
                    if days.is_empty() {
                        return view! { <p class="empty-state">"No spending recorded this month"</p> }.into_any();
                    }
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Day"</th>
                                    <th class="text-end">"Spent"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {days.into_iter().map(|day| view! {
                                    <tr>
                                        <td>{day.date.unwrap_or_else(|| day.day.to_string())}</td>
                                        <td class="text-end">{format::amount(day.amount)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }}
            </section>
        </Show>
    }
}

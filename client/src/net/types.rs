//! Wire DTOs for the cashflow REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Monetary values arrive as
//! JSON numbers and are held as `f64`; dates stay ISO-8601 strings because the
//! client only displays and echoes them. Response-only fields are optional so
//! partially populated records still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's identity triple.
///
/// Deserialization requires all three fields; extra fields in backend user
/// records are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl Identity {
    /// Uppercased first character of the username, for the avatar badge.
    pub fn initial(&self) -> char {
        self.username
            .chars()
            .next()
            .map_or('U', |c| c.to_uppercase().next().unwrap_or(c))
    }
}

/// `POST /api/users/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// `POST /api/users/register` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
}

/// `PUT /api/users/{id}` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// A recorded expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expense_date: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub merchant_name: Option<String>,
    #[serde(default)]
    pub is_recurring: Option<bool>,
    #[serde(default)]
    pub recurring_frequency: Option<String>,
    pub user_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
}

/// Create/update body for an expense.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseInput {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    pub user_id: i64,
    pub category_id: i64,
}

/// A spending category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub color_code: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
    #[serde(default)]
    pub expense_count: Option<i64>,
    #[serde(default)]
    pub total_expense_amount: Option<f64>,
}

/// Create/update body for a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_code: Option<String>,
    pub user_id: i64,
}

/// A recorded credit (income).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credit_date: Option<String>,
    #[serde(default)]
    pub credit_type: Option<String>,
    #[serde(default)]
    pub is_recurring: Option<bool>,
    pub user_id: i64,
}

/// Create/update body for a credit.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditInput {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_type: Option<String>,
    pub user_id: i64,
}

/// Threshold evaluation window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl ThresholdPeriod {
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// A spending limit, overall when `category_id` is `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Threshold {
    pub id: i64,
    pub limit_amount: f64,
    #[serde(default)]
    pub threshold_type: Option<ThresholdPeriod>,
    #[serde(default)]
    pub alert_percentage: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_breached: Option<bool>,
    pub user_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub current_spending: Option<f64>,
    #[serde(default)]
    pub remaining_amount: Option<f64>,
    #[serde(default)]
    pub usage_percentage: Option<f64>,
}

impl Threshold {
    pub fn scope_label(&self) -> String {
        self.category_name.clone().unwrap_or_else(|| "Overall Budget".to_owned())
    }
}

/// Create/update body for a threshold.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdInput {
    pub limit_amount: f64,
    pub threshold_type: ThresholdPeriod,
    pub alert_percentage: i32,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Severity of a threshold alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Warning,
    Breach,
}

/// A threshold warning or breach notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default)]
    pub threshold_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub alert_type: AlertKind,
    pub message: String,
    #[serde(default)]
    pub limit_amount: Option<f64>,
    #[serde(default)]
    pub current_spending: Option<f64>,
    #[serde(default)]
    pub usage_percentage: Option<f64>,
}

/// Per-category slice of an expense summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    #[serde(default)]
    pub category_id: Option<i64>,
    pub category_name: String,
    pub total_amount: f64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub percentage: f64,
}

/// Aggregated totals for a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseSummary {
    pub total_expenses: f64,
    pub total_credits: f64,
    pub net_balance: f64,
    pub expense_count: i64,
    pub credit_count: i64,
    pub period: Option<String>,
    pub category_breakdown: Vec<CategoryTotal>,
}

/// Category share in a month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCategoryShare {
    #[serde(default)]
    pub category_id: Option<i64>,
    pub category_name: String,
    pub amount: f64,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub color: Option<String>,
}

/// Spend on a single day of a month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySpend {
    pub day: u32,
    #[serde(default)]
    pub date: Option<String>,
    pub amount: f64,
}

/// Monthly statistics for the stats page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub total_spent: f64,
    #[serde(default)]
    pub avg_daily: f64,
    #[serde(default)]
    pub transaction_count: i64,
    #[serde(default)]
    pub days_in_month: u32,
    #[serde(default)]
    pub previous_month_total: Option<f64>,
    #[serde(default)]
    pub change_amount: Option<f64>,
    #[serde(default)]
    pub change_percentage: Option<f64>,
    #[serde(default)]
    pub is_increase: bool,
    #[serde(default)]
    pub top_category_name: Option<String>,
    #[serde(default)]
    pub top_category_amount: Option<f64>,
    #[serde(default)]
    pub category_breakdown: Vec<MonthlyCategoryShare>,
    #[serde(default)]
    pub daily_breakdown: Vec<DailySpend>,
}

/// One point of the monthly spending trend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub total_spent: f64,
    #[serde(default)]
    pub transaction_count: i64,
}

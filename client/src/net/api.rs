//! REST API wrappers for the cashflow backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: every call resolves to
//! `ApiFailure::Unavailable`, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper returns `ApiResult<T>`, forcing callers to handle both the
//! success payload and the failure reason. The backend wraps every body in
//! `{ success, message, data }`; a reachable API that says `success: false`
//! (or answers with a non-2xx status) becomes `ApiFailure::Rejected` carrying
//! the server's human-readable message. Network errors become
//! `ApiFailure::Transport`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::types::{
    Alert, Category, CategoryInput, Credentials, Credit, CreditInput, Expense, ExpenseInput, ExpenseSummary,
    Identity, MonthlyStats, MonthlyTrend, Registration, Threshold, ThresholdInput, UserUpdate,
};

/// Base path of the REST API (proxied by the host to the backend).
pub const API_BASE: &str = "/api";
/// Opaque navigation target that starts the Google OAuth flow.
pub const GOOGLE_OAUTH_URL: &str = "/oauth2/authorization/google";
/// Month window used by the trends endpoint when none is given.
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Why an API call did not produce a payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiFailure {
    /// The API was reached and refused the request. `message` is the
    /// server's own text when it sent a non-blank one.
    #[error("{}", rejection_text(.status, .message))]
    Rejected { status: u16, message: Option<String> },
    /// The request never completed.
    #[error("network error: {0}")]
    Transport(String),
    /// The response did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server-supplied message of a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn rejection_text(status: &u16, message: &Option<String>) -> String {
    message.clone().unwrap_or_else(|| format!("request failed: {status}"))
}

/// Tagged outcome of every API call.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum ApiResult<T> {
    Success(T),
    Failure(ApiFailure),
}

impl<T> ApiResult<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            Self::Success(value) => ApiResult::Success(f(value)),
            Self::Failure(failure) => ApiResult::Failure(failure),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// # Errors
    ///
    /// Returns the failure reason when the call did not succeed.
    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T> From<Result<T, ApiFailure>> for ApiResult<T> {
    fn from(result: Result<T, ApiFailure>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    data: Option<serde_json::Value>,
}

/// Interpret a backend response. `data` may legitimately be absent (deletes).
fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<Option<T>> {
    let accepted = (200..300).contains(&status);
    let envelope = match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => envelope,
        Err(e) if accepted => return ApiResult::Failure(ApiFailure::Decode(e.to_string())),
        Err(_) => {
            return ApiResult::Failure(ApiFailure::Rejected { status, message: None });
        }
    };

    if !accepted || !envelope.success {
        let message = envelope.message.filter(|m| !m.trim().is_empty());
        return ApiResult::Failure(ApiFailure::Rejected { status, message });
    }

    match envelope.data {
        None | Some(serde_json::Value::Null) => ApiResult::Success(None),
        Some(data) => match serde_json::from_value::<T>(data) {
            Ok(value) => ApiResult::Success(Some(value)),
            Err(e) => ApiResult::Failure(ApiFailure::Decode(e.to_string())),
        },
    }
}

fn require_data<T>(result: ApiResult<Option<T>>) -> ApiResult<T> {
    match result {
        ApiResult::Success(Some(value)) => ApiResult::Success(value),
        ApiResult::Success(None) => ApiResult::Failure(ApiFailure::Decode("response carried no data".to_owned())),
        ApiResult::Failure(failure) => ApiResult::Failure(failure),
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

async fn call<T: DeserializeOwned>(verb: Verb, url: &str, body: Option<serde_json::Value>) -> ApiResult<Option<T>> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match verb {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Put => Request::put(url),
            Verb::Patch => Request::patch(url),
            Verb::Delete => Request::delete(url),
        };
        let request = match body {
            Some(payload) => builder.json(&payload),
            None => builder.build(),
        };
        let request = match request {
            Ok(request) => request,
            Err(e) => return ApiResult::Failure(ApiFailure::Transport(e.to_string())),
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("api: {verb:?} {url} failed: {e}");
                return ApiResult::Failure(ApiFailure::Transport(e.to_string()));
            }
        };
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        decode_envelope(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, url, body);
        ApiResult::Failure(ApiFailure::Unavailable)
    }
}

async fn fetch<T: DeserializeOwned>(verb: Verb, url: &str, body: Option<serde_json::Value>) -> ApiResult<T> {
    require_data(call(verb, url, body).await)
}

async fn execute(verb: Verb, url: &str) -> ApiResult<()> {
    call::<serde_json::Value>(verb, url, None).await.map(|_| ())
}

fn payload<B: serde::Serialize>(body: &B) -> Option<serde_json::Value> {
    serde_json::to_value(body).ok()
}

/// Percent-encode a free-text path segment.
fn segment(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::encode_uri_component(raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn users_endpoint(suffix: &str) -> String {
    format!("{API_BASE}/users{suffix}")
}

fn expense_endpoint(suffix: &str) -> String {
    format!("{API_BASE}/expenses{suffix}")
}

fn category_endpoint(suffix: &str) -> String {
    format!("{API_BASE}/categories{suffix}")
}

fn credit_endpoint(suffix: &str) -> String {
    format!("{API_BASE}/credits{suffix}")
}

fn threshold_endpoint(suffix: &str) -> String {
    format!("{API_BASE}/thresholds{suffix}")
}

fn date_range_query(start: &str, end: &str) -> String {
    format!("?startDate={start}&endDate={end}")
}

fn monthly_stats_endpoint(user_id: i64, year: Option<i32>, month: Option<u32>) -> String {
    let mut url = format!("{API_BASE}/stats/monthly/{user_id}");
    let mut sep = '?';
    if let Some(year) = year {
        url.push_str(&format!("{sep}year={year}"));
        sep = '&';
    }
    if let Some(month) = month {
        url.push_str(&format!("{sep}month={month}"));
    }
    url
}

fn trends_endpoint(user_id: i64, months: u32, category_id: Option<i64>) -> String {
    let mut url = format!("{API_BASE}/stats/trends/{user_id}?months={months}");
    if let Some(category_id) = category_id {
        url.push_str(&format!("&categoryId={category_id}"));
    }
    url
}

// =============================================================================
// USERS
// =============================================================================

/// `POST /api/users/register`.
pub async fn register(registration: &Registration) -> ApiResult<Identity> {
    fetch(Verb::Post, &users_endpoint("/register"), payload(registration)).await
}

/// `POST /api/users/login`.
pub async fn login(credentials: &Credentials) -> ApiResult<Identity> {
    fetch(Verb::Post, &users_endpoint("/login"), payload(credentials)).await
}

pub async fn get_user(id: i64) -> ApiResult<Identity> {
    fetch(Verb::Get, &users_endpoint(&format!("/{id}")), None).await
}

pub async fn get_user_by_username(username: &str) -> ApiResult<Identity> {
    fetch(Verb::Get, &users_endpoint(&format!("/username/{}", segment(username))), None).await
}

pub async fn update_user(id: i64, update: &UserUpdate) -> ApiResult<Identity> {
    fetch(Verb::Put, &users_endpoint(&format!("/{id}")), payload(update)).await
}

pub async fn delete_user(id: i64) -> ApiResult<()> {
    execute(Verb::Delete, &users_endpoint(&format!("/{id}"))).await
}

// =============================================================================
// EXPENSES
// =============================================================================

pub async fn add_expense(input: &ExpenseInput) -> ApiResult<Expense> {
    fetch(Verb::Post, &expense_endpoint(""), payload(input)).await
}

pub async fn get_expense(id: i64) -> ApiResult<Expense> {
    fetch(Verb::Get, &expense_endpoint(&format!("/{id}")), None).await
}

pub async fn list_expenses(user_id: i64) -> ApiResult<Vec<Expense>> {
    fetch(Verb::Get, &expense_endpoint(&format!("/user/{user_id}")), None).await
}

pub async fn expense_summary(user_id: i64) -> ApiResult<ExpenseSummary> {
    fetch(Verb::Get, &expense_endpoint(&format!("/user/{user_id}/summary")), None).await
}

pub async fn expenses_by_category(user_id: i64, category_id: i64) -> ApiResult<Vec<Expense>> {
    fetch(Verb::Get, &expense_endpoint(&format!("/user/{user_id}/category/{category_id}")), None).await
}

/// Summary restricted to `[start, end]` (ISO dates).
pub async fn expense_summary_in_range(user_id: i64, start: &str, end: &str) -> ApiResult<ExpenseSummary> {
    let url = expense_endpoint(&format!("/user/{user_id}/summary/range{}", date_range_query(start, end)));
    fetch(Verb::Get, &url, None).await
}

pub async fn update_expense(id: i64, input: &ExpenseInput) -> ApiResult<Expense> {
    fetch(Verb::Put, &expense_endpoint(&format!("/{id}")), payload(input)).await
}

pub async fn delete_expense(id: i64) -> ApiResult<()> {
    execute(Verb::Delete, &expense_endpoint(&format!("/{id}"))).await
}

// =============================================================================
// CATEGORIES
// =============================================================================

pub async fn create_category(input: &CategoryInput) -> ApiResult<Category> {
    fetch(Verb::Post, &category_endpoint(""), payload(input)).await
}

pub async fn get_category(id: i64) -> ApiResult<Category> {
    fetch(Verb::Get, &category_endpoint(&format!("/{id}")), None).await
}

pub async fn list_categories(user_id: i64) -> ApiResult<Vec<Category>> {
    fetch(Verb::Get, &category_endpoint(&format!("/user/{user_id}")), None).await
}

pub async fn update_category(id: i64, input: &CategoryInput) -> ApiResult<Category> {
    fetch(Verb::Put, &category_endpoint(&format!("/{id}")), payload(input)).await
}

pub async fn delete_category(id: i64) -> ApiResult<()> {
    execute(Verb::Delete, &category_endpoint(&format!("/{id}"))).await
}

/// Seed the backend's default category set for `user_id`.
pub async fn create_default_categories(user_id: i64) -> ApiResult<()> {
    execute(Verb::Post, &category_endpoint(&format!("/user/{user_id}/defaults"))).await
}

// =============================================================================
// CREDITS
// =============================================================================

pub async fn add_credit(input: &CreditInput) -> ApiResult<Credit> {
    fetch(Verb::Post, &credit_endpoint(""), payload(input)).await
}

pub async fn get_credit(id: i64) -> ApiResult<Credit> {
    fetch(Verb::Get, &credit_endpoint(&format!("/{id}")), None).await
}

pub async fn list_credits(user_id: i64) -> ApiResult<Vec<Credit>> {
    fetch(Verb::Get, &credit_endpoint(&format!("/user/{user_id}")), None).await
}

pub async fn total_credits(user_id: i64) -> ApiResult<f64> {
    fetch(Verb::Get, &credit_endpoint(&format!("/user/{user_id}/total")), None).await
}

pub async fn credits_in_range(user_id: i64, start: &str, end: &str) -> ApiResult<Vec<Credit>> {
    let url = credit_endpoint(&format!("/user/{user_id}/range{}", date_range_query(start, end)));
    fetch(Verb::Get, &url, None).await
}

pub async fn credits_by_source(user_id: i64, source: &str) -> ApiResult<Vec<Credit>> {
    let url = credit_endpoint(&format!("/user/{user_id}/source/{}", segment(source)));
    fetch(Verb::Get, &url, None).await
}

pub async fn update_credit(id: i64, input: &CreditInput) -> ApiResult<Credit> {
    fetch(Verb::Put, &credit_endpoint(&format!("/{id}")), payload(input)).await
}

pub async fn delete_credit(id: i64) -> ApiResult<()> {
    execute(Verb::Delete, &credit_endpoint(&format!("/{id}"))).await
}

// =============================================================================
// THRESHOLDS
// =============================================================================

pub async fn set_threshold(input: &ThresholdInput) -> ApiResult<Threshold> {
    fetch(Verb::Post, &threshold_endpoint(""), payload(input)).await
}

pub async fn get_threshold(id: i64) -> ApiResult<Threshold> {
    fetch(Verb::Get, &threshold_endpoint(&format!("/{id}")), None).await
}

pub async fn list_thresholds(user_id: i64) -> ApiResult<Vec<Threshold>> {
    fetch(Verb::Get, &threshold_endpoint(&format!("/user/{user_id}")), None).await
}

pub async fn active_thresholds(user_id: i64) -> ApiResult<Vec<Threshold>> {
    fetch(Verb::Get, &threshold_endpoint(&format!("/user/{user_id}/active")), None).await
}

/// Breach alerts already recorded for `user_id`.
pub async fn threshold_alerts(user_id: i64) -> ApiResult<Vec<Alert>> {
    fetch(Verb::Get, &threshold_endpoint(&format!("/alerts/{user_id}")), None).await
}

/// Evaluate thresholds now and return current warnings/breaches.
pub async fn check_thresholds(user_id: i64) -> ApiResult<Vec<Alert>> {
    fetch(Verb::Get, &threshold_endpoint(&format!("/check/{user_id}")), None).await
}

pub async fn update_threshold(id: i64, input: &ThresholdInput) -> ApiResult<Threshold> {
    fetch(Verb::Put, &threshold_endpoint(&format!("/{id}")), payload(input)).await
}

pub async fn delete_threshold(id: i64) -> ApiResult<()> {
    execute(Verb::Delete, &threshold_endpoint(&format!("/{id}"))).await
}

/// Flip a threshold's active flag.
pub async fn toggle_threshold(id: i64) -> ApiResult<Threshold> {
    fetch(Verb::Patch, &threshold_endpoint(&format!("/{id}/toggle")), None).await
}

// =============================================================================
// STATS
// =============================================================================

/// Monthly statistics; the backend defaults to the current month.
pub async fn monthly_stats(user_id: i64, year: Option<i32>, month: Option<u32>) -> ApiResult<MonthlyStats> {
    fetch(Verb::Get, &monthly_stats_endpoint(user_id, year, month), None).await
}

pub async fn monthly_trends(user_id: i64, months: u32, category_id: Option<i64>) -> ApiResult<Vec<MonthlyTrend>> {
    fetch(Verb::Get, &trends_endpoint(user_id, months, category_id), None).await
}

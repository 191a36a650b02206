//! Display formatting for amounts and percentages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currency symbol prefixed to every displayed amount.
pub const CURRENCY: &str = "₹";

/// Format `value` with two decimals and comma thousands separators.
pub fn amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{CURRENCY}{grouped}.{fraction}")
}

/// Format a percentage with one decimal.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Parse a user-entered amount; must be a finite value of at least 0.01.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value = raw.trim().replace(',', "").parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.01).then_some(value)
}

/// `Some(trimmed)` for non-blank input.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Today's date as `YYYY-MM-DD` in UTC, or empty off-browser.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

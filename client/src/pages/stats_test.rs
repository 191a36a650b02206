use super::*;

#[test]
fn year_month_parses_iso_dates() {
    assert_eq!(year_month("2026-10-19"), Some((2026, 10)));
    assert_eq!(year_month("2026-3-01"), Some((2026, 3)));
    assert_eq!(year_month(""), None);
    assert_eq!(year_month("2026-13-01"), None);
}

#[test]
fn months_before_wraps_years() {
    assert_eq!(months_before((2026, 3), 0), (2026, 3));
    assert_eq!(months_before((2026, 3), 3), (2025, 12));
    assert_eq!(months_before((2026, 1), 13), (2024, 12));
}

#[test]
fn period_options_newest_first() {
    let options = period_options((2026, 2), 3);
    assert_eq!(options, vec![(2026, 2), (2026, 1), (2025, 12)]);
    assert_eq!(period_label(options[2]), "Dec 2025");
}

#[test]
fn period_value_round_trips_through_picker() {
    let value = period_value((2025, 7));
    assert_eq!(year_month(&format!("{value}-01")), Some((2025, 7)));
}

fn stats(change: Option<f64>, is_increase: bool) -> MonthlyStats {
    let mut stats: MonthlyStats = serde_json::from_value(serde_json::json!({
        "year": 2026, "month": 10, "monthName": "October", "totalSpent": 0.0, "avgDaily": 0.0,
        "transactionCount": 0, "daysInMonth": 31, "isIncrease": false
    }))
    .unwrap();
    stats.change_percentage = change;
    stats.is_increase = is_increase;
    stats
}

#[test]
fn change_label_signs_by_direction() {
    assert_eq!(change_label(&stats(Some(12.34), true)), "+12.3%");
    assert_eq!(change_label(&stats(Some(-5.0), false)), "-5.0%");
    assert_eq!(change_label(&stats(None, false)), "-");
}

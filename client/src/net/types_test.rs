use super::*;

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_decodes_backend_user_record_ignoring_extra_fields() {
    let raw = r#"{"id":3,"username":"bob","email":"bob@example.com","firstName":"Bob","isActive":true}"#;
    let identity: Identity = serde_json::from_str(raw).unwrap();
    assert_eq!(identity, Identity { id: 3, username: "bob".to_owned(), email: "bob@example.com".to_owned() });
}

#[test]
fn identity_requires_all_three_fields() {
    assert!(serde_json::from_str::<Identity>(r#"{"id":3,"username":"bob"}"#).is_err());
    assert!(serde_json::from_str::<Identity>(r#"{"id":"x","username":"bob","email":"e"}"#).is_err());
    assert!(serde_json::from_str::<Identity>(r#"{"id":3,"username":"bob","email":null}"#).is_err());
}

#[test]
fn identity_initial_uppercases_first_char() {
    let identity = Identity { id: 1, username: "alice".to_owned(), email: String::new() };
    assert_eq!(identity.initial(), 'A');
    let anonymous = Identity { id: 1, username: String::new(), email: String::new() };
    assert_eq!(anonymous.initial(), 'U');
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn registration_omits_empty_names() {
    let payload = Registration {
        username: "alice".to_owned(),
        email: "a@example.com".to_owned(),
        password: "pw".to_owned(),
        ..Registration::default()
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "username": "alice", "email": "a@example.com", "password": "pw" })
    );
}

#[test]
fn threshold_input_serializes_camel_case_and_period_literal() {
    let payload = ThresholdInput {
        limit_amount: 500.0,
        threshold_type: ThresholdPeriod::Weekly,
        alert_percentage: 80,
        user_id: 7,
        category_id: None,
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "limitAmount": 500.0, "thresholdType": "WEEKLY", "alertPercentage": 80, "userId": 7 })
    );
}

// =============================================================
// Responses
// =============================================================

#[test]
fn expense_summary_defaults_missing_fields() {
    let summary: ExpenseSummary = serde_json::from_str(r#"{"totalExpenses":12.5}"#).unwrap();
    assert_eq!(summary.total_expenses, 12.5);
    assert_eq!(summary.total_credits, 0.0);
    assert!(summary.category_breakdown.is_empty());
}

#[test]
fn alert_decodes_breach_kind() {
    let raw = r#"{"alertType":"BREACH","message":"ALERT: over","categoryName":"Food"}"#;
    let alert: Alert = serde_json::from_str(raw).unwrap();
    assert_eq!(alert.alert_type, AlertKind::Breach);
    assert_eq!(alert.category_name.as_deref(), Some("Food"));
}

#[test]
fn threshold_scope_label_falls_back_to_overall() {
    let raw = r#"{"id":1,"limitAmount":100,"userId":7,"thresholdType":"MONTHLY"}"#;
    let threshold: Threshold = serde_json::from_str(raw).unwrap();
    assert_eq!(threshold.scope_label(), "Overall Budget");
    assert_eq!(threshold.threshold_type, Some(ThresholdPeriod::Monthly));
}

#[test]
fn threshold_period_parse_matches_wire_literals() {
    for period in ThresholdPeriod::ALL {
        assert_eq!(ThresholdPeriod::parse(period.as_str()), Some(period));
    }
    assert_eq!(ThresholdPeriod::parse("monthly"), None);
}

use super::*;

fn filled() -> ThresholdForm {
    ThresholdForm {
        limit_amount: "5000".to_owned(),
        category_id: "7".to_owned(),
        period: ThresholdPeriod::Weekly,
        alert_percentage: "75".to_owned(),
    }
}

#[test]
fn default_form_is_monthly_at_eighty_percent() {
    let form = ThresholdForm::default();
    assert_eq!(form.period, ThresholdPeriod::Monthly);
    assert_eq!(form.alert_percentage, "80");
}

#[test]
fn validate_builds_category_threshold() {
    let input = filled().validate(2).unwrap();
    assert_eq!(input.limit_amount, 5000.0);
    assert_eq!(input.category_id, Some(7));
    assert_eq!(input.threshold_type, ThresholdPeriod::Weekly);
    assert_eq!(input.alert_percentage, 75);
    assert_eq!(input.user_id, 2);
}

#[test]
fn empty_category_means_overall() {
    let form = ThresholdForm { category_id: " ".to_owned(), ..filled() };
    assert_eq!(form.validate(1).unwrap().category_id, None);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let form = ThresholdForm { limit_amount: String::new(), ..filled() };
    assert_eq!(form.validate(1), Err("Enter a valid limit"));
    let form = ThresholdForm { alert_percentage: "0".to_owned(), ..filled() };
    assert_eq!(form.validate(1), Err("Alert percentage must be between 1 and 100"));
    let form = ThresholdForm { alert_percentage: "101".to_owned(), ..filled() };
    assert_eq!(form.validate(1), Err("Alert percentage must be between 1 and 100"));
    let form = ThresholdForm { category_id: "food".to_owned(), ..filled() };
    assert_eq!(form.validate(1), Err("Select a valid category"));
}

#[test]
fn usage_class_bands() {
    assert!(usage_class(120.0).ends_with("--danger"));
    assert!(usage_class(100.0).ends_with("--danger"));
    assert!(usage_class(80.0).ends_with("--warning"));
    assert!(usage_class(79.9).ends_with("--success"));
}

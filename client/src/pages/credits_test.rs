use super::*;

fn filled() -> CreditForm {
    CreditForm {
        amount: "50,000".to_owned(),
        source: " Acme Corp ".to_owned(),
        description: String::new(),
        credit_date: "2026-10-01".to_owned(),
        credit_type: "SALARY".to_owned(),
    }
}

#[test]
fn blank_form_defaults_to_salary() {
    let form = CreditForm::blank("2026-10-19".to_owned());
    assert_eq!(form.credit_type, "SALARY");
    assert_eq!(form.credit_date, "2026-10-19");
}

#[test]
fn validate_builds_input() {
    let input = filled().validate(3).unwrap();
    assert_eq!(input.amount, 50_000.0);
    assert_eq!(input.source.as_deref(), Some("Acme Corp"));
    assert_eq!(input.description, None);
    assert_eq!(input.credit_type.as_deref(), Some("SALARY"));
    assert_eq!(input.user_id, 3);
}

#[test]
fn validate_requires_amount_and_source() {
    let form = CreditForm { amount: "abc".to_owned(), ..filled() };
    assert_eq!(form.validate(1), Err("Enter a valid amount"));
    let form = CreditForm { source: "  ".to_owned(), ..filled() };
    assert_eq!(form.validate(1), Err("Source is required"));
}

#[test]
fn listed_total_sums_amounts() {
    let credits: Vec<Credit> = serde_json::from_value(serde_json::json!([
        { "id": 1, "amount": 100.5, "userId": 1 },
        { "id": 2, "amount": 49.5, "userId": 1 }
    ]))
    .unwrap();
    assert_eq!(listed_total(&credits), 150.0);
    assert_eq!(listed_total(&[]), 0.0);
}

use super::*;

fn filled() -> ExpenseForm {
    ExpenseForm {
        amount: "249.90".to_owned(),
        description: "  Groceries ".to_owned(),
        category_id: "4".to_owned(),
        expense_date: "2026-10-01".to_owned(),
        payment_method: "UPI".to_owned(),
    }
}

#[test]
fn blank_form_defaults_to_cash_and_given_date() {
    let form = ExpenseForm::blank("2026-10-19".to_owned());
    assert_eq!(form.payment_method, "CASH");
    assert_eq!(form.expense_date, "2026-10-19");
    assert!(form.amount.is_empty());
}

#[test]
fn validate_builds_input_for_user() {
    let input = filled().validate(9).unwrap();
    assert_eq!(input.amount, 249.9);
    assert_eq!(input.category_id, 4);
    assert_eq!(input.user_id, 9);
    assert_eq!(input.description.as_deref(), Some("Groceries"));
    assert_eq!(input.payment_method.as_deref(), Some("UPI"));
}

#[test]
fn blank_optional_fields_are_omitted() {
    let form = ExpenseForm { description: " ".to_owned(), expense_date: String::new(), ..filled() };
    let input = form.validate(1).unwrap();
    assert_eq!(input.description, None);
    assert_eq!(input.expense_date, None);
}

#[test]
fn validate_rejects_bad_amount_and_missing_category() {
    let form = ExpenseForm { amount: "0".to_owned(), ..filled() };
    assert_eq!(form.validate(1), Err("Enter a valid amount"));
    let form = ExpenseForm { category_id: String::new(), ..filled() };
    assert_eq!(form.validate(1), Err("Select a category"));
}

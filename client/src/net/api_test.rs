use super::*;

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn decode_success_with_data() {
    let body = r#"{"success":true,"message":"ok","data":{"id":7,"username":"alice","email":"a@example.com"}}"#;
    let result = require_data(decode_envelope::<Identity>(200, body));
    assert_eq!(
        result,
        ApiResult::Success(Identity { id: 7, username: "alice".to_owned(), email: "a@example.com".to_owned() })
    );
}

#[test]
fn decode_success_without_data_is_unit_success() {
    let body = r#"{"success":true,"message":"Expense deleted successfully","data":null}"#;
    assert_eq!(decode_envelope::<serde_json::Value>(200, body), ApiResult::Success(None));
}

#[test]
fn require_data_rejects_empty_payload() {
    let result = require_data(decode_envelope::<Identity>(200, r#"{"success":true}"#));
    assert!(matches!(result, ApiResult::Failure(ApiFailure::Decode(_))));
}

#[test]
fn decode_success_false_surfaces_server_message() {
    let body = r#"{"success":false,"message":"Username already exists"}"#;
    assert_eq!(
        decode_envelope::<Identity>(200, body),
        ApiResult::Failure(ApiFailure::Rejected { status: 200, message: Some("Username already exists".to_owned()) })
    );
}

#[test]
fn decode_error_status_keeps_message_even_when_data_is_a_map() {
    let body = r#"{"success":false,"message":"Validation failed","data":{"email":"must be valid"}}"#;
    let result = decode_envelope::<Identity>(400, body);
    assert_eq!(result, ApiResult::Failure(ApiFailure::Rejected { status: 400, message: Some("Validation failed".to_owned()) }));
}

#[test]
fn decode_error_status_with_unparseable_body_uses_fallback() {
    let result = decode_envelope::<Identity>(502, "<html>Bad Gateway</html>");
    assert_eq!(result, ApiResult::Failure(ApiFailure::Rejected { status: 502, message: None }));
}

#[test]
fn decode_ok_status_with_garbage_is_decode_failure() {
    assert!(matches!(decode_envelope::<Identity>(200, "nope"), ApiResult::Failure(ApiFailure::Decode(_))));
}

#[test]
fn decode_wrong_payload_shape_is_decode_failure() {
    let body = r#"{"success":true,"data":{"id":7,"username":"alice"}}"#;
    assert!(matches!(decode_envelope::<Identity>(200, body), ApiResult::Failure(ApiFailure::Decode(_))));
}

#[test]
fn decode_blank_message_falls_back_to_status() {
    let body = r#"{"success":false,"message":"  "}"#;
    assert_eq!(
        decode_envelope::<Identity>(401, body),
        ApiResult::Failure(ApiFailure::Rejected { status: 401, message: None })
    );
}

// =============================================================
// ApiResult helpers
// =============================================================

#[test]
fn api_result_map_and_ok() {
    let success: ApiResult<i32> = ApiResult::Success(2);
    assert_eq!(success.map(|v| v * 2).ok(), Some(4));
    let failure: ApiResult<i32> = ApiResult::Failure(ApiFailure::Unavailable);
    assert!(!failure.is_success());
    assert_eq!(failure.into_result(), Err(ApiFailure::Unavailable));
}

#[test]
fn api_failure_status_only_for_rejections() {
    assert_eq!(ApiFailure::Rejected { status: 404, message: None }.status(), Some(404));
    assert_eq!(ApiFailure::Transport("offline".to_owned()).status(), None);
}

#[test]
fn api_failure_rejected_displays_message_verbatim() {
    let failure = ApiFailure::Rejected { status: 401, message: Some("Invalid password".to_owned()) };
    assert_eq!(failure.to_string(), "Invalid password");
    assert_eq!(failure.server_message(), Some("Invalid password"));
}

#[test]
fn api_failure_rejected_without_message_displays_status() {
    let failure = ApiFailure::Rejected { status: 503, message: None };
    assert_eq!(failure.to_string(), "request failed: 503");
    assert_eq!(failure.server_message(), None);
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn resource_endpoints_format_expected_paths() {
    assert_eq!(users_endpoint("/login"), "/api/users/login");
    assert_eq!(expense_endpoint("/user/7/summary"), "/api/expenses/user/7/summary");
    assert_eq!(category_endpoint("/user/7/defaults"), "/api/categories/user/7/defaults");
    assert_eq!(credit_endpoint("/user/7/total"), "/api/credits/user/7/total");
    assert_eq!(threshold_endpoint("/3/toggle"), "/api/thresholds/3/toggle");
}

#[test]
fn date_range_query_uses_camel_case_params() {
    assert_eq!(date_range_query("2026-01-01", "2026-01-31"), "?startDate=2026-01-01&endDate=2026-01-31");
}

#[test]
fn monthly_stats_endpoint_includes_only_given_params() {
    assert_eq!(monthly_stats_endpoint(7, None, None), "/api/stats/monthly/7");
    assert_eq!(monthly_stats_endpoint(7, Some(2026), None), "/api/stats/monthly/7?year=2026");
    assert_eq!(monthly_stats_endpoint(7, None, Some(3)), "/api/stats/monthly/7?month=3");
    assert_eq!(monthly_stats_endpoint(7, Some(2026), Some(3)), "/api/stats/monthly/7?year=2026&month=3");
}

#[test]
fn trends_endpoint_appends_category_filter() {
    assert_eq!(trends_endpoint(7, DEFAULT_TREND_MONTHS, None), "/api/stats/trends/7?months=6");
    assert_eq!(trends_endpoint(7, 12, Some(4)), "/api/stats/trends/7?months=12&categoryId=4");
}

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, app_with, get, on_example_host};
use crew_fixture_server::Config;

#[tokio::test]
async fn test_sample_user_on_example_host() {
    let response = on_example_host(&app(), "GET", "/test", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "user": { "firstName": "John", "lastName": "Maverick" } })
    );
}

#[tokio::test]
async fn test_example_routes_need_example_host() {
    let response = get(&app(), "/test").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_taken_nickname_is_duplicated() {
    let response = on_example_host(&app(), "POST", "/nick", Some(r#"{"nick":"닉네임"}"#)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "isDuplicated": true }));
}

#[tokio::test]
async fn test_other_nicknames_are_free() {
    let app = app();
    let bodies = [
        r#"{"nick":"달리기왕"}"#,
        r#"{"nick":""}"#,
        r#"{}"#,
        r#"{"nick":null}"#,
        r#"{"nick":123}"#,
        "null",
        r#"["닉네임"]"#,
        r#""닉네임""#,
    ];
    for body in bodies {
        let response = on_example_host(&app, "POST", "/nick", Some(body)).await;

        assert_eq!(response.status, StatusCode::OK, "{}", body);
        assert_eq!(response.json(), json!({ "isDuplicated": false }), "{}", body);
    }
}

#[tokio::test]
async fn test_configured_nicknames_replace_default() {
    let config = Config {
        taken_nicknames: vec!["달리기왕".to_string()],
        ..Config::default()
    };
    let app = app_with(config);

    let taken = on_example_host(&app, "POST", "/nick", Some(r#"{"nick":"달리기왕"}"#)).await;
    let default = on_example_host(&app, "POST", "/nick", Some(r#"{"nick":"닉네임"}"#)).await;

    assert_eq!(taken.json(), json!({ "isDuplicated": true }));
    assert_eq!(default.json(), json!({ "isDuplicated": false }));
}

#[tokio::test]
async fn test_malformed_nickname_body_is_rejected() {
    let response = on_example_host(&app(), "POST", "/nick", Some("not json")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_body_history_ignores_month_filter() {
    let app = app();
    let september = get(&app, "/users/body?year=2024&month=9").await;
    let unfiltered = get(&app, "/users/body").await;

    assert_eq!(september.status, StatusCode::OK);
    assert_eq!(september.bytes, unfiltered.bytes);

    let body = september.json();
    assert_eq!(body["status"], json!(200));
    assert_eq!(body["message"], json!("Success"));

    let records = body["data"]["bodyHistoryDataList"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["date"], json!("2024-09-16T15:00:00"));
    assert_eq!(records[0]["weight"].as_f64(), Some(75.5));
    assert_eq!(records[1]["date"], json!("2024-09-23T15:00:00"));
    assert_eq!(records[1]["skeletalMuscleMass"].as_f64(), Some(29.5));
}

#[tokio::test]
async fn test_repeated_query_keys_do_not_change_body_history() {
    let app = app();
    let repeated = get(&app, "/users/body?year=2024&year=2025&month=9&month=10").await;
    let unfiltered = get(&app, "/users/body").await;

    assert_eq!(repeated.status, StatusCode::OK);
    assert_eq!(repeated.bytes, unfiltered.bytes);
}

#[tokio::test]
async fn test_whole_body_readings_are_integers() {
    let body = get(&app(), "/users/body").await.json();
    let records = &body["data"]["bodyHistoryDataList"];

    assert_eq!(records[0]["skeletalMuscleMass"], json!(30));
    assert_eq!(records[0]["bodyFatRatio"], json!(20));
    assert_eq!(records[1]["weight"], json!(74));
    assert_eq!(records[1]["bodyFatRatio"], json!(21));
    assert_eq!(records[0]["weight"], json!(75.5));
}

//! tests/endpoints/call_handler.rs
//! The webhook must answer every call event with the same TwiML document.

// Include the helper module defined in tests/common/mod.rs.
#[path = "../common/mod.rs"]
mod common;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// The exact document the telephony platform receives, byte for byte.
const EXPECTED_TWIML: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Say>Hello from your Autocall replica!</Say></Response>";

#[tokio::test]
async fn answers_call_event_with_fixed_voice_document() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/call-handler", base_url))
        .form(&[("CallSid", "CA123"), ("From", "+15551234567")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(CONTENT_TYPE).unwrap(),
        "text/xml"
    );

    let body: String = resp.text().await.unwrap();
    assert_eq!(body, EXPECTED_TWIML);
    assert!(body.contains("Hello from your Autocall replica!"));
}

#[tokio::test]
async fn tolerates_empty_body() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/call-handler", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), EXPECTED_TWIML);
}

#[tokio::test]
async fn tolerates_malformed_body() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/call-handler", base_url))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("%zz=not&really=%")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), EXPECTED_TWIML);
}

#[tokio::test]
async fn tolerates_large_body() {
    let base_url: String = common::spawn_app();

    // 1MB payload, comfortably under the 2MB default cap.
    let large_value: String = "x".repeat(1_048_576);

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/call-handler", base_url))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(format!("blob={}", large_value))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), EXPECTED_TWIML);
}

#[tokio::test]
async fn repeated_calls_are_byte_identical() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    let first = client
        .post(format!("{}/call-handler", base_url))
        .form(&[("foo", "bar")])
        .send()
        .await
        .expect("Failed to execute request.")
        .bytes()
        .await
        .unwrap();

    let second = client
        .post(format!("{}/call-handler", base_url))
        .form(&[("foo", "bar")])
        .send()
        .await
        .expect("Failed to execute request.")
        .bytes()
        .await
        .unwrap();

    assert_eq!(first, second);
}

//! Contract checks shared by the suites.
//!
//! These helpers panic on failure, the same way `assert!` does, so that a
//! broken expectation fails the calling test.

use crate::domain::{AuthResponse, ErrorResponse};
use reqwest::{Response, StatusCode};
use secrecy::ExposeSecret;

/// Literal error texts returned by the backend.
pub mod messages {
    pub const USER_ALREADY_EXISTS: &str = "User already exists";
    pub const REQUIRED_FIELDS: &str = "Email, password and name are required fields";
    pub const INCORRECT_CREDENTIALS: &str = "email or password are incorrect";
    pub const SHOULD_BE_AUTHORISED: &str = "You should be authorised";
    pub const INGREDIENTS_REQUIRED: &str = "Ingredient ids must be provided";
    pub const EMAIL_ALREADY_TAKEN: &str = "User with such email already exists";
}

/// Whether a known backend discrepancy fails the test or is only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Strict,
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMismatch {
    pub expected: u16,
    pub actual: u16,
    pub body: String,
}

pub fn assert_status(response: &Response, expected: u16) {
    assert_eq!(
        response.status().as_u16(),
        expected,
        "Unexpected status for {}",
        response.url()
    );
}

pub fn assert_is_json(response: &Response) {
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Expected a JSON response, got `{}`",
        content_type
    );
}

pub async fn assert_json_response<T>(response: Response) -> T
where
    T: serde::de::DeserializeOwned,
{
    let body = response.text().await.expect("Failed to read response body");
    serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("Failed to parse response body `{}`: {}", body, e))
}

/// Checks the shape shared by successful registrations and logins.
pub fn assert_successful_auth(auth: &AuthResponse, email: &str, name: &str) {
    assert!(auth.success);
    assert_eq!(auth.user.email, email);
    assert_eq!(auth.user.name, name);
    assert!(
        auth.access_token.has_bearer_prefix(),
        "Access token is missing the `Bearer ` prefix"
    );
    assert!(!auth.refresh_token.expose_secret().is_empty());
}

/// Checks status, `success == false` and the exact `message`.
pub async fn assert_error_response(
    response: Response,
    expected_status: u16,
    expected_message: &str,
) -> ErrorResponse {
    assert_status(&response, expected_status);
    let error: ErrorResponse = assert_json_response(response).await;
    assert!(!error.success);
    assert_eq!(error.message, expected_message);
    error
}

/// Emits a "bug" record when the backend answered with a different status
/// than the documented one.
pub fn log_bug_if_status_differs(
    actual: StatusCode,
    body: &str,
    expected: u16,
) -> Option<StatusMismatch> {
    if actual.as_u16() == expected {
        return None;
    }
    tracing::warn!(
        expected_status = expected,
        actual_status = actual.as_u16(),
        body = %body,
        "Bug recorded: expected status {} but the backend returned {}",
        expected,
        actual.as_u16()
    );
    Some(StatusMismatch {
        expected,
        actual: actual.as_u16(),
        body: body.to_owned(),
    })
}

/// Like [`assert_error_response`], but a status mismatch is first logged as a
/// bug and only fails the test under [`Expectation::Strict`].
pub async fn check_error_response(
    expectation: Expectation,
    response: Response,
    expected_status: u16,
    expected_message: &str,
) -> Option<StatusMismatch> {
    let status = response.status();
    let body = response.text().await.expect("Failed to read response body");
    let mismatch = log_bug_if_status_differs(status, &body, expected_status);
    if expectation == Expectation::Lenient {
        return mismatch;
    }
    assert_eq!(status.as_u16(), expected_status, "Body: {}", body);
    let error: ErrorResponse = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("Failed to parse error body `{}`: {}", body, e));
    assert_eq!(error.message, expected_message);
    mismatch
}

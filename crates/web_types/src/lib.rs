//! JSON types exchanged between the site server and the browser.

use core_types::AuthFormError;
use serde::{Deserialize, Serialize};

/// Error body returned by API routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Message shown to the user.
    pub error: String,
    /// Machine-readable code.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
        }
    }
}

impl From<AuthFormError> for ApiError {
    fn from(err: AuthFormError) -> Self {
        Self::with_code(err.to_string(), err.code())
    }
}

/// Successful answer from an auth form endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
}

/// Body of `POST /api/log`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub message: String,
}

/// Answer from `POST /api/log`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub logged: bool,
}

/// Answer from `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `error` query values the login page understands.
pub mod login_error {
    pub const INVALID_CODE: &str = "invalid_code";
    pub const CALLBACK_FAILED: &str = "auth_callback_failed";
    pub const UNAVAILABLE: &str = "auth_unavailable";

    /// Message shown on the login page for an `error` query value.
    pub fn describe(code: &str) -> &'static str {
        match code {
            INVALID_CODE => "The sign-in link was missing its authorization code. Please try again.",
            CALLBACK_FAILED => "We could not complete your sign-in. Please try again.",
            UNAVAILABLE => "Sign-in is temporarily unavailable.",
            _ => "Something went wrong. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_form_error() {
        let err = ApiError::from(AuthFormError::PasswordMismatch);
        assert_eq!(err.error, "Passwords do not match");
        assert_eq!(err.code.as_deref(), Some("PASSWORD_MISMATCH"));
    }

    #[test]
    fn test_api_error_without_code_omits_field() {
        let json = serde_json::to_string(&ApiError::new("boom")).unwrap();
        assert_eq!(json, r#"{"error":"boom"}"#);

        let parsed: ApiError = serde_json::from_str(&json).unwrap();
        assert!(parsed.code.is_none());
    }

    #[test]
    fn test_login_error_messages() {
        assert_ne!(
            login_error::describe(login_error::INVALID_CODE),
            login_error::describe("unknown")
        );
        assert_eq!(
            login_error::describe("unknown"),
            "Something went wrong. Please try again."
        );
    }
}

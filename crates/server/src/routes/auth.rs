//! Auth form API routes.

use axum::{Json, extract::State, http::StatusCode};
use core_types::{AuthFormError, ForgotPasswordForm, SignInForm, SignUpForm};
use tracing::info;
use web_types::{ApiError, AuthResponse};

use crate::state::AppState;

type AuthResult = Result<Json<AuthResponse>, (StatusCode, Json<ApiError>)>;

/// Map a form error onto its HTTP status and error body.
fn reject(err: AuthFormError) -> (StatusCode, Json<ApiError>) {
    let status = match err {
        AuthFormError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthFormError::EmailTaken => StatusCode::CONFLICT,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, Json(ApiError::from(err)))
}

fn accept(message: &str) -> Json<AuthResponse> {
    Json(AuthResponse {
        message: message.to_string(),
    })
}

/// POST /api/auth/sign-in
pub async fn sign_in(State(state): State<AppState>, Json(form): Json<SignInForm>) -> AuthResult {
    let message = state.auth.sign_in(&form).await.map_err(reject)?;
    info!(email = %form.email.trim(), "demo sign-in succeeded");
    Ok(accept(message))
}

/// POST /api/auth/sign-up
pub async fn sign_up(State(state): State<AppState>, Json(form): Json<SignUpForm>) -> AuthResult {
    let message = state.auth.sign_up(&form).await.map_err(reject)?;
    info!(email = %form.email.trim(), "demo sign-up accepted");
    Ok(accept(message))
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(form): Json<ForgotPasswordForm>,
) -> AuthResult {
    let message = state
        .auth
        .request_password_reset(&form)
        .await
        .map_err(reject)?;
    Ok(accept(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{DEMO_EMAIL, DEMO_PASSWORD, DemoAuthService, REGISTERED_EMAIL, SIGN_UP_SUCCESS};
    use crate::provider::DisabledAuthProvider;
    use std::sync::Arc;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(
            DemoAuthService::new(Duration::ZERO),
            Arc::new(DisabledAuthProvider),
            "http://localhost:3000/auth/callback",
        )
    }

    fn sign_up_form(name: &str, email: &str, password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_missing_fields_never_succeed() {
        let forms = [
            sign_up_form("", "a@example.com", "longenough", "longenough"),
            sign_up_form("Ada", "", "longenough", "longenough"),
            sign_up_form("Ada", "a@example.com", "", "longenough"),
            sign_up_form("Ada", "a@example.com", "longenough", ""),
            sign_up_form("", "", "", ""),
        ];

        for form in forms {
            let (status, Json(body)) = sign_up(State(state()), Json(form)).await.unwrap_err();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.error, "All fields are required");
            assert_eq!(body.code.as_deref(), Some("FIELDS_REQUIRED"));
        }
    }

    #[tokio::test]
    async fn test_sign_up_mismatch() {
        let form = sign_up_form("Ada", "a@example.com", "short", "longenough");
        let (status, Json(body)) = sign_up(State(state()), Json(form)).await.unwrap_err();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code.as_deref(), Some("PASSWORD_MISMATCH"));
    }

    #[tokio::test]
    async fn test_sign_up_short_password() {
        let form = sign_up_form("Ada", "a@example.com", "1234567", "1234567");
        let (_, Json(body)) = sign_up(State(state()), Json(form)).await.unwrap_err();

        assert_eq!(body.error, "Password must be at least 8 characters");
    }

    #[tokio::test]
    async fn test_sign_up_registered_email_conflicts() {
        let form = sign_up_form("Ada", REGISTERED_EMAIL, "longenough", "longenough");
        let (status, Json(body)) = sign_up(State(state()), Json(form)).await.unwrap_err();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code.as_deref(), Some("EMAIL_TAKEN"));
    }

    #[tokio::test]
    async fn test_sign_up_success() {
        let form = sign_up_form("Ada", "new@example.com", "longenough", "longenough");
        let Json(body) = sign_up(State(state()), Json(form)).await.unwrap();

        assert_eq!(body.message, SIGN_UP_SUCCESS);
    }

    #[tokio::test]
    async fn test_sign_in_statuses() {
        let good = SignInForm {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        };
        let bad = SignInForm {
            email: DEMO_EMAIL.to_string(),
            password: "nope-nope".to_string(),
        };

        assert!(sign_in(State(state()), Json(good)).await.is_ok());

        let (status, _) = sign_in(State(state()), Json(bad)).await.unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = sign_in(State(state()), Json(SignInForm::default()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forgot_password() {
        let (status, Json(body)) =
            forgot_password(State(state()), Json(ForgotPasswordForm::default()))
                .await
                .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code.as_deref(), Some("EMAIL_REQUIRED"));

        let form = ForgotPasswordForm {
            email: "a@example.com".to_string(),
        };
        assert!(forgot_password(State(state()), Json(form)).await.is_ok());
    }
}

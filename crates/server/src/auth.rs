//! Stand-in auth handler behind the sign-in, sign-up and forgot-password forms.
//!
//! It knows one demo account and one already-registered address and waits a
//! fixed delay before answering. Real sessions come from the external
//! provider used by the login and callback routes.

use core_types::{AuthFormError, ForgotPasswordForm, SignInForm, SignUpForm};
use std::time::Duration;
use tracing::debug;

/// Email accepted by the demo sign-in.
pub const DEMO_EMAIL: &str = "demo@example.com";
/// Password accepted by the demo sign-in.
pub const DEMO_PASSWORD: &str = "password123";
/// Email the demo sign-up treats as already registered.
pub const REGISTERED_EMAIL: &str = "taken@example.com";

pub const SIGN_IN_SUCCESS: &str = "Signed in successfully";
pub const SIGN_UP_SUCCESS: &str =
    "Account created successfully! Please check your email to verify your account.";
pub const RESET_SENT: &str =
    "If an account exists for that email, a password reset link has been sent.";

/// Demo auth handler with a simulated network delay.
#[derive(Debug, Clone)]
pub struct DemoAuthService {
    delay: Duration,
}

impl DemoAuthService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    pub async fn sign_in(&self, form: &SignInForm) -> Result<&'static str, AuthFormError> {
        self.simulate_latency().await;
        form.validate()?;

        if !form.email.trim().eq_ignore_ascii_case(DEMO_EMAIL) || form.password != DEMO_PASSWORD {
            debug!(email = %form.email.trim(), "demo sign-in rejected");
            return Err(AuthFormError::InvalidCredentials);
        }

        Ok(SIGN_IN_SUCCESS)
    }

    pub async fn sign_up(&self, form: &SignUpForm) -> Result<&'static str, AuthFormError> {
        self.simulate_latency().await;
        form.validate()?;

        if form.email.trim().eq_ignore_ascii_case(REGISTERED_EMAIL) {
            return Err(AuthFormError::EmailTaken);
        }

        Ok(SIGN_UP_SUCCESS)
    }

    pub async fn request_password_reset(
        &self,
        form: &ForgotPasswordForm,
    ) -> Result<&'static str, AuthFormError> {
        self.simulate_latency().await;
        form.validate()?;
        Ok(RESET_SENT)
    }
}

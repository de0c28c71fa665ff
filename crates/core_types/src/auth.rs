//! Auth and contact form fields with client-side validation.
//!
//! The browser runs these checks before submitting and the server runs them
//! again, so both sides report the same messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validation failures for the auth and contact forms.
///
/// The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormError {
    #[error("All fields are required")]
    FieldsRequired,

    #[error("Email and password are required")]
    CredentialsRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl AuthFormError {
    /// Stable machine-readable code used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FieldsRequired | Self::CredentialsRequired => "FIELDS_REQUIRED",
            Self::EmailRequired => "EMAIL_REQUIRED",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Sign-in form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// Check that both fields are present.
    pub fn validate(&self) -> Result<(), AuthFormError> {
        if is_blank(&self.email) || is_blank(&self.password) {
            return Err(AuthFormError::CredentialsRequired);
        }
        Ok(())
    }
}

/// Sign-up form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Check presence, then password match, then password length.
    ///
    /// A mismatch is reported even when the password is also too short.
    pub fn validate(&self) -> Result<(), AuthFormError> {
        if [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| is_blank(field))
        {
            return Err(AuthFormError::FieldsRequired);
        }

        if self.password != self.confirm_password {
            return Err(AuthFormError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthFormError::PasswordTooShort);
        }

        Ok(())
    }
}

/// Forgot-password form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), AuthFormError> {
        if is_blank(&self.email) {
            return Err(AuthFormError::EmailRequired);
        }
        Ok(())
    }
}

/// Landing page contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), AuthFormError> {
        if is_blank(&self.name) || is_blank(&self.email) || is_blank(&self.message) {
            return Err(AuthFormError::FieldsRequired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up(name: &str, email: &str, password: &str, confirm: &str) -> SignUpForm {
        SignUpForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_sign_up_every_missing_field_combination() {
        let values = ["Ada", "ada@example.com", "longenough", "longenough"];

        // Every non-full mask leaves at least one field empty.
        for mask in 0u8..0b1111 {
            let field = |i: usize| {
                if mask & (1 << i) != 0 {
                    values[i]
                } else {
                    ""
                }
            };
            let form = sign_up(field(0), field(1), field(2), field(3));
            assert_eq!(
                form.validate(),
                Err(AuthFormError::FieldsRequired),
                "mask {mask:04b}"
            );
        }
    }

    #[test]
    fn test_sign_up_whitespace_counts_as_missing() {
        let form = sign_up("   ", "ada@example.com", "longenough", "longenough");
        assert_eq!(form.validate(), Err(AuthFormError::FieldsRequired));
    }

    #[test]
    fn test_sign_up_mismatch_wins_over_length() {
        let cases = [
            ("longenough", "different1"),
            ("short", "longenough"),
            ("abc", "abd"),
        ];

        for (password, confirm) in cases {
            let form = sign_up("Ada", "ada@example.com", password, confirm);
            assert_eq!(form.validate(), Err(AuthFormError::PasswordMismatch));
        }
    }

    #[test]
    fn test_sign_up_short_password() {
        for password in ["a", "1234567", "seven!!"] {
            let form = sign_up("Ada", "ada@example.com", password, password);
            assert_eq!(form.validate(), Err(AuthFormError::PasswordTooShort));
        }
    }

    #[test]
    fn test_sign_up_length_counts_characters() {
        // Eight characters, more than eight bytes.
        let password = "pässwörd";
        let form = sign_up("Ada", "ada@example.com", password, password);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_sign_up_valid() {
        let form = sign_up("Ada", "ada@example.com", "12345678", "12345678");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let missing_password = SignInForm {
            email: "ada@example.com".to_string(),
            password: String::new(),
        };
        let missing_email = SignInForm {
            email: String::new(),
            password: "secret".to_string(),
        };

        assert_eq!(
            missing_password.validate(),
            Err(AuthFormError::CredentialsRequired)
        );
        assert_eq!(
            missing_email.validate(),
            Err(AuthFormError::CredentialsRequired)
        );
    }

    #[test]
    fn test_forgot_password_requires_email() {
        let form = ForgotPasswordForm::default();
        assert_eq!(form.validate(), Err(AuthFormError::EmailRequired));
    }

    #[test]
    fn test_contact_form_requires_message() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: " ".to_string(),
        };
        assert_eq!(form.validate(), Err(AuthFormError::FieldsRequired));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AuthFormError::FieldsRequired.code(), "FIELDS_REQUIRED");
        assert_eq!(AuthFormError::CredentialsRequired.code(), "FIELDS_REQUIRED");
        assert_eq!(AuthFormError::EmailTaken.code(), "EMAIL_TAKEN");
        assert_eq!(
            AuthFormError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_sign_up_deserializes_from_json() {
        let json = r#"{"name":"Ada","email":"ada@example.com","password":"12345678","confirm_password":"12345678"}"#;
        let form: SignUpForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.name, "Ada");
        assert!(form.validate().is_ok());
    }
}

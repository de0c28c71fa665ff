//! Core types for the community site.
//!
//! This crate holds everything both the server and the browser need to agree
//! on: static page content, auth form validation, the header menu state
//! machine, and the dashboard's mock data.

pub mod auth;
pub mod content;
pub mod dashboard;
pub mod menu;

pub use auth::{
    AuthFormError, ContactForm, ForgotPasswordForm, MIN_PASSWORD_LEN, SignInForm, SignUpForm,
};
pub use menu::{Breakpoint, MenuAction, MenuState};

/// Display name used in page titles and the header brand.
pub const SITE_NAME: &str = "Common Ground";

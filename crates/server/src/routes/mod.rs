//! API route handlers.

mod auth;
mod callback;
mod log;

pub use auth::*;
pub use callback::*;
pub use log::*;

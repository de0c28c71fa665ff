//! Reusable UI components.

mod footer;
mod form_field;
mod form_status;
mod header;
mod loading;
mod reveal;
mod stat_card;

pub use footer::Footer;
pub use form_field::{PasswordField, TextArea, TextField};
pub use form_status::{FormMessage, FormStatus};
pub use header::Header;
pub use loading::Loading;
pub use reveal::Reveal;
pub use stat_card::StatCard;

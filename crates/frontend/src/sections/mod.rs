//! Landing page sections.

mod about;
mod contact;
mod hero;
mod partners;
mod programs;
mod services;
mod team;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use partners::Partners;
pub use programs::Programs;
pub use services::Services;
pub use team::Team;

/// Stagger between sibling cards' enter animations.
pub(crate) const STAGGER_MS: u32 = 120;

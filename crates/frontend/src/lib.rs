//! Community site frontend - Yew WASM single-page app.
//!
//! Renders the landing page, the auth pages and the dashboard shell.

mod api;
mod app;
mod components;
mod pages;
mod sections;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}

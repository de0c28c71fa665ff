//! Loading spinner component.

use yew::prelude::*;

/// Inline spinner shown inside buttons while a form is submitting.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <span class="loading" role="status" aria-label="Loading">
            <span class="spinner"></span>
        </span>
    }
}

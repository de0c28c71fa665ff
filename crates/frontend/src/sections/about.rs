//! About section.

use core_types::content::ABOUT;
use yew::prelude::*;

use crate::components::Reveal;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about">
            <Reveal class="section-inner">
                <h2 class="section-title">{"About us"}</h2>
                { for ABOUT.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
            </Reveal>
        </section>
    }
}

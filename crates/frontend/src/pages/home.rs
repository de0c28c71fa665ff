//! Landing page.

use yew::prelude::*;

use crate::sections::{About, Contact, Hero, Partners, Programs, Services, Team};

/// Landing page: every marketing section in order.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    // Scroll to top on initial mount
    use_effect_with((), |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <div class="landing-page">
            <Hero />
            <About />
            <Services />
            <Programs />
            <Team />
            <Partners />
            <Contact />
        </div>
    }
}

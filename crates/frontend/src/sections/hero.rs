//! Hero section.

use core_types::content::{HERO_SUBTITLE, HERO_TITLE};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Reveal;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="section hero">
            <div class="hero-background" aria-hidden="true"></div>
            <Reveal class="hero-content">
                <h1 class="hero-title">{ HERO_TITLE }</h1>
                <p class="hero-subtitle">{ HERO_SUBTITLE }</p>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::SignUp} classes="btn btn-primary">
                        {"Become a member"}
                    </Link<Route>>
                    <a href="#programs" class="btn btn-secondary">{"Explore programs"}</a>
                </div>
            </Reveal>
        </section>
    }
}

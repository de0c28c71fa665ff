//! Services section.

use core_types::content::SERVICES;
use yew::prelude::*;

use super::STAGGER_MS;
use crate::components::Reveal;

#[function_component(Services)]
pub fn services() -> Html {
    let cards = use_memo((), |_| {
        SERVICES
            .iter()
            .enumerate()
            .map(|(i, service)| {
                html! {
                    <Reveal key={service.title} class="card service-card" delay_ms={i as u32 * STAGGER_MS}>
                        <span class={classes!("service-icon", format!("icon-{}", service.icon))} aria-hidden="true"></span>
                        <h3>{ service.title }</h3>
                        <p>{ service.summary }</p>
                    </Reveal>
                }
            })
            .collect::<Html>()
    });

    html! {
        <section id="services" class="section services">
            <h2 class="section-title">{"What we offer"}</h2>
            <div class="card-grid">
                { (*cards).clone() }
            </div>
        </section>
    }
}

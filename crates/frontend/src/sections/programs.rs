//! Programs section.

use core_types::content::PROGRAMS;
use yew::prelude::*;

use super::STAGGER_MS;
use crate::components::Reveal;

#[function_component(Programs)]
pub fn programs() -> Html {
    let cards = use_memo((), |_| {
        PROGRAMS
            .iter()
            .enumerate()
            .map(|(i, program)| {
                html! {
                    <Reveal key={program.title} class="card program-card" delay_ms={i as u32 * STAGGER_MS}>
                        <img src={program.image} alt={program.title} loading="lazy" />
                        <div class="program-body">
                            <h3>{ program.title }</h3>
                            <span class="program-cadence">{ program.cadence }</span>
                            <p>{ program.summary }</p>
                        </div>
                    </Reveal>
                }
            })
            .collect::<Html>()
    });

    html! {
        <section id="programs" class="section programs">
            <h2 class="section-title">{"Programs"}</h2>
            <div class="card-grid">
                { (*cards).clone() }
            </div>
        </section>
    }
}

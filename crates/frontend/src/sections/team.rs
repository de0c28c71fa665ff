//! Team section. Hovering a card reveals the member's bio.

use core_types::content::TEAM;
use yew::prelude::*;

use super::STAGGER_MS;
use crate::components::Reveal;

#[function_component(Team)]
pub fn team() -> Html {
    let hovered = use_state(|| None::<usize>);

    let cards = TEAM.iter().enumerate().map(|(i, member)| {
        let is_hovered = *hovered == Some(i);
        let on_enter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(i)))
        };
        let on_leave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };

        html! {
            <div
                key={member.name}
                class={classes!("team-card", is_hovered.then_some("is-hovered"))}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                <Reveal delay_ms={i as u32 * STAGGER_MS}>
                    <img src={member.image} alt={member.name} loading="lazy" />
                    <h3>{ member.name }</h3>
                    <span class="team-role">{ member.role }</span>
                    if is_hovered {
                        <p class="team-bio">{ member.bio }</p>
                    }
                </Reveal>
            </div>
        }
    });

    html! {
        <section id="team" class="section team">
            <h2 class="section-title">{"Meet the team"}</h2>
            <div class="team-grid">
                { for cards }
            </div>
        </section>
    }
}

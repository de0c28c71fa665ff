//! Partners section.

use core_types::content::PARTNERS;
use yew::prelude::*;

#[function_component(Partners)]
pub fn partners() -> Html {
    let logos = use_memo((), |_| {
        PARTNERS
            .iter()
            .map(|partner| {
                html! {
                    <a
                        key={partner.name}
                        class="partner-logo"
                        href={partner.url}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <img src={partner.logo} alt={partner.name} loading="lazy" />
                    </a>
                }
            })
            .collect::<Html>()
    });

    html! {
        <section id="partners" class="section partners">
            <h2 class="section-title">{"Our partners"}</h2>
            <div class="partner-row">
                { (*logos).clone() }
            </div>
        </section>
    }
}

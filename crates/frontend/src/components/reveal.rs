//! Enter animation wrapper.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Properties for Reveal component.
#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Delay before the element is marked visible, for staggering siblings.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Html,
}

/// Adds `is-visible` to its wrapper after `delay_ms`; CSS does the rest.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with(props.delay_ms, move |delay| {
            let timeout = Timeout::new(*delay, move || visible.set(true));
            move || drop(timeout)
        });
    }

    html! {
        <div class={classes!("reveal", props.class.clone(), (*visible).then_some("is-visible"))}>
            { props.children.clone() }
        </div>
    }
}

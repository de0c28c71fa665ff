//! Site footer.

use core_types::SITE_NAME;
use core_types::content::{CONTACT_CHANNELS, NAV_LINKS};
use yew::prelude::*;

/// Site footer component.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="brand">{ SITE_NAME }</span>
                    <p class="text-secondary">{"Learning, mentoring and building together."}</p>
                </div>
                <ul class="footer-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li key={link.label}>
                            <a href={format!("/{}", link.href)}>{ link.label }</a>
                        </li>
                    })}
                </ul>
                <ul class="footer-contact">
                    { for CONTACT_CHANNELS.iter().map(|channel| html! {
                        <li key={channel.label}>
                            <a href={channel.href}>{ channel.value }</a>
                        </li>
                    })}
                </ul>
            </div>
            <p class="footer-note">{ format!("© {SITE_NAME}. All rights reserved.") }</p>
        </footer>
    }
}

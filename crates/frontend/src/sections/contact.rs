//! Contact section with channels and a message form.

use core_types::ContactForm;
use core_types::content::CONTACT_CHANNELS;
use yew::prelude::*;

use crate::components::{FormMessage, FormStatus, Reveal, TextArea, TextField};

const THANKS: &str = "Thanks for reaching out! We'll get back to you soon.";

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(FormStatus::default);

    let setter = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |value: String| field.set(value))
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = ContactForm {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };

            match form.validate() {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    status.set(FormStatus::Success(THANKS.to_string()));
                }
                Err(err) => status.set(FormStatus::Error(err.to_string())),
            }
        })
    };

    html! {
        <section id="contact" class="section contact">
            <h2 class="section-title">{"Get in touch"}</h2>
            <div class="contact-grid">
                <Reveal class="contact-channels">
                    <ul>
                        { for CONTACT_CHANNELS.iter().map(|channel| html! {
                            <li key={channel.label}>
                                <span class="contact-label">{ channel.label }</span>
                                <a href={channel.href}>{ channel.value }</a>
                            </li>
                        })}
                    </ul>
                </Reveal>

                <form class="contact-form" {onsubmit} novalidate={true}>
                    <TextField
                        label="Name"
                        name="name"
                        value={(*name).clone()}
                        oninput={setter(&name)}
                        autocomplete="name"
                    />
                    <TextField
                        label="Email"
                        name="email"
                        input_type="email"
                        value={(*email).clone()}
                        oninput={setter(&email)}
                        autocomplete="email"
                    />
                    <TextArea
                        label="Message"
                        name="message"
                        value={(*message).clone()}
                        oninput={setter(&message)}
                        rows={5}
                    />
                    <button type="submit" class="btn btn-primary">{"Send message"}</button>
                    <FormMessage status={(*status).clone()} />
                </form>
            </div>
        </section>
    }
}

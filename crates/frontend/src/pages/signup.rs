//! Sign-up page.

use core_types::{MIN_PASSWORD_LEN, SignUpForm};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{report_error, submit_form};
use crate::app::Route;
use crate::components::{FormMessage, FormStatus, Loading, PasswordField, TextField};

/// Sign-up page component.
#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let status = use_state(FormStatus::default);

    let setter = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |value: String| field.set(value))
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }

            let form = SignUpForm {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                confirm_password: (*confirm).clone(),
            };
            if let Err(err) = form.validate() {
                status.set(FormStatus::Error(err.to_string()));
                return;
            }

            status.set(FormStatus::Submitting);
            let status = status.clone();
            let password = password.clone();
            let confirm = confirm.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit_form("/api/auth/sign-up", &form).await {
                    Ok(message) => {
                        password.set(String::new());
                        confirm.set(String::new());
                        status.set(FormStatus::Success(message));
                    }
                    Err(message) => {
                        report_error(format!("sign-up failed: {}", message));
                        status.set(FormStatus::Error(message));
                    }
                }
            });
        })
    };

    let submitting = status.is_submitting();

    html! {
        <div class="auth-page">
            <h1>{"Create an account"}</h1>
            <p class="text-secondary">{"Join the community in under a minute"}</p>

            <form class="auth-form" {onsubmit} novalidate={true}>
                <TextField
                    label="Full name"
                    name="name"
                    value={(*name).clone()}
                    oninput={setter(&name)}
                    autocomplete="name"
                    disabled={submitting}
                />
                <TextField
                    label="Email"
                    name="email"
                    input_type="email"
                    value={(*email).clone()}
                    oninput={setter(&email)}
                    autocomplete="email"
                    disabled={submitting}
                />
                <PasswordField
                    label={format!("Password (at least {MIN_PASSWORD_LEN} characters)")}
                    name="password"
                    value={(*password).clone()}
                    oninput={setter(&password)}
                    autocomplete="new-password"
                    disabled={submitting}
                />
                <PasswordField
                    label="Confirm password"
                    name="confirm_password"
                    value={(*confirm).clone()}
                    oninput={setter(&confirm)}
                    autocomplete="new-password"
                    disabled={submitting}
                />
                <button type="submit" class="btn btn-primary btn-block" disabled={submitting}>
                    if submitting {
                        <Loading />
                        {"Creating account..."}
                    } else {
                        {"Sign up"}
                    }
                </button>
                <FormMessage status={(*status).clone()} />
            </form>

            <p class="auth-footer">
                {"Already have an account? "}
                <Link<Route> to={Route::Login} classes="text-link">{"Sign in"}</Link<Route>>
            </p>
        </div>
    }
}

//! Forgot-password page.

use core_types::ForgotPasswordForm;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{report_error, submit_form};
use crate::app::Route;
use crate::components::{FormMessage, FormStatus, Loading, TextField};

/// Forgot-password page component.
#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let email = use_state(String::new);
    let status = use_state(FormStatus::default);

    let oninput = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let onsubmit = {
        let email = email.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }

            let form = ForgotPasswordForm {
                email: (*email).clone(),
            };
            if let Err(err) = form.validate() {
                status.set(FormStatus::Error(err.to_string()));
                return;
            }

            status.set(FormStatus::Submitting);
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit_form("/api/auth/forgot-password", &form).await {
                    Ok(message) => status.set(FormStatus::Success(message)),
                    Err(message) => {
                        report_error(format!("password reset failed: {}", message));
                        status.set(FormStatus::Error(message));
                    }
                }
            });
        })
    };

    let submitting = status.is_submitting();

    html! {
        <div class="auth-page">
            <h1>{"Reset your password"}</h1>
            <p class="text-secondary">
                {"Enter your email and we'll send you a link to reset your password."}
            </p>

            <form class="auth-form" {onsubmit} novalidate={true}>
                <TextField
                    label="Email"
                    name="email"
                    input_type="email"
                    value={(*email).clone()}
                    {oninput}
                    autocomplete="email"
                    disabled={submitting}
                />
                <button type="submit" class="btn btn-primary btn-block" disabled={submitting}>
                    if submitting {
                        <Loading />
                        {"Sending..."}
                    } else {
                        {"Send reset link"}
                    }
                </button>
                <FormMessage status={(*status).clone()} />
            </form>

            <p class="auth-footer">
                <Link<Route> to={Route::Login} classes="text-link">{"Back to sign in"}</Link<Route>>
            </p>
        </div>
    }
}

//! Sign-in page.

use core_types::SignInForm;
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use web_types::login_error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{report_error, submit_form};
use crate::app::Route;
use crate::components::{FormMessage, FormStatus, Loading, PasswordField, TextField};

/// Pause after a successful sign-in before moving to the dashboard.
const REDIRECT_DELAY_MS: u32 = 800;

#[derive(Debug, Default, Deserialize)]
struct LoginQuery {
    error: Option<String>,
}

/// Sign-in page component.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let navigator = use_navigator();

    // An `error` query parameter comes from a failed provider callback.
    let status = {
        let location = use_location();
        use_state(move || {
            location
                .and_then(|l| l.query::<LoginQuery>().ok())
                .and_then(|q| q.error)
                .map(|code| FormStatus::Error(login_error::describe(&code).to_string()))
                .unwrap_or_default()
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }

            let form = SignInForm {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            if let Err(err) = form.validate() {
                status.set(FormStatus::Error(err.to_string()));
                return;
            }

            status.set(FormStatus::Submitting);
            let status = status.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit_form("/api/auth/sign-in", &form).await {
                    Ok(message) => {
                        status.set(FormStatus::Success(message));
                        if let Some(navigator) = navigator {
                            Timeout::new(REDIRECT_DELAY_MS, move || {
                                navigator.push(&Route::Dashboard)
                            })
                            .forget();
                        }
                    }
                    Err(message) => {
                        report_error(format!("sign-in failed: {}", message));
                        status.set(FormStatus::Error(message));
                    }
                }
            });
        })
    };

    let submitting = status.is_submitting();

    html! {
        <div class="auth-page">
            <h1>{"Welcome back"}</h1>
            <p class="text-secondary">{"Sign in to your account"}</p>

            <form class="auth-form" {onsubmit} novalidate={true}>
                <TextField
                    label="Email"
                    name="email"
                    input_type="email"
                    value={(*email).clone()}
                    oninput={{
                        let email = email.clone();
                        Callback::from(move |v: String| email.set(v))
                    }}
                    autocomplete="email"
                    disabled={submitting}
                />
                <PasswordField
                    label="Password"
                    name="password"
                    value={(*password).clone()}
                    oninput={{
                        let password = password.clone();
                        Callback::from(move |v: String| password.set(v))
                    }}
                    disabled={submitting}
                />
                <div class="auth-row">
                    <Link<Route> to={Route::ForgotPassword} classes="text-link">
                        {"Forgot password?"}
                    </Link<Route>>
                </div>
                <button type="submit" class="btn btn-primary btn-block" disabled={submitting}>
                    if submitting {
                        <Loading />
                        {"Signing in..."}
                    } else {
                        {"Sign in"}
                    }
                </button>
                <FormMessage status={(*status).clone()} />
            </form>

            <div class="auth-divider"><span>{"or"}</span></div>
            <a href="/auth/login?next=/dashboard" class="btn btn-secondary btn-block">
                {"Continue with your provider"}
            </a>

            <p class="auth-footer">
                {"Don't have an account? "}
                <Link<Route> to={Route::SignUp} classes="text-link">{"Sign up"}</Link<Route>>
            </p>
        </div>
    }
}

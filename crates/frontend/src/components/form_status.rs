//! Submission state shared by the site's forms.

use yew::prelude::*;

/// Where a form submission stands.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Properties for FormMessage component.
#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub status: FormStatus,
}

/// Success or error banner under a form. Renders nothing otherwise.
#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    match &props.status {
        FormStatus::Success(message) => html! {
            <p class="form-message success" role="status">{ message }</p>
        },
        FormStatus::Error(message) => html! {
            <p class="form-message error" role="alert">{ message }</p>
        },
        FormStatus::Idle | FormStatus::Submitting => html! {},
    }
}

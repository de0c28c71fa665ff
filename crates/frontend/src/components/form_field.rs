//! Labelled form inputs.

use yew::prelude::*;

/// Properties for TextField component.
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub autocomplete: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

/// Text input with a label.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let callback = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    html! {
        <label class="form-field">
            <span class="form-label">{ props.label.clone() }</span>
            <input
                class="form-input"
                type={props.input_type.clone()}
                name={props.name.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                disabled={props.disabled}
                {oninput}
            />
        </label>
    }
}

/// Properties for PasswordField component.
#[derive(Properties, PartialEq)]
pub struct PasswordFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("current-password"))]
    pub autocomplete: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
}

/// Password input with a show/hide toggle.
#[function_component(PasswordField)]
pub fn password_field(props: &PasswordFieldProps) -> Html {
    let visible = use_state(|| false);

    let oninput = {
        let callback = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    let on_toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(!*visible))
    };

    html! {
        <label class="form-field">
            <span class="form-label">{ props.label.clone() }</span>
            <span class="password-input">
                <input
                    class="form-input"
                    type={if *visible { "text" } else { "password" }}
                    name={props.name.clone()}
                    value={props.value.clone()}
                    autocomplete={props.autocomplete.clone()}
                    disabled={props.disabled}
                    {oninput}
                />
                <button
                    type="button"
                    class="password-toggle"
                    aria-label={if *visible { "Hide password" } else { "Show password" }}
                    onclick={on_toggle}
                >
                    { if *visible { "Hide" } else { "Show" } }
                </button>
            </span>
        </label>
    }
}

/// Properties for TextArea component.
#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub disabled: bool,
}

/// Multi-line text input with a label.
#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let callback = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    html! {
        <label class="form-field">
            <span class="form-label">{ props.label.clone() }</span>
            <textarea
                class="form-input"
                name={props.name.clone()}
                value={props.value.clone()}
                rows={props.rows.to_string()}
                disabled={props.disabled}
                {oninput}
            />
        </label>
    }
}

use dioxus::prelude::*;
use store::{AuthField, AuthForm, AuthMode, Event};

use crate::session::use_dispatch;

/// Login / sign-up form shown while no one is logged in.
///
/// Renders a snapshot of the form state; every keystroke and click is sent to
/// the session owner as an event.
#[component]
pub fn AuthPanel(form: AuthForm) -> Element {
    let dispatch = use_dispatch();

    let title = form.mode.title();
    let submit_label = form.submit_label();
    let busy = form.busy;
    let needs_email = form.mode.needs_email();
    let username = form.draft.username.clone();
    let email = form.draft.email.clone();
    let password = form.draft.password.clone();
    let (prompt, switch_label) = match form.mode {
        AuthMode::Login => ("Don't have an account? ", "Sign up"),
        AuthMode::Register => ("Already have an account? ", "Login"),
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        dispatch.call(Event::SubmitAuth);
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-form",
                h2 { "{title}" }

                if let Some(err) = form.error.clone() {
                    div { class: "error-message", "{err}" }
                }

                form {
                    onsubmit: handle_submit,

                    input {
                        r#type: "text",
                        placeholder: "Username",
                        required: true,
                        value: "{username}",
                        oninput: move |evt: FormEvent| {
                            dispatch.call(Event::EditAuth(AuthField::Username, evt.value()))
                        },
                    }

                    if needs_email {
                        input {
                            r#type: "email",
                            placeholder: "Email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt: FormEvent| {
                                dispatch.call(Event::EditAuth(AuthField::Email, evt.value()))
                            },
                        }
                    }

                    input {
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt: FormEvent| {
                            dispatch.call(Event::EditAuth(AuthField::Password, evt.value()))
                        },
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: busy,
                        "{submit_label}"
                    }
                }

                p {
                    "{prompt}"
                    button {
                        r#type: "button",
                        class: "link-button",
                        disabled: busy,
                        onclick: move |_| dispatch.call(Event::ToggleAuthMode),
                        "{switch_label}"
                    }
                }
            }
        }
    }
}

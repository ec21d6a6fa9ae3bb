use dioxus::prelude::*;
use store::{ComposerDraft, ComposerField, Event};

use crate::session::use_dispatch;

/// Inline form for creating a new post.
#[component]
pub fn PostComposer(draft: ComposerDraft) -> Element {
    let dispatch = use_dispatch();

    let disabled = !draft.can_submit();
    let label = draft.submit_label();
    let title = draft.title.clone();
    let content = draft.content.clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        dispatch.call(Event::SubmitPost);
    };

    rsx! {
        div {
            class: "new-post-form",
            h3 { "Create New Post" }
            form {
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "Post title",
                    required: true,
                    value: "{title}",
                    oninput: move |evt: FormEvent| {
                        dispatch.call(Event::EditComposer(ComposerField::Title, evt.value()))
                    },
                }
                textarea {
                    placeholder: "Post content (optional)",
                    rows: "4",
                    value: "{content}",
                    oninput: move |evt: FormEvent| {
                        dispatch.call(Event::EditComposer(ComposerField::Content, evt.value()))
                    },
                }
                button {
                    r#type: "submit",
                    class: "btn btn-success",
                    disabled: disabled,
                    "{label}"
                }
            }
        }
    }
}

//! Top-level view: picks what to render for each session phase.
//!
//! - **Initializing**: loading placeholder until the identity check settles
//! - **Unauthenticated**: [`AuthPanel`] only
//! - **Authenticated**: header, the new-post toggle, the composer when open, and the feed
//!
//! Feed and composer are never rendered without a session.

use dioxus::prelude::*;
use store::{Event, Phase};

use crate::auth_panel::AuthPanel;
use crate::header::Header;
use crate::post_composer::PostComposer;
use crate::post_feed::PostFeed;
use crate::session::{use_dispatch, use_session};

#[component]
pub fn Shell() -> Element {
    let state = use_session();
    let dispatch = use_dispatch();

    match state().phase {
        Phase::Initializing { .. } => rsx! {
            div {
                class: "loading-container",
                div { "Loading..." }
            }
        },
        Phase::Unauthenticated(form) => rsx! {
            AuthPanel { form }
        },
        Phase::Authenticated(session) => {
            let posts = session.feed.posts().to_vec();
            rsx! {
                div {
                    class: "app",
                    Header { user: session.user, logging_out: session.logging_out }
                    main {
                        class: "main-content",
                        div {
                            class: "new-post-button-container",
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| dispatch.call(Event::ToggleComposer),
                                "➕ New Post"
                            }
                        }

                        if let Some(draft) = session.composer {
                            PostComposer { draft }
                        }

                        PostFeed { posts }
                    }
                }
            }
        }
    }
}

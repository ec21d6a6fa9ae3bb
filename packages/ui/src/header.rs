use dioxus::prelude::*;
use store::{Event, User};

use crate::session::use_dispatch;

/// Top bar with the signed-in user and the logout button.
#[component]
pub fn Header(user: User, #[props(default)] logging_out: bool) -> Element {
    let dispatch = use_dispatch();

    rsx! {
        header {
            class: "header",
            div {
                class: "header-content",
                h1 { "Postboard" }
                div {
                    class: "header-user",
                    span { "👤 {user.username}" }
                    button {
                        class: "btn btn-secondary",
                        disabled: logging_out,
                        onclick: move |_| dispatch.call(Event::Logout),
                        "🚪 Logout"
                    }
                }
            }
        }
    }
}

//! Post list for the authenticated view.

use dioxus::prelude::*;
use store::Post;

/// Renders the feed in server order, or an empty-state hint.
#[component]
pub fn PostFeed(posts: Vec<Post>) -> Element {
    if posts.is_empty() {
        return rsx! {
            div {
                class: "empty-posts",
                p { "💬 No posts yet. Create your first post!" }
            }
        };
    }

    rsx! {
        div {
            class: "posts-list",
            for post in posts {
                PostCard { key: "{post.id}", post }
            }
        }
    }
}

#[component]
fn PostCard(post: Post) -> Element {
    let date = local_date(&post);
    let body = post.body().map(str::to_string);

    rsx! {
        div {
            class: "post-card",
            h3 { "{post.title}" }
            if let Some(body) = body {
                p { "{body}" }
            }
            div {
                class: "post-meta",
                "By {post.username} • {date}"
            }
        }
    }
}

/// Creation date in the browser's locale.
#[cfg(target_arch = "wasm32")]
fn local_date(post: &Post) -> String {
    use wasm_bindgen::JsValue;

    match post.created() {
        Some(at) => {
            let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
            String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED))
        }
        None => post.created_at.clone(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn local_date(post: &Post) -> String {
    store::models::display_date(post)
}

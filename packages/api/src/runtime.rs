//! # Effect execution
//!
//! [`perform`] turns one [`Effect`] into exactly one completion [`Event`]. It
//! never fails: every error is folded into the event the reducer expects for
//! that call, which is where the client's deliberately weak error model lives.
//!
//! | Effect | Success | Failure |
//! |--------|---------|---------|
//! | `FetchIdentity` | `IdentityResolved(Some(user))` | `IdentityResolved(None)`, logged at debug |
//! | `Login` / `Register` | `AuthSucceeded(user)` | `AuthFailed(message)` shown inline |
//! | `Logout` | `LoggedOut` | `LoggedOut`, failure logged |
//! | `LoadPosts` | `PostsLoaded(posts)` | `PostsLoadFailed`, feed untouched |
//! | `CreatePost` | `PostCreated(post)` | `PostCreateFailed`, draft kept |
//!
//! The Dioxus shell calls [`perform`] from spawned tasks and feeds the result
//! back through the reducer.

use store::{Effect, Event};
use tracing::{debug, warn};

use crate::backend::Backend;

/// Execute one effect against the backend and report its outcome.
pub async fn perform<B: Backend>(backend: &B, effect: Effect) -> Event {
    match effect {
        Effect::FetchIdentity => match backend.me().await {
            Ok(user) => Event::IdentityResolved(Some(user)),
            Err(e) => {
                debug!(status = ?e.status(), error = %e, "not authenticated");
                Event::IdentityResolved(None)
            }
        },
        Effect::Login { username, password } => {
            match backend.login(&username, &password).await {
                Ok(user) => Event::AuthSucceeded(user),
                Err(e) => Event::AuthFailed(e.user_message()),
            }
        }
        Effect::Register {
            username,
            email,
            password,
        } => match backend.register(&username, &email, &password).await {
            Ok(user) => Event::AuthSucceeded(user),
            Err(e) => Event::AuthFailed(e.user_message()),
        },
        Effect::Logout => {
            if let Err(e) = backend.logout().await {
                warn!(error = %e, "logout request failed");
            }
            Event::LoggedOut
        }
        Effect::LoadPosts => match backend.list_posts().await {
            Ok(posts) => Event::PostsLoaded(posts),
            Err(e) => Event::PostsLoadFailed(e.to_string()),
        },
        Effect::CreatePost { title, content } => {
            match backend.create_post(&title, &content).await {
                Ok(post) => Event::PostCreated(post),
                Err(e) => Event::PostCreateFailed(e.to_string()),
            }
        }
    }
}

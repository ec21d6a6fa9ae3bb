//! Messages fed into the reducer.
//!
//! User intents come from the UI; completion events come back from whatever
//! executed an [`crate::Effect`].

use crate::models::{Post, User};
use crate::state::{AuthField, ComposerField};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // Startup
    Started,
    /// Identity check finished; `None` covers both rejection and transport failure.
    IdentityResolved(Option<User>),

    // Auth form
    ToggleAuthMode,
    EditAuth(AuthField, String),
    SubmitAuth,
    AuthSucceeded(User),
    /// Login or register failed; carries the message to show inline.
    AuthFailed(String),

    // Session
    Logout,
    /// Logout request finished, successfully or not.
    LoggedOut,

    // Feed
    LoadPosts,
    PostsLoaded(Vec<Post>),
    PostsLoadFailed(String),

    // Composer
    ToggleComposer,
    EditComposer(ComposerField, String),
    SubmitPost,
    PostCreated(Post),
    PostCreateFailed(String),
}

//! # Client state — the session state machine
//!
//! [`AppState`] is the single owner of everything the client knows: who is
//! logged in, the feed, and the open form drafts. The lifecycle is a tagged
//! [`Phase`] rather than a set of flags, so combinations such as "loading while
//! already authenticated" cannot be represented.
//!
//! ```text
//! Initializing ──identity ok──▶ Authenticated ──logout──▶ Unauthenticated(Login)
//!      │                              ▲                        │   ▲
//!      └──identity failed──▶ Unauthenticated(mode) ──auth ok───┘   │ toggle mode
//!                                     └────────────────────────────┘
//! ```
//!
//! All transitions happen in [`crate::reducer::update`].

use crate::feed::Feed;
use crate::models::{Post, User};

/// Which credential form the unauthenticated user is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    /// Heading and submit label.
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Sign Up",
        }
    }

    /// Whether the email field is shown and required.
    pub fn needs_email(self) -> bool {
        matches!(self, AuthMode::Register)
    }
}

/// Credential fields of the auth form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Email,
    Password,
}

/// Credential draft. Values survive a mode toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Whether every field the mode requires has a value.
    pub fn is_complete(&self, mode: AuthMode) -> bool {
        !self.username.is_empty()
            && !self.password.is_empty()
            && (!mode.needs_email() || !self.email.is_empty())
    }
}

/// The credential form shown while no one is logged in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub draft: Credentials,
    /// Last server or network error, shown inline
    pub error: Option<String>,
    pub busy: bool,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Please wait..."
        } else {
            self.mode.title()
        }
    }
}

/// Fields of the post composer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerField {
    Title,
    Content,
}

/// Draft of a new post; exists only while the composer is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposerDraft {
    pub title: String,
    pub content: String,
    pub busy: bool,
}

impl ComposerDraft {
    /// A title of only whitespace counts as missing.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.busy && self.has_title()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Creating..."
        } else {
            "Create Post"
        }
    }
}

/// Everything that exists only while someone is logged in.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub feed: Feed,
    pub composer: Option<ComposerDraft>,
    /// A logout request is in flight
    pub logging_out: bool,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            feed: Feed::new(),
            composer: None,
            logging_out: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    /// Waiting for the startup identity check.
    Initializing { checking: bool },
    Unauthenticated(AuthForm),
    Authenticated(Session),
}

/// Root of the client state.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub phase: Phase,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: Phase::Initializing { checking: false },
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            Phase::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn auth_form(&self) -> Option<&AuthForm> {
        match &self.phase {
            Phase::Unauthenticated(form) => Some(form),
            _ => None,
        }
    }

    /// Posts visible to the current session; empty when logged out.
    pub fn posts(&self) -> &[Post] {
        self.session().map(|s| s.feed.posts()).unwrap_or_default()
    }
}

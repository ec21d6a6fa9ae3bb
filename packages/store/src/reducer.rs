//! Client reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects, feeding their outcomes back in as events.
//! Events that make no sense in the current phase are dropped.

use tracing::{debug, info, warn};

use crate::effects::Effect;
use crate::events::Event;
use crate::state::{AppState, AuthField, AuthForm, AuthMode, ComposerDraft, ComposerField, Phase, Session};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: Event) -> Vec<Effect> {
    match (&mut state.phase, event) {
        // ====================================================================
        // Startup
        // ====================================================================
        (Phase::Initializing { checking }, Event::Started) => {
            if *checking {
                return vec![];
            }
            *checking = true;
            vec![Effect::FetchIdentity]
        }
        (Phase::Initializing { .. }, Event::IdentityResolved(user)) => match user {
            Some(user) => {
                info!(username = %user.username, "restored session");
                state.phase = Phase::Authenticated(Session::new(user));
                vec![Effect::LoadPosts]
            }
            None => {
                debug!("no active session");
                state.phase = Phase::Unauthenticated(AuthForm::new(AuthMode::Login));
                vec![]
            }
        },

        // ====================================================================
        // Auth form
        // ====================================================================
        (Phase::Unauthenticated(form), Event::ToggleAuthMode) => {
            if !form.busy {
                form.mode = form.mode.toggled();
                form.error = None;
            }
            vec![]
        }
        (Phase::Unauthenticated(form), Event::EditAuth(field, value)) => {
            let slot = match field {
                AuthField::Username => &mut form.draft.username,
                AuthField::Email => &mut form.draft.email,
                AuthField::Password => &mut form.draft.password,
            };
            *slot = value;
            vec![]
        }
        (Phase::Unauthenticated(form), Event::SubmitAuth) => submit_auth(form),
        (Phase::Unauthenticated(form), Event::AuthSucceeded(user)) if form.busy => {
            info!(username = %user.username, "logged in");
            state.phase = Phase::Authenticated(Session::new(user));
            vec![Effect::LoadPosts]
        }
        (Phase::Unauthenticated(form), Event::AuthFailed(message)) if form.busy => {
            debug!(%message, "authentication rejected");
            form.busy = false;
            form.error = Some(message);
            vec![]
        }

        // ====================================================================
        // Session
        // ====================================================================
        (Phase::Authenticated(session), Event::Logout) => {
            if session.logging_out {
                return vec![];
            }
            session.logging_out = true;
            vec![Effect::Logout]
        }
        (Phase::Authenticated(session), Event::LoggedOut) => {
            info!(username = %session.user.username, "logged out");
            state.phase = Phase::Unauthenticated(AuthForm::new(AuthMode::Login));
            vec![]
        }

        // ====================================================================
        // Feed
        // ====================================================================
        (Phase::Authenticated(_), Event::LoadPosts) => vec![Effect::LoadPosts],
        (Phase::Authenticated(session), Event::PostsLoaded(posts)) => {
            session.feed.replace(posts);
            debug!(count = session.feed.len(), "feed loaded");
            vec![]
        }
        (Phase::Authenticated(_), Event::PostsLoadFailed(reason)) => {
            warn!(%reason, "failed to fetch posts");
            vec![]
        }

        // ====================================================================
        // Composer
        // ====================================================================
        (Phase::Authenticated(session), Event::ToggleComposer) => {
            match &session.composer {
                Some(draft) if draft.busy => {}
                Some(_) => session.composer = None,
                None => session.composer = Some(ComposerDraft::default()),
            }
            vec![]
        }
        (Phase::Authenticated(session), Event::EditComposer(field, value)) => {
            if let Some(draft) = session.composer.as_mut() {
                match field {
                    ComposerField::Title => draft.title = value,
                    ComposerField::Content => draft.content = value,
                }
            }
            vec![]
        }
        (Phase::Authenticated(session), Event::SubmitPost) => match session.composer.as_mut() {
            Some(draft) if draft.can_submit() => {
                draft.busy = true;
                vec![Effect::CreatePost {
                    title: draft.title.clone(),
                    content: draft.content.clone(),
                }]
            }
            _ => vec![],
        },
        (Phase::Authenticated(session), Event::PostCreated(mut post)) => {
            // The create response is the bare row; credit it to the session user.
            if post.username.is_empty() {
                post.username = session.user.username.clone();
            }
            session.feed.prepend(post);
            session.composer = None;
            debug!(count = session.feed.len(), "post created");
            vec![]
        }
        (Phase::Authenticated(session), Event::PostCreateFailed(reason)) => {
            warn!(%reason, "failed to create post");
            if let Some(draft) = session.composer.as_mut() {
                draft.busy = false;
            }
            vec![]
        }

        (_, event) => {
            debug!(?event, "ignoring event in current phase");
            vec![]
        }
    }
}

fn submit_auth(form: &mut AuthForm) -> Vec<Effect> {
    if form.busy || !form.draft.is_complete(form.mode) {
        return vec![];
    }
    form.busy = true;
    form.error = None;
    let draft = &form.draft;
    let effect = match form.mode {
        AuthMode::Login => Effect::Login {
            username: draft.username.clone(),
            password: draft.password.clone(),
        },
        AuthMode::Register => Effect::Register {
            username: draft.username.clone(),
            email: draft.email.clone(),
            password: draft.password.clone(),
        },
    };
    vec![effect]
}

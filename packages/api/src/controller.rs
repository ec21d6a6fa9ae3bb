//! Sequential driver over the reducer, used by the scenario tests.
//!
//! [`Controller`] owns an [`AppState`] and runs every effect to completion
//! before returning, so a test can walk a whole session one call at a time.

use std::collections::VecDeque;

use store::{update, AppState, AuthField, AuthMode, ComposerField, Event};

use crate::backend::Backend;
use crate::runtime::perform;

/// Owns the client state and drives it against a backend, one event at a time.
pub struct Controller<B> {
    backend: B,
    state: AppState,
}

impl<B: Backend> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Feed an event through the reducer and run every resulting effect,
    /// including the follow-ups their outcomes trigger.
    pub async fn dispatch(&mut self, event: Event) {
        let mut pending = VecDeque::from([event]);
        while let Some(event) = pending.pop_front() {
            for effect in update(&mut self.state, event) {
                pending.push_back(perform(&self.backend, effect).await);
            }
        }
    }

    /// Startup identity check.
    pub async fn check_session(&mut self) {
        self.dispatch(Event::Started).await;
    }

    pub async fn login(&mut self, username: &str, password: &str) {
        self.submit_credentials(AuthMode::Login, username, "", password)
            .await;
    }

    pub async fn register(&mut self, username: &str, email: &str, password: &str) {
        self.submit_credentials(AuthMode::Register, username, email, password)
            .await;
    }

    pub async fn logout(&mut self) {
        self.dispatch(Event::Logout).await;
    }

    pub async fn load_posts(&mut self) {
        self.dispatch(Event::LoadPosts).await;
    }

    /// Open the composer if needed, fill it and submit.
    pub async fn submit_post(&mut self, title: &str, content: &str) {
        let open = self.state.session().is_some_and(|s| s.composer.is_some());
        if !open {
            self.dispatch(Event::ToggleComposer).await;
        }
        self.dispatch(Event::EditComposer(ComposerField::Title, title.to_string()))
            .await;
        self.dispatch(Event::EditComposer(ComposerField::Content, content.to_string()))
            .await;
        self.dispatch(Event::SubmitPost).await;
    }

    /// Inline error currently shown on the auth form.
    pub fn auth_error(&self) -> Option<&str> {
        self.state.auth_form().and_then(|f| f.error.as_deref())
    }

    async fn submit_credentials(
        &mut self,
        mode: AuthMode,
        username: &str,
        email: &str,
        password: &str,
    ) {
        if self.state.auth_form().is_some_and(|f| f.mode != mode) {
            self.dispatch(Event::ToggleAuthMode).await;
        }
        let fields = [
            (AuthField::Username, username),
            (AuthField::Email, email),
            (AuthField::Password, password),
        ];
        for (field, value) in fields {
            self.dispatch(Event::EditAuth(field, value.to_string())).await;
        }
        self.dispatch(Event::SubmitAuth).await;
    }
}

//! Client-side state for Postboard: models, configuration, and the session
//! state machine. Nothing in this crate performs I/O.

pub mod config;
pub mod effects;
pub mod events;
pub mod feed;
pub mod models;
pub mod reducer;
pub mod state;

pub use config::{ClientConfig, ConfigError};
pub use effects::Effect;
pub use events::Event;
pub use feed::Feed;
pub use models::{Post, User};
pub use reducer::update;
pub use state::{
    AppState, AuthField, AuthForm, AuthMode, ComposerDraft, ComposerField, Credentials, Phase,
    Session,
};

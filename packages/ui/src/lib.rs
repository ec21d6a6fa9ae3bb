//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const POSTBOARD_CSS: Asset = asset!("/assets/postboard.css");

mod config;
pub use config::load_config;

mod session;
pub use session::{use_dispatch, use_session, SessionProvider};

mod auth_panel;
pub use auth_panel::AuthPanel;

mod header;
pub use header::Header;

mod post_feed;
pub use post_feed::PostFeed;

mod post_composer;
pub use post_composer::PostComposer;

mod shell;
pub use shell::Shell;

//! # API crate — backend access for Postboard
//!
//! Everything that talks to the network lives here; the state it feeds lives in
//! the `store` crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], the reqwest-based HTTP client for the backend's JSON contract |
//! | [`backend`] | [`Backend`] trait, the seam between the runtime and the HTTP client |
//! | [`runtime`] | [`perform`]: effect → completion event |
//! | [`config`] | One-shot resolution of the backend base URL |
//! | [`error`] | [`ApiError`] and the inline auth message rules |

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod runtime;

#[cfg(test)]
mod controller;

pub use backend::Backend;
pub use client::ApiClient;
pub use error::{ApiError, NETWORK_ERROR};
pub use runtime::perform;
pub use store::{Post, User};

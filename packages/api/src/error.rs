//! Error taxonomy for backend calls.
//!
//! Only login and register ever show an error to the user; every other call
//! logs it and leaves state as it was. [`ApiError::user_message`] is the single
//! place that decides what the inline auth error says.

use thiserror::Error;

/// What the auth form shows when the request never got a usable answer.
pub const NETWORK_ERROR: &str = "Network error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: unreachable host, DNS, reset connection.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// A success response whose body did not match the contract.
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Config(#[from] store::ConfigError),
}

impl ApiError {
    /// Message for the inline auth error: the server's own text when it sent
    /// one, a generic network error otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            _ => NETWORK_ERROR.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! Backend endpoint resolution.
//!
//! The launcher calls [`resolve`] once at start; the result is injected into
//! the UI and never re-read.

use store::config::ClientConfig;

/// Apply the environment override on top of a file-provided (or default) config.
///
/// Native builds read `POSTBOARD_API_BASE` at run time, honouring a `.env`
/// file. WASM builds have no environment, so the value is baked in at compile time.
pub fn resolve(file: Option<ClientConfig>) -> ClientConfig {
    file.unwrap_or_default().with_override(env_base_url())
}

#[cfg(not(target_arch = "wasm32"))]
fn env_base_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(store::config::BASE_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_base_url() -> Option<String> {
    // option_env! needs a literal; keep in step with store::config::BASE_URL_ENV.
    option_env!("POSTBOARD_API_BASE").map(str::to_string)
}

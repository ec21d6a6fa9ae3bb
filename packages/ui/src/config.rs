//! Platform-aware loading of the client configuration.
//!
//! - **Web** (WASM): no config file; only the compile-time override applies
//! - **Desktop** (native): `<config_dir>/postboard/postboard.toml` if present,
//!   then the `POSTBOARD_API_BASE` environment override

use store::ClientConfig;

/// Resolve the backend configuration once, at start.
pub fn load_config() -> ClientConfig {
    api::config::resolve(read_config_file())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<ClientConfig> {
    let path = dirs::config_dir()?
        .join("postboard")
        .join(ClientConfig::filename());
    let text = std::fs::read_to_string(&path).ok()?;
    match ClientConfig::from_toml(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::error!("Ignoring {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_file() -> Option<ClientConfig> {
    None
}

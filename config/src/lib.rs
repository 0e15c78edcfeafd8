//! Load configuration from XDG `config.toml` and project `.env`, then apply to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! The same `config.toml` also carries the engine and log settings ([`Settings`]), read by
//! [`load_settings`] after the environment is applied:
//!
//! ```toml
//! [engine]
//! knowledge_dir = "/srv/promptsmith/knowledge"
//! cache_ttl_secs = 3600
//!
//! [log]
//! level = "warn"
//! dir = "/var/log/promptsmith"
//!
//! [env]
//! RUST_LOG = "promptsmith=debug"
//! ```
//!
//! With the `tracing-init` feature, [`init_tracing`] installs the shared subscriber.

mod dotenv;
#[cfg(feature = "tracing-init")]
mod logging;
mod settings;
mod xdg_toml;

use std::path::Path;
use thiserror::Error;

#[cfg(feature = "tracing-init")]
pub use logging::{env_filter, init_tracing};
pub use settings::{
    apply_overrides, load_settings, EngineSettings, LogSettings, Settings, ENV_CACHE_TTL_SECS,
    ENV_KNOWLEDGE_DIR, ENV_LOG_DIR,
};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("init tracing: {0}")]
    TracingInit(String),
}

/// Fills in process environment variables from the `.env` file and the XDG `[env]` table.
///
/// A key already present in the environment is never touched. For any other key the `.env`
/// value wins over the XDG one. `.env` is looked up in `override_dir`, or the current
/// directory when that is `None`. `app_name` selects `<config home>/<app_name>/config.toml`.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;

    let mut keys: std::collections::BTreeSet<&String> = xdg_map.keys().collect();
    keys.extend(dotenv_map.keys());

    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(v) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, v);
        }
    }

    Ok(())
}

//! Load `$XDG_CONFIG_HOME/<app>/config.toml`: the `[env]` table plus engine and log settings.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::settings::{EngineSettings, LogSettings};
use crate::LoadError;

/// `$XDG_CONFIG_HOME` when set to an absolute path, otherwise the platform config directory.
fn config_home() -> Result<PathBuf, LoadError> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        if dir.is_absolute() {
            return Ok(dir);
        }
    }
    dirs::config_dir().ok_or_else(|| LoadError::XdgPath("no config directory for this platform".into()))
}

/// `<config home>/<app>/config.toml`, or `None` when no such file exists.
fn config_file_path(app_name: &str) -> Result<Option<PathBuf>, LoadError> {
    let path = config_home()?.join(app_name).join("config.toml");
    Ok(path.is_file().then_some(path))
}

#[derive(serde::Deserialize, Default, Debug)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub env: HashMap<String, String>,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub log: LogSettings,
}

/// Parses the whole config file. Missing file returns defaults.
pub(crate) fn load_config_file(app_name: &str) -> Result<ConfigFile, LoadError> {
    let Some(path) = config_file_path(app_name)? else {
        return Ok(ConfigFile::default());
    };
    let raw = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    Ok(toml::from_str(&raw)?)
}

/// The `[env]` table alone; empty when the file or the table is absent.
pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    load_config_file(app_name).map(|config| config.env)
}

//! Typed settings from the `[engine]` and `[log]` tables, with environment overrides.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::{xdg_toml, LoadError};

/// Overrides the knowledge directory.
pub const ENV_KNOWLEDGE_DIR: &str = "PROMPTSMITH_KNOWLEDGE_DIR";
/// Overrides the rule cache TTL, in whole seconds.
pub const ENV_CACHE_TTL_SECS: &str = "PROMPTSMITH_CACHE_TTL_SECS";
/// Overrides the rolling log directory.
pub const ENV_LOG_DIR: &str = "PROMPTSMITH_LOG_DIR";

const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Base directory of the model documents. `None` means the documents built into the binary.
    pub knowledge_dir: Option<PathBuf>,
    pub cache_ttl_secs: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            knowledge_dir: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl EngineSettings {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Daily-rolling log files go here when set.
    pub dir: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub engine: EngineSettings,
    pub log: LogSettings,
    /// The `[env]` table as read from the file (already applied by [`crate::load_and_apply`]).
    pub env: HashMap<String, String>,
}

/// Reads `$XDG_CONFIG_HOME/<app_name>/config.toml` and applies the `PROMPTSMITH_*` overrides from
/// the process environment. A missing file yields defaults.
///
/// Call after [`crate::load_and_apply`] so overrides set in `.env` are visible.
pub fn load_settings(app_name: &str) -> Result<Settings, LoadError> {
    let file = xdg_toml::load_config_file(app_name)?;
    let mut settings = Settings {
        engine: file.engine,
        log: file.log,
        env: file.env,
    };
    apply_overrides(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

/// Applies overrides looked up through `lookup`. Empty values are ignored.
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F) -> Result<(), LoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(dir) = get(ENV_KNOWLEDGE_DIR) {
        settings.engine.knowledge_dir = Some(PathBuf::from(dir));
    }
    if let Some(raw) = get(ENV_CACHE_TTL_SECS) {
        settings.engine.cache_ttl_secs = raw.trim().parse().map_err(|_| LoadError::InvalidValue {
            key: ENV_CACHE_TTL_SECS.to_string(),
            value: raw.clone(),
        })?;
    }
    if let Some(dir) = get(ENV_LOG_DIR) {
        settings.log.dir = Some(PathBuf::from(dir));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env::with_xdg_home;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.engine.knowledge_dir, None);
        assert_eq!(s.engine.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(s.log.level, "warn");
        assert_eq!(s.log.dir, None);
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut s = Settings::default();
        apply_overrides(
            &mut s,
            lookup(&[
                (ENV_KNOWLEDGE_DIR, "/opt/kb"),
                (ENV_CACHE_TTL_SECS, " 90 "),
                (ENV_LOG_DIR, "/var/log/promptsmith"),
            ]),
        )
        .unwrap();
        assert_eq!(s.engine.knowledge_dir, Some(PathBuf::from("/opt/kb")));
        assert_eq!(s.engine.cache_ttl_secs, 90);
        assert_eq!(s.log.dir, Some(PathBuf::from("/var/log/promptsmith")));
    }

    #[test]
    fn empty_override_is_ignored() {
        let mut s = Settings::default();
        apply_overrides(&mut s, lookup(&[(ENV_KNOWLEDGE_DIR, ""), (ENV_CACHE_TTL_SECS, "  ")]))
            .unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn unparsable_ttl_is_invalid_value() {
        let mut s = Settings::default();
        let err = apply_overrides(&mut s, lookup(&[(ENV_CACHE_TTL_SECS, "an hour")])).unwrap_err();
        match err {
            LoadError::InvalidValue { key, value } => {
                assert_eq!(key, ENV_CACHE_TTL_SECS);
                assert_eq!(value, "an hour");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_settings_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("settings-test-app");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[engine]\ncache_ttl_secs = 5\n[log]\nlevel = \"info\"\n[env]\nX = \"1\"\n",
        )
        .unwrap();

        let s = with_xdg_home(dir.path(), || load_settings("settings-test-app")).unwrap();
        assert_eq!(s.engine.cache_ttl_secs, 5);
        assert_eq!(s.log.level, "info");
        assert_eq!(s.env.get("X"), Some(&"1".to_string()));
    }
}

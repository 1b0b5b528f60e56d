use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::paths;
use crate::slug::to_kebab;
use crate::Result;

/// Persisted naming defaults. A missing file means all-default values; the
/// file is only written by `monoforge config set`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForgeConfig {
    /// Prefix applied when the caller does not pass one explicitly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prefix: Option<String>,
}

/// Location of monoforge.json, honoring `MONOFORGE_CONFIG_DIR`.
pub fn config_path() -> Result<std::path::PathBuf> {
    paths::monoforge_json()
}

pub fn load() -> Result<ForgeConfig> {
    let path = paths::monoforge_json()?;

    if !path.exists() {
        return Ok(ForgeConfig::default());
    }

    let raw = fs::read_to_string(&path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(path.display().to_string())))?;

    serde_json::from_str(&raw).map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

pub fn save(config: &ForgeConfig) -> Result<()> {
    let dir = paths::monoforge()?;
    fs::create_dir_all(&dir)
        .map_err(|e| Error::internal_io(e.to_string(), Some(dir.display().to_string())))?;

    let path = paths::monoforge_json()?;
    let payload = serde_json::to_string_pretty(config)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize config".to_string())))?;

    fs::write(&path, payload)
        .map_err(|e| Error::internal_io(e.to_string(), Some(path.display().to_string())))
}

/// Store a new default prefix, normalizing it the same way the builder
/// would. Rejects values with no alphanumeric content.
pub fn set_default_prefix(value: &str) -> Result<ForgeConfig> {
    let normalized = to_kebab(value);
    if normalized.is_empty() {
        return Err(Error::config_invalid_value(
            "defaultPrefix",
            Some(value.to_string()),
            "Prefix must contain at least one letter or number",
        ));
    }

    let mut config = load()?;
    config.default_prefix = Some(normalized);
    save(&config)?;
    Ok(config)
}

pub fn unset_default_prefix() -> Result<ForgeConfig> {
    let mut config = load()?;
    config.default_prefix = None;
    save(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    // Tests mutate MONOFORGE_CONFIG_DIR; serialize them.
    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<T>(f: impl FnOnce() -> T) -> T {
        let _guard = env_lock().lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        env::set_var("MONOFORGE_CONFIG_DIR", dir.path());
        let result = f();
        env::remove_var("MONOFORGE_CONFIG_DIR");
        result
    }

    #[test]
    fn missing_file_loads_defaults() {
        with_temp_config_dir(|| {
            let config = load().unwrap();
            assert!(config.default_prefix.is_none());
        });
    }

    #[test]
    fn set_prefix_normalizes_and_round_trips() {
        with_temp_config_dir(|| {
            let saved = set_default_prefix("  My Team ").unwrap();
            assert_eq!(saved.default_prefix.as_deref(), Some("my-team"));

            let loaded = load().unwrap();
            assert_eq!(loaded.default_prefix.as_deref(), Some("my-team"));
        });
    }

    #[test]
    fn set_prefix_rejects_non_alphanumeric() {
        with_temp_config_dir(|| {
            let err = set_default_prefix("!!!").unwrap_err();
            assert_eq!(err.code, crate::ErrorCode::ConfigInvalidValue);
        });
    }

    #[test]
    fn unset_clears_prefix() {
        with_temp_config_dir(|| {
            set_default_prefix("infra").unwrap();
            let cleared = unset_default_prefix().unwrap();
            assert!(cleared.default_prefix.is_none());
            assert!(load().unwrap().default_prefix.is_none());
        });
    }

    #[test]
    fn corrupt_file_reports_config_invalid_json() {
        with_temp_config_dir(|| {
            let path = paths::monoforge_json().unwrap();
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "{not json").unwrap();

            let err = load().unwrap_err();
            assert_eq!(err.code, crate::ErrorCode::ConfigInvalidJson);
        });
    }
}

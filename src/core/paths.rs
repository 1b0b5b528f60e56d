use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Base monoforge config directory (~/.config/monoforge/ on Unix-like
/// systems). `MONOFORGE_CONFIG_DIR` overrides it; the override is
/// tilde/variable expanded.
pub fn monoforge() -> Result<PathBuf> {
    if let Ok(dir) = env::var("MONOFORGE_CONFIG_DIR") {
        if !dir.trim().is_empty() {
            let expanded = shellexpand::full(&dir)
                .map_err(|e| Error::internal_unexpected(e.to_string()))?;
            return Ok(PathBuf::from(expanded.as_ref()));
        }
    }

    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected("APPDATA environment variable not set on Windows")
        })?;
        Ok(PathBuf::from(appdata).join("monoforge"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected("HOME environment variable not set on Unix-like system")
        })?;
        Ok(PathBuf::from(home).join(".config").join("monoforge"))
    }
}

/// Global monoforge.json config file path
pub fn monoforge_json() -> Result<PathBuf> {
    Ok(monoforge()?.join("monoforge.json"))
}

//! Where diagwiz keeps its files
//!
//! ```text
//! <config dir>/
//!   config.yaml   user tag rules
//!   logs/         daily log files
//! ```
//!
//! `<config dir>` is resolved in this order:
//! 1. `$DIAGWIZ_CONFIG_DIR`
//! 2. `%APPDATA%\diagwiz` on Windows
//! 3. `$XDG_CONFIG_HOME/diagwiz`
//! 4. `~/.config/diagwiz`

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "diagwiz";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "DIAGWIZ_CONFIG_DIR";

/// Resolve the config directory from explicit inputs
fn resolve_config_dir(
    override_dir: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    if cfg!(target_os = "windows") {
        if let Some(appdata) = env::var_os("APPDATA") {
            return Some(PathBuf::from(appdata).join(APP_DIR));
        }
    }

    xdg_config_home
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| h.join(".config")))
        .map(|base| base.join(APP_DIR))
}

/// The diagwiz config directory, if one can be determined
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(
        env::var_os(CONFIG_DIR_ENV),
        env::var_os("XDG_CONFIG_HOME"),
        dirs::home_dir(),
    )
}

/// `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("config.yaml"))
}

/// `<config dir>/logs`
pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or("No config directory available")?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}

#[cfg(all(test, not(target_os = "windows")))]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = resolve_config_dir(
            Some("/srv/diagwiz".into()),
            Some("/xdg".into()),
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(dir, Some(PathBuf::from("/srv/diagwiz")));
    }

    #[test]
    fn test_xdg_before_home() {
        let dir = resolve_config_dir(None, Some("/xdg".into()), Some(PathBuf::from("/home/u")));
        assert_eq!(dir, Some(PathBuf::from("/xdg/diagwiz")));
    }

    #[test]
    fn test_home_fallback() {
        let dir = resolve_config_dir(None, Some("".into()), Some(PathBuf::from("/home/u")));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/diagwiz")));
    }

    #[test]
    fn test_nothing_available() {
        assert_eq!(resolve_config_dir(None, None, None), None);
    }
}

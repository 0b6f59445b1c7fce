//! User settings.
//!
//! Settings are loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/outlay/config.json`.  Every key is optional; a
//! minimal `{}` file is valid.
//!
//! # Example
//!
//! ```json
//! {
//!   "order": ["DP-2", "HDMI-1"],
//!   "primary": "DP-2",
//!   "mirror": false,
//!   "dpi": true,
//!   "laptop_prefix": "eDP",
//!   "info": false
//! }
//! ```

use crate::monitors::LAPTOP_PREFIX;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Layout preferences for one configuration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display names in priority order, matched case-insensitively.
    pub order: Vec<String>,
    /// Name of the display to make primary.  Empty picks the first
    /// activated display.
    pub primary: String,
    /// Mirror all active displays instead of placing them left to right.
    pub mirror: bool,
    /// Derive the DPI from the primary display's EDID.
    pub dpi: bool,
    /// Name prefix identifying the laptop panel.
    pub laptop_prefix: String,
    /// Only report the detected displays; do not arrange them.
    pub info: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            primary: String::new(),
            mirror: false,
            dpi: true,
            laptop_prefix: LAPTOP_PREFIX.into(),
            info: false,
        }
    }
}

impl Settings {
    /// `$XDG_CONFIG_HOME/outlay/config.json`, or under `~/.config` when
    /// `XDG_CONFIG_HOME` is unset.
    pub fn default_path() -> PathBuf {
        settings_path(std::env::var_os("XDG_CONFIG_HOME"), std::env::var_os("HOME"))
    }

    /// Load settings from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let settings: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(settings)
    }
}

fn settings_path(config_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let base = match (config_home, home) {
        (Some(dir), _) if !dir.is_empty() => PathBuf::from(dir),
        (_, Some(home)) => PathBuf::from(home).join(".config"),
        _ => std::env::temp_dir(),
    };
    base.join("outlay").join("config.json")
}

/// Error from loading or parsing a settings file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_settings() {
        let json = r#"{
            "order": ["DP-2", "HDMI-1"],
            "primary": "HDMI-1",
            "mirror": true,
            "dpi": false,
            "laptop_prefix": "LVDS"
        }"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.order, vec!["DP-2".to_string(), "HDMI-1".to_string()]);
        assert_eq!(s.primary, "HDMI-1");
        assert!(s.mirror);
        assert!(!s.dpi);
        assert_eq!(s.laptop_prefix, "LVDS");
        assert!(!s.info);
    }

    #[test]
    fn info_flag() {
        let s: Settings = serde_json::from_str(r#"{ "info": true }"#).unwrap();
        assert!(s.info);
        assert!(!Settings::default().info);
    }

    #[test]
    fn path_prefers_xdg_config_home() {
        let path = settings_path(Some("/cfg".into()), Some("/home/u".into()));
        assert_eq!(path, PathBuf::from("/cfg/outlay/config.json"));
    }

    #[test]
    fn path_falls_back_to_home() {
        let path = settings_path(None, Some("/home/u".into()));
        assert_eq!(path, PathBuf::from("/home/u/.config/outlay/config.json"));
        let path = settings_path(Some("".into()), Some("/home/u".into()));
        assert_eq!(path, PathBuf::from("/home/u/.config/outlay/config.json"));
    }

    #[test]
    fn path_without_home_uses_temp_dir() {
        let path = settings_path(None, None);
        assert_eq!(path, std::env::temp_dir().join("outlay/config.json"));
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert!(s.dpi);
        assert!(!s.mirror);
        assert_eq!(s.laptop_prefix, "eDP");
    }

    #[test]
    fn deserialize_partial() {
        let s: Settings = serde_json::from_str(r#"{ "mirror": true }"#).unwrap();
        assert!(s.mirror);
        assert!(s.order.is_empty());
        assert!(s.dpi);
    }

    #[test]
    fn unknown_keys_ignored() {
        let _s: Settings = serde_json::from_str(r#"{ "future": 1 }"#).unwrap();
    }

    #[test]
    fn load_missing_file_is_error() {
        let path = std::env::temp_dir().join("outlay-no-such-config.json");
        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("config error: failed to read"));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("outlay-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "primary": "DP-1" }"#).unwrap();
        let s = Settings::load(&path).unwrap();
        assert_eq!(s.primary, "DP-1");
        let _ = std::fs::remove_file(&path);
    }
}

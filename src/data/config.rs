//! Application Configuration
//!
//! Handles loading and saving application configuration.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub hotkey: HotkeyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            speech: SpeechConfig::default(),
            hotkey: HotkeyConfig::default(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        exe_dir.join("config.toml")
    }

    /// Load configuration from file or create default
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: AppConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = AppConfig::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

/// Speech configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Preferred reading language when no voice is pinned.
    #[serde(default = "default_language")]
    pub language: String,
    /// Voice pinned by name. Empty picks the first voice of `language`.
    #[serde(default)]
    pub voice: String,
}

fn default_language() -> String {
    "en-US".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            voice: String::new(),
        }
    }
}

/// Hotkey configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Canonical combo string. An empty string disables the hotkey.
    #[serde(default = "default_binding")]
    pub binding: String,
}

fn default_binding() -> String {
    "Ctrl+Shift+S".to_string()
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            binding: default_binding(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.speech.language, "en-US");
        assert_eq!(config.speech.voice, "");
        assert_eq!(config.hotkey.binding, "Ctrl+Shift+S");
    }

    #[test]
    fn test_missing_fields_fill_defaults() -> Result<()> {
        let config: AppConfig = toml::from_str("[speech]\nlanguage = \"fr-FR\"\n")?;
        assert_eq!(config.speech.language, "fr-FR");
        assert_eq!(config.speech.voice, "");
        assert_eq!(config.hotkey.binding, "Ctrl+Shift+S");
        Ok(())
    }

    #[test]
    fn test_explicit_empty_binding_disables_hotkey() -> Result<()> {
        let config: AppConfig = toml::from_str("[hotkey]\nbinding = \"\"\n")?;
        assert_eq!(config.hotkey.binding, "");
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let mut config = AppConfig::default();
        config.speech.language = "en-GB".to_string();
        config.speech.voice = "Hazel".to_string();
        config.hotkey.binding = "Ctrl+Alt+R".to_string();

        let serialized = toml::to_string_pretty(&config)?;
        let parsed: AppConfig = toml::from_str(&serialized)?;
        assert_eq!(parsed.speech.language, "en-GB");
        assert_eq!(parsed.speech.voice, "Hazel");
        assert_eq!(parsed.hotkey.binding, "Ctrl+Alt+R");
        Ok(())
    }
}

//! Data module for configuration management

mod config;

pub use config::{AppConfig, HotkeyConfig, SpeechConfig};

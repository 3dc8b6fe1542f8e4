//! Read the selected text aloud with the system text-to-speech voices.
//!
//! The crate splits into a pure core and host glue. The core is the voice
//! resolver ([`speech::resolve_voice`]) and the hotkey combo handling
//! ([`hotkey::normalize`], [`hotkey::matches`], [`hotkey::CaptureSession`]);
//! both are plain functions over snapshots, with no internal state or I/O.
//! The glue supplies what a desktop host needs around them: a TOML config
//! file, OS-level hotkey registration, a clipboard selection source, and
//! speech backends.

pub mod business;
pub mod data;
pub mod hotkey;
pub mod speech;

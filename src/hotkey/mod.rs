//! Hotkey module
//!
//! Canonical combo strings, binding capture, and OS-level registration.

mod capture;
mod combo;
mod registry;

pub use capture::{CaptureSession, CaptureState};
pub use combo::{matches, normalize, KeyEventSnapshot};
pub use registry::{combo_to_hotkey, HotkeyListener};

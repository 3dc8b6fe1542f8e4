//! Hotkey binding capture.
//!
//! When the user assigns a new binding, the settings surface feeds every
//! key-down event into a capture session. The session ignores presses of the
//! modifier keys themselves and completes on the first qualifying key,
//! emitting its canonical combo. There is no timeout; a session left waiting
//! simply stays in `Listening` until the host cancels it.

use crate::hotkey::combo::{normalize, KeyEventSnapshot};

/// Capture session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Listening,
}

/// One binding-capture interaction.
///
/// The host UI owns at most one active session at a time, typically by
/// disabling the "set hotkey" control while listening.
#[derive(Debug)]
pub struct CaptureSession {
    state: CaptureState,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Start listening for the next qualifying key-down.
    pub fn begin(&mut self) {
        self.state = CaptureState::Listening;
    }

    /// Abort the session without capturing anything.
    pub fn cancel(&mut self) {
        self.state = CaptureState::Idle;
    }

    /// Feed the next key-down event.
    ///
    /// Returns the captured canonical combo once a non-modifier key arrives,
    /// transitioning back to `Idle`. Pure-modifier presses keep the session
    /// listening; events outside a session are ignored entirely.
    pub fn feed(&mut self, event: &KeyEventSnapshot) -> Option<String> {
        if self.state != CaptureState::Listening {
            return None;
        }
        if event.is_modifier() {
            return None;
        }
        self.state = CaptureState::Idle;
        Some(normalize(event))
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

//! OS-level hotkey registration.
//!
//! Translates a canonical combo string into a `global-hotkey` registration so
//! the binding fires even while another application has focus.

use anyhow::{anyhow, Result};
use global_hotkey::{
    hotkey::{Code, HotKey, Modifiers},
    GlobalHotKeyEvent, GlobalHotKeyManager,
};

/// Convert a canonical combo string like `"Ctrl+Shift+S"` into a registrable
/// hotkey. Tokens must already be canonical; unknown tokens are errors rather
/// than silently dropped.
pub fn combo_to_hotkey(combo: &str) -> Result<HotKey> {
    let mut modifiers = Modifiers::empty();
    let mut key_code: Option<Code> = None;

    for token in combo.split('+') {
        match token {
            "Ctrl" => modifiers |= Modifiers::CONTROL,
            "Shift" => modifiers |= Modifiers::SHIFT,
            "Alt" => modifiers |= Modifiers::ALT,
            "Meta" => modifiers |= Modifiers::SUPER,
            _ => {
                if key_code.is_some() {
                    return Err(anyhow!("Combo {} has more than one key token", combo));
                }
                key_code = Some(key_token_code(token)?);
            }
        }
    }

    let code = key_code.ok_or_else(|| anyhow!("No key specified in combo: {}", combo))?;
    Ok(HotKey::new(Some(modifiers), code))
}

/// Map a canonical key token to its key code.
fn key_token_code(token: &str) -> Result<Code> {
    let code = match token {
        "A" => Code::KeyA,
        "B" => Code::KeyB,
        "C" => Code::KeyC,
        "D" => Code::KeyD,
        "E" => Code::KeyE,
        "F" => Code::KeyF,
        "G" => Code::KeyG,
        "H" => Code::KeyH,
        "I" => Code::KeyI,
        "J" => Code::KeyJ,
        "K" => Code::KeyK,
        "L" => Code::KeyL,
        "M" => Code::KeyM,
        "N" => Code::KeyN,
        "O" => Code::KeyO,
        "P" => Code::KeyP,
        "Q" => Code::KeyQ,
        "R" => Code::KeyR,
        "S" => Code::KeyS,
        "T" => Code::KeyT,
        "U" => Code::KeyU,
        "V" => Code::KeyV,
        "W" => Code::KeyW,
        "X" => Code::KeyX,
        "Y" => Code::KeyY,
        "Z" => Code::KeyZ,
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,
        " " | "Space" => Code::Space,
        "Enter" => Code::Enter,
        "Escape" => Code::Escape,
        "Tab" => Code::Tab,
        "F1" => Code::F1,
        "F2" => Code::F2,
        "F3" => Code::F3,
        "F4" => Code::F4,
        "F5" => Code::F5,
        "F6" => Code::F6,
        "F7" => Code::F7,
        "F8" => Code::F8,
        "F9" => Code::F9,
        "F10" => Code::F10,
        "F11" => Code::F11,
        "F12" => Code::F12,
        _ => return Err(anyhow!("Unknown key token: {}", token)),
    };

    Ok(code)
}

/// A registered global hotkey.
pub struct HotkeyListener {
    _manager: GlobalHotKeyManager,
}

impl HotkeyListener {
    /// Register `binding` with the OS. An empty binding means the hotkey is
    /// not configured; nothing is registered and `None` is returned.
    pub fn register(binding: &str) -> Result<Option<Self>> {
        if binding.is_empty() {
            tracing::info!("No hotkey binding configured");
            return Ok(None);
        }

        let hotkey = combo_to_hotkey(binding)?;
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| anyhow!("Failed to create hotkey manager: {}", e))?;
        manager
            .register(hotkey)
            .map_err(|e| anyhow!("Failed to register hotkey {}: {}", binding, e))?;
        tracing::info!("Registered global hotkey: {}", binding);

        Ok(Some(Self { _manager: manager }))
    }

    /// Block on the hotkey event stream, invoking `on_trigger` per press.
    /// Returns when the event channel closes.
    pub fn run<F>(&self, mut on_trigger: F)
    where
        F: FnMut(),
    {
        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(_event) = receiver.recv() {
            on_trigger();
        }
    }
}

//! Selection text source.
//!
//! The host environment decides what "the current selection" means. The
//! clipboard implementation covers the common desktop case: the user copies
//! (or a host integration copies for them) and triggers the reader.

use anyhow::{anyhow, Result};

/// Where the text to read comes from.
pub trait SelectionSource {
    /// Current selection text, `None` when there is nothing to read.
    fn current_text(&mut self) -> Result<Option<String>>;
}

/// Trim the raw selection; whitespace-only selections count as empty.
pub fn normalize_selection(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Clipboard-backed selection source.
pub struct ClipboardSelection {
    clipboard: arboard::Clipboard,
}

impl ClipboardSelection {
    pub fn new() -> Result<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| anyhow!("Failed to open clipboard: {}", e))?;
        Ok(Self { clipboard })
    }
}

impl SelectionSource for ClipboardSelection {
    fn current_text(&mut self) -> Result<Option<String>> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(normalize_selection(&text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(anyhow!("Failed to read clipboard: {}", e)),
        }
    }
}

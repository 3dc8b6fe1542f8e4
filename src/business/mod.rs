//! Business logic module
//!
//! Contains the read-selection-aloud control flow.

mod reader;
mod selection;

pub use reader::{SelectionReader, SpeakError};
pub use selection::{normalize_selection, ClipboardSelection, SelectionSource};

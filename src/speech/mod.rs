//! Speech module
//!
//! Voice catalog handling, voice selection, and the backends that do the
//! actual speaking.

mod catalog;
mod engine;

pub use catalog::{available_languages, resolve_voice, VoiceDescriptor};
pub use engine::{NoopSpeech, SpeechBackend};

#[cfg(all(feature = "speech", not(target_os = "linux")))]
pub use engine::SystemSpeech;

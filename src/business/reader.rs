//! Selection reader.
//!
//! Ties the voice catalog, the user's speech settings, and a speech backend
//! together: refresh the catalog when the platform says it changed, resolve
//! the voice per request, hand the text to the engine.

use anyhow::Result;
use thiserror::Error;

use crate::data::SpeechConfig;
use crate::speech::{available_languages, resolve_voice, SpeechBackend, VoiceDescriptor};

/// Why a read-aloud request produced no speech.
#[derive(Debug, Error)]
pub enum SpeakError {
    /// Nothing in the catalog matches the configured language/voice. Reported
    /// to the user; the speech engine is not invoked.
    #[error("no installed voice matches language {lang:?} (requested voice {voice:?})")]
    VoiceNotFound { lang: String, voice: String },
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Controller for the read-selection-aloud flow.
pub struct SelectionReader<B> {
    backend: B,
    settings: SpeechConfig,
    catalog: Vec<VoiceDescriptor>,
}

impl<B: SpeechBackend> SelectionReader<B> {
    /// The catalog starts empty; it is filled on the first `speak` or by an
    /// explicit `refresh_catalog` call.
    pub fn new(backend: B, settings: SpeechConfig) -> Self {
        Self {
            backend,
            settings,
            catalog: Vec::new(),
        }
    }

    /// Re-query the backend for the installed voices. The platform may signal
    /// catalog changes at any time; callers re-invoke this then. Returns the
    /// number of voices seen.
    pub fn refresh_catalog(&mut self) -> Result<usize> {
        self.catalog = self.backend.voices()?;
        tracing::debug!("Voice catalog refreshed: {} voices", self.catalog.len());
        Ok(self.catalog.len())
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> &[VoiceDescriptor] {
        &self.catalog
    }

    /// Languages offered for the settings UI, sorted and deduplicated.
    pub fn languages(&self) -> Vec<String> {
        available_languages(&self.catalog)
    }

    /// Replace the speech settings, e.g. after the user saved new ones.
    pub fn update_settings(&mut self, settings: SpeechConfig) {
        self.settings = settings;
    }

    /// Resolve a voice and speak `text`.
    ///
    /// Platforms can report an empty catalog right after startup, so an empty
    /// snapshot is re-queried once before resolution. The language passed to
    /// the backend is the *requested* one even when a voice pinned by name
    /// carries a different tag.
    pub fn speak(&mut self, text: &str) -> Result<(), SpeakError> {
        if text.is_empty() {
            return Ok(());
        }

        if self.catalog.is_empty() {
            self.refresh_catalog()?;
        }

        let voice = resolve_voice(&self.catalog, &self.settings.language, &self.settings.voice)
            .cloned()
            .ok_or_else(|| SpeakError::VoiceNotFound {
                lang: self.settings.language.clone(),
                voice: self.settings.voice.clone(),
            })?;

        self.backend.speak(text, &voice, &self.settings.language)?;
        Ok(())
    }
}

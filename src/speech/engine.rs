//! Speech backends.
//!
//! A backend answers two questions: which voices exist right now, and how to
//! speak a piece of text with one of them. The system backend wraps the
//! platform engine through the `tts` crate; the no-op backend keeps the rest
//! of the program functional where no engine is compiled in.

use anyhow::Result;

use crate::speech::VoiceDescriptor;

/// Platform speech engine boundary.
pub trait SpeechBackend {
    /// Snapshot of the currently installed voices, in platform enumeration
    /// order. May be empty while the platform is still enumerating; callers
    /// re-query once voices show up.
    fn voices(&mut self) -> Result<Vec<VoiceDescriptor>>;

    /// Speak `text` with `voice`, fire-and-forget. `lang` is the language the
    /// caller asked for, which can differ from the voice's own tag when the
    /// voice was chosen by name.
    fn speak(&mut self, text: &str, voice: &VoiceDescriptor, lang: &str) -> Result<()>;
}

/// Backend that only logs what it would have spoken.
///
/// Stands in on builds without the `speech` feature and on Linux, and keeps
/// hotkey and settings behavior exercisable everywhere.
pub struct NoopSpeech;

impl SpeechBackend for NoopSpeech {
    fn voices(&mut self) -> Result<Vec<VoiceDescriptor>> {
        Ok(Vec::new())
    }

    fn speak(&mut self, text: &str, voice: &VoiceDescriptor, lang: &str) -> Result<()> {
        tracing::info!(
            "no speech engine compiled in; would speak {} chars with voice {} ({})",
            text.chars().count(),
            voice.name,
            lang
        );
        Ok(())
    }
}

#[cfg(all(feature = "speech", not(target_os = "linux")))]
pub use system::SystemSpeech;

#[cfg(all(feature = "speech", not(target_os = "linux")))]
mod system {
    use anyhow::{anyhow, Result};

    use crate::speech::VoiceDescriptor;

    use super::SpeechBackend;

    /// Platform text-to-speech via the `tts` crate.
    pub struct SystemSpeech {
        tts: tts::Tts,
    }

    impl SystemSpeech {
        pub fn new() -> Result<Self> {
            let tts = tts::Tts::default()
                .map_err(|e| anyhow!("Failed to initialize speech engine: {}", e))?;
            tracing::debug!("Initialized system speech engine");
            Ok(Self { tts })
        }
    }

    impl SpeechBackend for SystemSpeech {
        fn voices(&mut self) -> Result<Vec<VoiceDescriptor>> {
            let current_id = self
                .tts
                .voice()
                .map_err(|e| anyhow!("Failed to query current voice: {}", e))?
                .map(|v| v.id());

            let voices = self
                .tts
                .voices()
                .map_err(|e| anyhow!("Failed to enumerate voices: {}", e))?;

            Ok(voices
                .iter()
                .map(|v| VoiceDescriptor {
                    name: v.name(),
                    lang: v.language().to_string(),
                    is_default: current_id.as_deref() == Some(v.id().as_str()),
                })
                .collect())
        }

        fn speak(&mut self, text: &str, voice: &VoiceDescriptor, lang: &str) -> Result<()> {
            let voices = self
                .tts
                .voices()
                .map_err(|e| anyhow!("Failed to enumerate voices: {}", e))?;

            match voices.iter().find(|v| v.name() == voice.name) {
                Some(platform_voice) => {
                    self.tts
                        .set_voice(platform_voice)
                        .map_err(|e| anyhow!("Failed to select voice {}: {}", voice.name, e))?;
                }
                None => {
                    // Voice disappeared between the catalog snapshot and the
                    // speak call; the engine default still reads the text.
                    tracing::warn!("Voice {} no longer available, using engine default", voice.name);
                }
            }

            tracing::debug!("Speaking {} chars as {} ({})", text.chars().count(), voice.name, lang);
            let interrupt = true;
            self.tts
                .speak(text, interrupt)
                .map_err(|e| anyhow!("Speech engine rejected utterance: {}", e))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::VoiceDescriptor;

    #[test]
    fn test_noop_backend_has_no_voices_and_never_fails() {
        let mut backend = NoopSpeech;
        assert!(backend.voices().unwrap().is_empty());
        let voice = VoiceDescriptor::new("Zira", "en-US");
        backend.speak("hello", &voice, "en-US").unwrap();
    }
}

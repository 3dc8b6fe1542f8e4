//! Binary host: load config, register the global hotkey, and read the
//! current selection aloud on every trigger.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use speak_selection::business::{ClipboardSelection, SelectionReader, SelectionSource, SpeakError};
use speak_selection::data::AppConfig;
use speak_selection::hotkey::HotkeyListener;
use speak_selection::speech::SpeechBackend;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load_or_default()?;
    tracing::info!("Loaded configuration from {:?}", AppConfig::config_path());

    let backend = build_backend()?;
    let mut reader = SelectionReader::new(backend, config.speech.clone());
    match reader.refresh_catalog() {
        Ok(count) => {
            tracing::info!("{} voices available: {}", count, reader.languages().join(", "));
        }
        Err(e) => {
            // The platform may still be enumerating; the reader re-queries on
            // the first speak.
            tracing::warn!("Voice enumeration failed: {}", e);
        }
    }

    let Some(listener) = HotkeyListener::register(&config.hotkey.binding)? else {
        tracing::warn!(
            "Hotkey disabled; set [hotkey] binding in {:?} and restart",
            AppConfig::config_path()
        );
        return Ok(());
    };

    let mut selection = ClipboardSelection::new()?;
    tracing::info!(
        "Press {} to read the copied selection aloud",
        config.hotkey.binding
    );

    listener.run(|| {
        if let Err(e) = read_selection(&mut reader, &mut selection) {
            tracing::error!("Read-aloud failed: {}", e);
        }
    });

    Ok(())
}

/// One hotkey trigger: fetch the selection and speak it. A missing selection
/// or an unmatched voice is a warning, not a failure.
fn read_selection<B: SpeechBackend>(
    reader: &mut SelectionReader<B>,
    selection: &mut impl SelectionSource,
) -> Result<()> {
    let Some(text) = selection.current_text()? else {
        tracing::warn!("Nothing selected to read");
        return Ok(());
    };

    match reader.speak(&text) {
        Ok(()) => Ok(()),
        Err(SpeakError::VoiceNotFound { lang, voice }) => {
            tracing::warn!(
                "No installed voice matches language {} (requested voice {:?})",
                lang,
                voice
            );
            Ok(())
        }
        Err(SpeakError::Backend(e)) => Err(e),
    }
}

#[cfg(all(feature = "speech", not(target_os = "linux")))]
fn build_backend() -> Result<speak_selection::speech::SystemSpeech> {
    speak_selection::speech::SystemSpeech::new()
}

#[cfg(any(target_os = "linux", not(feature = "speech")))]
fn build_backend() -> Result<speak_selection::speech::NoopSpeech> {
    Ok(speak_selection::speech::NoopSpeech)
}

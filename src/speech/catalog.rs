//! Voice catalog and voice selection.
//!
//! The platform enumerates its installed voices into an ordered catalog;
//! selection picks one entry from that snapshot given the user's language
//! and voice preferences.

use std::collections::BTreeSet;

/// A synthetic voice installed on the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceDescriptor {
    /// Platform voice name, unique within one catalog snapshot.
    pub name: String,
    /// BCP-47-like language tag, e.g. "en-US".
    pub lang: String,
    /// Whether the platform reports this as its current default voice.
    pub is_default: bool,
}

impl VoiceDescriptor {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            is_default: false,
        }
    }
}

/// Pick the voice to use for a request.
///
/// A non-empty `voice_name` is an explicit user choice: if the catalog has a
/// voice with exactly that name, it wins even when its language tag differs
/// from `lang`. Otherwise the first catalog entry with exactly matching
/// language is used. Catalog order decides ties at both steps. Returns `None`
/// when nothing fits; the caller reports that and skips the speech call.
pub fn resolve_voice<'a>(
    catalog: &'a [VoiceDescriptor],
    lang: &str,
    voice_name: &str,
) -> Option<&'a VoiceDescriptor> {
    if !voice_name.is_empty() {
        if let Some(voice) = catalog.iter().find(|v| v.name == voice_name) {
            return Some(voice);
        }
    }
    catalog.iter().find(|v| v.lang == lang)
}

/// Unique language tags in the catalog, lexicographically sorted.
///
/// Feeds the language picker in settings UIs.
pub fn available_languages(catalog: &[VoiceDescriptor]) -> Vec<String> {
    let langs: BTreeSet<&str> = catalog.iter().map(|v| v.lang.as_str()).collect();
    langs.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<VoiceDescriptor> {
        vec![
            VoiceDescriptor {
                name: "Zira".to_string(),
                lang: "en-US".to_string(),
                is_default: true,
            },
            VoiceDescriptor::new("Hazel", "en-GB"),
        ]
    }

    #[test]
    fn test_resolve_by_language() {
        let catalog = sample_catalog();
        let voice = resolve_voice(&catalog, "en-GB", "").unwrap();
        assert_eq!(voice.name, "Hazel");
        assert_eq!(voice.lang, "en-GB");
    }

    #[test]
    fn test_explicit_name_overrides_language() {
        let catalog = sample_catalog();
        let voice = resolve_voice(&catalog, "fr-FR", "Zira").unwrap();
        assert_eq!(voice.name, "Zira");
        assert_eq!(voice.lang, "en-US");
    }

    #[test]
    fn test_no_match_yields_none() {
        let catalog = sample_catalog();
        assert_eq!(resolve_voice(&catalog, "de-DE", ""), None);
    }

    #[test]
    fn test_unknown_name_falls_back_to_language() {
        let catalog = sample_catalog();
        let voice = resolve_voice(&catalog, "en-GB", "Cortana").unwrap();
        assert_eq!(voice.name, "Hazel");
    }

    #[test]
    fn test_every_entry_resolves_to_itself() {
        let catalog = sample_catalog();
        for voice in &catalog {
            assert_eq!(resolve_voice(&catalog, &voice.lang, &voice.name), Some(voice));
        }
    }

    #[test]
    fn test_first_match_wins_in_catalog_order() {
        let catalog = vec![
            VoiceDescriptor::new("David", "en-US"),
            VoiceDescriptor::new("Zira", "en-US"),
        ];
        assert_eq!(resolve_voice(&catalog, "en-US", "").unwrap().name, "David");
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(resolve_voice(&[], "en-US", "Zira"), None);
        assert!(available_languages(&[]).is_empty());
    }

    #[test]
    fn test_available_languages_sorted_and_unique() {
        let catalog = vec![
            VoiceDescriptor::new("Zira", "en-US"),
            VoiceDescriptor::new("Hortense", "fr-FR"),
            VoiceDescriptor::new("David", "en-US"),
            VoiceDescriptor::new("Stefan", "de-DE"),
        ];
        assert_eq!(available_languages(&catalog), ["de-DE", "en-US", "fr-FR"]);
    }
}

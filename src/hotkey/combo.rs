//! Canonical hotkey combo strings.
//!
//! A combo string lists held modifiers in fixed order (Ctrl, Shift, Alt,
//! Meta), then the key token, joined with `+`, e.g. `"Ctrl+Shift+S"`. Two
//! presses are the same combo exactly when they normalize to the same string,
//! regardless of original casing or modifier press order.

/// Modifier flags and key identifier of a single key-down event, as the host
/// UI delivers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEventSnapshot {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
    /// Raw key identifier: a single character for printable keys, a named
    /// token like "Escape" or "F5" otherwise.
    pub key: String,
}

impl KeyEventSnapshot {
    pub fn new(ctrl: bool, shift: bool, alt: bool, meta: bool, key: impl Into<String>) -> Self {
        Self {
            ctrl,
            shift,
            alt,
            meta,
            key: key.into(),
        }
    }

    /// True when the pressed key is itself a modifier. Such events carry no
    /// combo of their own; binding capture skips them.
    pub fn is_modifier(&self) -> bool {
        matches!(self.key.as_str(), "Control" | "Shift" | "Alt" | "Meta")
    }
}

/// Build the canonical combo string for a key-down event.
///
/// Single-character keys are upper-cased so that `s` and `S` collapse into
/// the same combo; named keys pass through verbatim.
pub fn normalize(event: &KeyEventSnapshot) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(5);
    if event.ctrl {
        tokens.push("Ctrl".to_string());
    }
    if event.shift {
        tokens.push("Shift".to_string());
    }
    if event.alt {
        tokens.push("Alt".to_string());
    }
    if event.meta {
        tokens.push("Meta".to_string());
    }

    if event.key.chars().count() == 1 {
        tokens.push(event.key.to_uppercase());
    } else {
        tokens.push(event.key.clone());
    }

    tokens.join("+")
}

/// Whether a normalized press matches the stored binding.
///
/// Comparison is exact; `normalize` already fixed casing and modifier order.
/// An empty binding means "not configured" and matches nothing.
pub fn matches(pressed: &str, binding: &str) -> bool {
    !binding.is_empty() && pressed == binding
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_orders_modifiers_and_uppercases_key() {
        let event = KeyEventSnapshot::new(true, true, false, false, "s");
        assert_eq!(normalize(&event), "Ctrl+Shift+S");
    }

    #[test]
    fn test_normalize_named_key_passes_through() {
        let event = KeyEventSnapshot::new(false, false, false, false, "Escape");
        assert_eq!(normalize(&event), "Escape");
    }

    #[test]
    fn test_normalize_all_modifiers() {
        let event = KeyEventSnapshot::new(true, true, true, true, "F5");
        assert_eq!(normalize(&event), "Ctrl+Shift+Alt+Meta+F5");
    }

    #[test]
    fn test_normalize_is_case_insensitive_on_single_chars() {
        let lower = KeyEventSnapshot::new(true, false, false, false, "a");
        let upper = KeyEventSnapshot::new(true, false, false, false, "A");
        assert_eq!(normalize(&lower), normalize(&upper));
    }

    #[test]
    fn test_normalize_idempotent_on_canonical_key_token() {
        // Re-normalizing a canonical decomposition reproduces the string.
        let event = KeyEventSnapshot::new(true, true, false, false, "S");
        let combo = normalize(&event);
        let again = KeyEventSnapshot::new(true, true, false, false, "S");
        assert_eq!(normalize(&again), combo);
    }

    #[test]
    fn test_matches_exact_equality_only() {
        let event = KeyEventSnapshot::new(true, true, false, false, "s");
        let pressed = normalize(&event);
        assert!(matches(&pressed, "Ctrl+Shift+S"));
        assert!(!matches(&pressed, "Ctrl+Shift+A"));
        assert!(!matches(&pressed, "ctrl+shift+s"));
        assert!(!matches(&pressed, "Shift+Ctrl+S"));
    }

    #[test]
    fn test_empty_binding_never_matches() {
        assert!(!matches("Ctrl+Shift+S", ""));
        assert!(!matches("", ""));
        assert!(!matches("Escape", ""));
    }

    #[test]
    fn test_modifier_detection() {
        assert!(KeyEventSnapshot::new(false, false, false, false, "Control").is_modifier());
        assert!(KeyEventSnapshot::new(true, false, false, false, "Shift").is_modifier());
        assert!(KeyEventSnapshot::new(false, false, true, false, "Alt").is_modifier());
        assert!(KeyEventSnapshot::new(false, false, false, true, "Meta").is_modifier());
        assert!(!KeyEventSnapshot::new(true, false, false, false, "a").is_modifier());
        assert!(!KeyEventSnapshot::new(false, false, false, false, "Escape").is_modifier());
    }
}

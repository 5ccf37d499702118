//! Sensitive Value Masking
//!
//! Dashboard amounts and other sensitive blocks can be hidden behind a fixed
//! placeholder and restored on demand. A [`MaskedValue`] either carries its
//! original value explicitly (set once when the value is known up front) or
//! caches whatever text was displayed the first time it is hidden, so the
//! restore path never loses data no matter how the value was populated.

/// Placeholder shown in place of a hidden sensitive value.
pub const MASK_PLACEHOLDER: &str = "••••";

/// A display value that can be masked and restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedValue {
    /// Text currently presented to the user.
    text: String,
    /// Original value when known at construction time.
    source: Option<String>,
    /// Lazily captured original for values only known by their display text.
    cached: Option<String>,
}

impl MaskedValue {
    /// Create a value whose original is known up front.
    ///
    /// Restoring always falls back to this original, even if the displayed
    /// text was overwritten in the meantime.
    pub fn with_source<S: Into<String>>(value: S) -> Self {
        let value = value.into();
        Self {
            text: value.clone(),
            source: Some(value),
            cached: None,
        }
    }

    /// Create a value known only by its current display text.
    ///
    /// The original is captured the first time the value is hidden.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            source: None,
            cached: None,
        }
    }

    /// Show or hide the value.
    ///
    /// Hiding an already-hidden value is a no-op: the cache is only written
    /// on the first transition, so repeated hide calls cannot capture the
    /// placeholder as the "original".
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            if let Some(original) = self.source.as_ref().or(self.cached.as_ref()) {
                self.text = original.clone();
            }
        } else {
            if self.source.is_none() && self.cached.is_none() {
                self.cached = Some(self.text.clone());
            }
            self.text = MASK_PLACEHOLDER.to_string();
        }
    }

    /// Replace the underlying value, leaving visibility untouched.
    pub fn replace<S: Into<String>>(&mut self, value: S) {
        let value = value.into();
        let was_masked = self.is_masked();
        self.source = Some(value.clone());
        self.cached = None;
        self.text = if was_masked {
            MASK_PLACEHOLDER.to_string()
        } else {
            value
        };
    }

    /// The text to present, which is the placeholder while hidden.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the value is currently hidden behind the placeholder.
    pub fn is_masked(&self) -> bool {
        self.text == MASK_PLACEHOLDER && (self.source.is_some() || self.cached.is_some())
    }

    /// The original value, if known.
    pub fn original(&self) -> Option<&str> {
        self.source.as_deref().or(self.cached.as_deref())
    }
}

/// Apply a visibility change to a whole set of sensitive values.
pub fn mask_all(values: &mut [MaskedValue], visible: bool) {
    for value in values.iter_mut() {
        value.set_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_and_restore_with_source() {
        let mut value = MaskedValue::with_source("1,200.00");
        assert_eq!(value.text(), "1,200.00");

        value.set_visible(false);
        assert_eq!(value.text(), MASK_PLACEHOLDER);
        assert!(value.is_masked());

        value.set_visible(true);
        assert_eq!(value.text(), "1,200.00");
        assert!(!value.is_masked());
    }

    #[test]
    fn test_hide_caches_display_text() {
        let mut value = MaskedValue::from_text("4111 1111 1111 1111");
        value.set_visible(false);
        value.set_visible(true);
        assert_eq!(value.text(), "4111 1111 1111 1111");
    }

    #[test]
    fn test_repeated_hide_is_idempotent() {
        let mut value = MaskedValue::from_text("secret");
        value.set_visible(false);
        value.set_visible(false);
        value.set_visible(true);
        // The second hide must not cache the placeholder.
        assert_eq!(value.text(), "secret");
    }

    #[test]
    fn test_show_before_hide_is_noop() {
        let mut value = MaskedValue::from_text("visible");
        value.set_visible(true);
        assert_eq!(value.text(), "visible");
    }

    #[test]
    fn test_replace_while_masked_keeps_mask() {
        let mut value = MaskedValue::with_source("100.00");
        value.set_visible(false);
        value.replace("250.00");
        assert!(value.is_masked());
        value.set_visible(true);
        assert_eq!(value.text(), "250.00");
    }

    #[test]
    fn test_replace_while_visible_updates_text() {
        let mut value = MaskedValue::with_source("100.00");
        value.replace("250.00");
        assert_eq!(value.text(), "250.00");
    }

    #[test]
    fn test_mask_all_round_trip() {
        let mut values = vec![
            MaskedValue::with_source("15,000.00"),
            MaskedValue::from_text("8,000.00"),
        ];
        mask_all(&mut values, false);
        assert!(values.iter().all(|v| v.is_masked()));

        mask_all(&mut values, true);
        assert_eq!(values[0].text(), "15,000.00");
        assert_eq!(values[1].text(), "8,000.00");
    }
}

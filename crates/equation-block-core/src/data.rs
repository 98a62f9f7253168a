//! Persisted block data.

use serde::{Deserialize, Serialize};

/// The single persisted record of an equation block.
///
/// `text` holds the raw expression source. It may carry a small allowlist of
/// inline markup (`<a>`, `<b>`, `<i>`, `<br>`, `<svg>`) that the host's
/// sanitizer lets through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationData {
    #[serde(default)]
    pub text: String,
}

impl EquationData {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whether this record may be persisted.
    ///
    /// The only invariant on saved data: the expression must not be blank.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

impl From<&str> for EquationData {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for EquationData {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// Host-facing validation hook: false iff the trimmed text is empty.
pub fn validate(saved: &EquationData) -> bool {
    saved.is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_invalid() {
        assert!(!validate(&EquationData::new("")));
        assert!(!validate(&EquationData::new("  ")));
        assert!(!validate(&EquationData::new("\n\t ")));
    }

    #[test]
    fn expression_is_valid() {
        assert!(validate(&EquationData::new("x^2")));
        assert!(validate(&EquationData::new("  E=mc^2 ")));
    }

    #[test]
    fn missing_text_field_deserializes_empty() {
        let data: EquationData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, EquationData::default());
    }

    #[test]
    fn serializes_as_text_record() {
        let json = serde_json::to_string(&EquationData::new("a+b")).unwrap();
        assert_eq!(json, r#"{"text":"a+b"}"#);
    }
}

//! Static tool metadata read by the host editor.
//!
//! None of this is behavioral: the host reads these declarations once when the
//! tool is registered and uses them to build its toolbox, route paste events,
//! convert between block types and sanitize saved text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const TOOLBOX_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="17" height="15" viewBox="0 0 17 15"><path d="M13.5 1h-11l5.5 6.5-5.5 6.5h11" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Entry shown in the host's block toolbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolbox {
    pub title: String,
    pub icon: String,
}

impl Default for Toolbox {
    fn default() -> Self {
        Self {
            title: "Math".to_string(),
            icon: TOOLBOX_ICON.to_string(),
        }
    }
}

/// Pasted elements the block wants to handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteConfig {
    pub tags: Vec<String>,
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            tags: vec!["P".to_string()],
        }
    }
}

/// Field used when converting to and from other block types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub export: String,
    pub import: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            export: "text".to_string(),
            import: "text".to_string(),
        }
    }
}

/// Sanitizer rules per saved field: tag name → keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeConfig {
    pub text: BTreeMap<String, bool>,
}

impl SanitizeConfig {
    /// Whether `tag` survives sanitization of the `text` field.
    pub fn allows(&self, tag: &str) -> bool {
        self.text
            .get(&tag.to_ascii_lowercase())
            .copied()
            .unwrap_or(false)
    }
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        let text = ["br", "svg"]
            .into_iter()
            .map(|tag| (tag.to_string(), true))
            .collect();
        Self { text }
    }
}

/// The block handles read-only hosts: no input surface, no handlers.
pub const IS_READ_ONLY_SUPPORTED: bool = true;

pub fn toolbox() -> Toolbox {
    Toolbox::default()
}

pub fn paste_config() -> PasteConfig {
    PasteConfig::default()
}

pub fn conversion_config() -> ConversionConfig {
    ConversionConfig::default()
}

pub fn sanitize_config() -> SanitizeConfig {
    SanitizeConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbox_has_title_and_svg_icon() {
        let toolbox = toolbox();
        assert_eq!(toolbox.title, "Math");
        assert!(toolbox.icon.starts_with("<svg"));
        assert!(toolbox.icon.ends_with("</svg>"));
    }

    #[test]
    fn paste_config_shape() {
        insta::assert_json_snapshot!(paste_config(), @r#"
        {
          "tags": [
            "P"
          ]
        }
        "#);
    }

    #[test]
    fn conversion_config_shape() {
        insta::assert_json_snapshot!(conversion_config(), @r#"
        {
          "export": "text",
          "import": "text"
        }
        "#);
    }

    #[test]
    fn sanitize_config_shape() {
        insta::assert_json_snapshot!(sanitize_config(), @r#"
        {
          "text": {
            "br": true,
            "svg": true
          }
        }
        "#);
    }

    #[test]
    fn sanitize_allowlist() {
        let sanitize = sanitize_config();
        assert!(sanitize.allows("br"));
        assert!(sanitize.allows("SVG"));
        assert!(!sanitize.allows("script"));
        assert!(!sanitize.allows("div"));
    }
}

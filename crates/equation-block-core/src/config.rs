//! Construction parameters supplied by the host editor.
//!
//! The host hands every block instance its stored data, the tool config the
//! page author set up, a handful of style class names, and a read-only flag.
//! Only the pieces the block actually uses are modelled here.

use serde::{Deserialize, Serialize};

use crate::data::EquationData;

/// Prefix shown before the stringified error when an expression fails to render.
pub const DEFAULT_ERROR_PREFIX: &str = "Invalid Equation. ";

/// Tool configuration, as set by the page author when registering the block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockConfig {
    /// Placeholder for the raw-input surface. Empty when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Localized prefix for render failure messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_prefix: Option<String>,
}

impl BlockConfig {
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("")
    }

    pub fn error_prefix(&self) -> &str {
        self.error_prefix.as_deref().unwrap_or(DEFAULT_ERROR_PREFIX)
    }
}

/// CSS class names borrowed from the host's style helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleNames {
    pub block: String,
    pub input: String,
}

impl Default for StyleNames {
    fn default() -> Self {
        Self {
            block: "cdx-block".to_string(),
            input: "cdx-input".to_string(),
        }
    }
}

/// Everything a block is constructed from.
#[derive(Debug, Clone, Default)]
pub struct BlockParams {
    /// Stored data, or `None` for a freshly inserted block.
    pub data: Option<EquationData>,
    pub config: BlockConfig,
    pub styles: StyleNames,
    pub read_only: bool,
}

impl BlockParams {
    pub fn new(data: impl Into<EquationData>) -> Self {
        Self {
            data: Some(data.into()),
            ..Default::default()
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_config(mut self, config: BlockConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_styles(mut self, styles: StyleNames) -> Self {
        self.styles = styles;
        self
    }
}

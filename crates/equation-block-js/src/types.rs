//! Types exposed to JavaScript via wasm-bindgen.

use equation_block_browser::{BlockConfig, EquationData, StyleNames};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

/// Saved block data, as the host stores it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsEquationData {
    #[serde(default)]
    pub text: String,
}

impl From<EquationData> for JsEquationData {
    fn from(data: EquationData) -> Self {
        Self { text: data.text }
    }
}

impl From<JsEquationData> for EquationData {
    fn from(data: JsEquationData) -> Self {
        EquationData::new(data.text)
    }
}

/// Tool config set by the page author when registering the tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsToolConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_prefix: Option<String>,
}

impl From<JsToolConfig> for BlockConfig {
    fn from(config: JsToolConfig) -> Self {
        BlockConfig {
            placeholder: config.placeholder,
            error_prefix: config.error_prefix,
        }
    }
}

/// The subset of the host's `api.styles` the block uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsStyles {
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub input: Option<String>,
}

impl From<JsStyles> for StyleNames {
    fn from(styles: JsStyles) -> Self {
        let defaults = StyleNames::default();
        StyleNames {
            block: styles.block.unwrap_or(defaults.block),
            input: styles.input.unwrap_or(defaults.input),
        }
    }
}

/// Serialize to a plain JS value: maps become objects, not `Map`s.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

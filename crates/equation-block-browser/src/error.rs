use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the DOM.
#[derive(Debug, Clone, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("failed to create <{tag}>: {message}")]
    CreateElement { tag: &'static str, message: String },

    #[error("created element is not a {0}")]
    WrongElement(&'static str),

    #[error("DOM operation failed: {0}")]
    Js(String),
}

impl DomError {
    pub(crate) fn js(err: JsValue) -> Self {
        DomError::Js(format!("{:?}", err))
    }
}

//! KaTeX-backed typesetting engine.
//!
//! Uses the page's global `katex` object. When the page didn't load KaTeX the
//! tool falls back to the pulldown-latex MathML engine from core.

use equation_block_browser::{
    MathmlEngine, PARSE_ERROR_MARKER, RenderError, RenderOptions, TypesettingEngine,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::types::to_js;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = katex, js_name = renderToString)]
    fn katex_render_to_string(source: &str, options: &JsValue) -> Result<String, JsValue>;
}

/// Whether `globalThis.katex` exists.
pub fn katex_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("katex")).unwrap_or(false)
}

/// Engine calling `katex.renderToString`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KatexEngine;

impl TypesettingEngine for KatexEngine {
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, RenderError> {
        let options = to_js(options).map_err(|_| {
            RenderError::Engine("failed to convert render options".to_string())
        })?;
        katex_render_to_string(source, &options).map_err(|err| classify(describe(&err)))
    }
}

/// `String(err)` for whatever the engine threw.
fn describe(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if err.is_null() || err.is_undefined() {
        return "unknown error".to_string();
    }
    err.unchecked_ref::<js_sys::Object>().to_string().into()
}

/// KaTeX parse errors stringify as `ParseError: KaTeX parse error: ...`.
/// Only a leading marker classifies the error; anything else is kept verbatim.
fn classify(message: String) -> RenderError {
    match message
        .strip_prefix(PARSE_ERROR_MARKER)
        .and_then(|rest| rest.strip_prefix(": "))
    {
        Some(detail) => RenderError::Parse(detail.to_string()),
        None => RenderError::Engine(message),
    }
}

/// The engine a tool instance renders with.
#[derive(Debug, Clone, Copy)]
pub enum ToolEngine {
    Katex(KatexEngine),
    Mathml(MathmlEngine),
}

impl ToolEngine {
    /// KaTeX when the page loaded it, MathML otherwise.
    pub fn detect() -> Self {
        if katex_available() {
            ToolEngine::Katex(KatexEngine)
        } else {
            tracing::info!("katex not found on page, rendering MathML");
            ToolEngine::Mathml(MathmlEngine)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolEngine::Katex(_) => "katex",
            ToolEngine::Mathml(_) => "mathml",
        }
    }
}

impl TypesettingEngine for ToolEngine {
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, RenderError> {
        match self {
            ToolEngine::Katex(engine) => engine.render(source, options),
            ToolEngine::Mathml(engine) => engine.render(source, options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn katex_parse_errors_are_classified() {
        let err = classify(
            "ParseError: KaTeX parse error: Expected '}', got 'EOF' at end of input: \\frac{a"
                .to_string(),
        );
        assert_eq!(
            err,
            RenderError::Parse(
                "KaTeX parse error: Expected '}', got 'EOF' at end of input: \\frac{a".to_string()
            )
        );
        // display keeps exactly one marker
        assert!(err.to_string().starts_with("ParseError: KaTeX parse error"));
    }

    #[test]
    fn other_errors_stay_engine_errors() {
        let err = classify("ReferenceError: katex is not defined".to_string());
        assert_eq!(
            err,
            RenderError::Engine("ReferenceError: katex is not defined".to_string())
        );
    }

    #[test]
    fn marker_outside_the_prefix_is_not_doubled() {
        let message = "Error: wrapped ParseError: unexpected token".to_string();
        let err = classify(message.clone());
        assert_eq!(err, RenderError::Engine(message.clone()));
        assert_eq!(err.to_string(), message);
    }
}

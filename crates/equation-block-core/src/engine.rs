//! Typesetting engine abstraction.
//!
//! The block never parses math itself. It hands the source text to an engine
//! and writes whatever markup comes back into the display surface. Engines
//! are provided by the consuming layer: the pulldown-latex MathML engine in
//! [`crate::math`] works everywhere, the browser bindings add a KaTeX one.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker carried by the display string of every parse failure.
pub const PARSE_ERROR_MARKER: &str = "ParseError";

/// Output format requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Mathml,
    HtmlAndMathml,
}

/// Options handed to the engine on every render.
///
/// Field names serialize to the KaTeX option names so the struct can be passed
/// to a KaTeX-compatible renderer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Left-align display math instead of centering it.
    #[serde(rename = "fleqn")]
    pub left_align: bool,
    pub output: OutputFormat,
    pub delimiter: String,
    pub throw_on_error: bool,
    /// Block (display) math rather than inline.
    pub display_mode: bool,
}

impl RenderOptions {
    /// The fixed configuration every equation block renders with.
    pub fn block() -> Self {
        Self {
            left_align: true,
            output: OutputFormat::Html,
            delimiter: "$$".to_string(),
            throw_on_error: true,
            display_mode: true,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::block()
    }
}

/// Why an expression could not be typeset.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RenderError {
    /// Malformed input, as reported by the engine.
    #[error("ParseError: {0}")]
    #[diagnostic(code(equation_block::render::parse))]
    Parse(String),

    /// Anything else the engine threw.
    #[error("{0}")]
    #[diagnostic(code(equation_block::render::engine))]
    Engine(String),
}

impl RenderError {
    pub fn is_parse_error(&self) -> bool {
        matches!(self, RenderError::Parse(_))
    }
}

/// Renders math source into markup for the display surface.
pub trait TypesettingEngine {
    /// Typeset `source` with `options`.
    ///
    /// Returns the markup to place in the display surface, or the error the
    /// engine raised. Must be deterministic for the same input.
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, RenderError>;
}

impl<T: TypesettingEngine + ?Sized> TypesettingEngine for &T {
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, RenderError> {
        (**self).render(source, options)
    }
}

impl<T: TypesettingEngine + ?Sized> TypesettingEngine for Box<T> {
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, RenderError> {
        (**self).render(source, options)
    }
}

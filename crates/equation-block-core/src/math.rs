//! LaTeX math rendering via pulldown-latex → MathML

use html_escape::encode_text;
use pulldown_latex::{
    Parser, Storage, config::DisplayMode, config::RenderConfig, mathml::push_mathml,
};

use crate::engine::{RenderError, RenderOptions, TypesettingEngine};

/// Engine that typesets into MathML with pulldown-latex.
///
/// Runs anywhere, no JavaScript required. The requested output format is
/// ignored: this engine only speaks MathML, which every current browser
/// displays natively.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathmlEngine;

impl MathmlEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TypesettingEngine for MathmlEngine {
    fn render(&self, source: &str, options: &RenderOptions) -> Result<String, RenderError> {
        let storage = Storage::new();
        let parser = Parser::new(source, &storage);
        let config = RenderConfig {
            display_mode: if options.display_mode {
                DisplayMode::Block
            } else {
                DisplayMode::Inline
            },
            ..Default::default()
        };

        // Collect events, tracking any errors
        let events: Vec<_> = parser.collect();
        let errors: Vec<String> = events
            .iter()
            .filter_map(|e| e.as_ref().err().map(|err| err.to_string()))
            .collect();

        if !errors.is_empty() {
            let message = errors.join("; ");
            return if options.throw_on_error {
                Err(RenderError::Parse(message))
            } else {
                Ok(error_markup(source, &message, options))
            };
        }

        let mut mathml = String::new();
        if let Err(e) = push_mathml(&mut mathml, events.into_iter(), config) {
            return if options.throw_on_error {
                Err(RenderError::Engine(e.to_string()))
            } else {
                Ok(error_markup(source, &e.to_string(), options))
            };
        }

        Ok(format!(
            r#"<span class="{}">{mathml}</span>"#,
            wrapper_class(options)
        ))
    }
}

fn wrapper_class(options: &RenderOptions) -> &'static str {
    match (options.display_mode, options.left_align) {
        (true, true) => "math math-display math-fleqn",
        (true, false) => "math math-display",
        (false, _) => "math math-inline",
    }
}

/// Inline fallback used when the caller asked not to throw.
fn error_markup(source: &str, error: &str, options: &RenderOptions) -> String {
    format!(
        r#"<span class="{} math-error" title="{}"><code>{}</code></span>"#,
        wrapper_class(options),
        html_escape::encode_double_quoted_attribute(error),
        encode_text(source),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> Result<String, RenderError> {
        MathmlEngine.render(source, &RenderOptions::block())
    }

    #[test]
    fn renders_display_math() {
        let mathml = render(r"\frac{a}{b}").unwrap();
        assert!(mathml.contains("<math"));
        assert!(mathml.contains("<mfrac"));
        assert!(mathml.contains("math-fleqn"));
    }

    #[test]
    fn renders_inline_math() {
        let options = RenderOptions {
            display_mode: false,
            ..RenderOptions::block()
        };
        let mathml = MathmlEngine.render("x^2", &options).unwrap();
        assert!(mathml.contains("</math>"));
        assert!(mathml.contains("math-inline"));
    }

    #[test]
    fn renders_complex_math() {
        assert!(render(r"\sum_{i=0}^{n} x_i").is_ok());
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render("E=mc^2").unwrap(), render("E=mc^2").unwrap());
    }

    #[test]
    fn invalid_latex_is_a_parse_error() {
        // Unclosed brace
        let err = render(r"\frac{a").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().starts_with("ParseError: "));
    }

    #[test]
    fn invalid_latex_without_throw_yields_fallback_markup() {
        let options = RenderOptions {
            throw_on_error: false,
            ..RenderOptions::block()
        };
        let html = MathmlEngine.render(r"\frac{a<", &options).unwrap();
        assert!(html.contains("math-error"));
        assert!(html.contains(r"<code>\frac{a&lt;</code>"));
    }
}

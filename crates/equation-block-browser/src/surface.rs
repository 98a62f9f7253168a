//! DOM implementations of the block surfaces.
//!
//! The block's root is a wrapper `<div>` holding an output `<div>` for the
//! typeset markup and, once rendered for editing, the raw-input `<textarea>`.
//! Output writes only ever touch the output element so the textarea survives
//! re-renders.

use equation_block_core::{DisplaySurface, InputSpec, InputSurface, StyleNames};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

use crate::error::DomError;

pub const ROOT_CLASS: &str = "equation-block";
pub const OUTPUT_CLASS: &str = "equation-block__output";
pub const INPUT_CLASS: &str = "equation-block__input";
pub const INTERACTIVE_CLASS: &str = "equation-block--interactive";

/// The global document.
pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

fn create_html_element(document: &Document, tag: &'static str) -> Result<HtmlElement, DomError> {
    document
        .create_element(tag)
        .map_err(|e| DomError::CreateElement {
            tag,
            message: format!("{:?}", e),
        })?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongElement("HtmlElement"))
}

/// Display surface over the block's wrapper and output elements.
#[derive(Debug, Clone)]
pub struct DomDisplay {
    root: HtmlElement,
    output: HtmlElement,
}

impl DomDisplay {
    /// Build the wrapper and output elements, styled with the host's block class.
    pub fn create(document: &Document, styles: &StyleNames) -> Result<Self, DomError> {
        let root = create_html_element(document, "div")?;
        root.set_class_name(&format!("{} {}", styles.block, ROOT_CLASS));

        let output = create_html_element(document, "div")?;
        output.set_class_name(OUTPUT_CLASS);
        root.append_child(&output).map_err(DomError::js)?;

        Ok(Self { root, output })
    }

    /// The element the host inserts into the page.
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }

    pub fn output(&self) -> &HtmlElement {
        &self.output
    }

    /// Place the raw input after the output.
    pub fn attach_input(&self, input: &DomInput) -> Result<(), DomError> {
        self.root
            .append_child(input.element())
            .map(|_| ())
            .map_err(DomError::js)
    }
}

impl DisplaySurface for DomDisplay {
    fn set_markup(&mut self, markup: &str) {
        self.output.set_inner_html(markup);
    }

    fn set_text(&mut self, text: &str) {
        self.output.set_inner_text(text);
    }

    fn markup(&self) -> String {
        self.output.inner_html()
    }

    fn set_interactive(&mut self, interactive: bool) {
        if let Err(e) = self
            .root
            .class_list()
            .toggle_with_force(INTERACTIVE_CLASS, interactive)
        {
            tracing::warn!("failed to toggle interactive class: {:?}", e);
        }
        self.root.set_tab_index(if interactive { 0 } else { -1 });
    }
}

/// Raw-input surface over a `<textarea>`.
#[derive(Debug, Clone)]
pub struct DomInput {
    element: HtmlTextAreaElement,
}

impl DomInput {
    pub fn create(document: &Document, spec: InputSpec) -> Result<Self, DomError> {
        let element = document
            .create_element("textarea")
            .map_err(|e| DomError::CreateElement {
                tag: "textarea",
                message: format!("{:?}", e),
            })?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| DomError::WrongElement("HtmlTextAreaElement"))?;

        element.set_class_name(&format!("{} {}", spec.class, INPUT_CLASS));
        element.set_placeholder(&spec.placeholder);
        element.set_value(&spec.value);

        Ok(Self { element })
    }

    pub fn element(&self) -> &HtmlTextAreaElement {
        &self.element
    }
}

impl InputSurface for DomInput {
    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&mut self, value: &str) {
        self.element.set_value(value);
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.element.set_hidden(hidden);
    }

    fn is_hidden(&self) -> bool {
        self.element.hidden()
    }
}

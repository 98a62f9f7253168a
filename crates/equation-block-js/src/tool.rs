//! EquationTool - the block tool class handed to the host editor.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use equation_block_browser::{
    ActivationTarget, BlockListeners, BlockParams, DisplayMode, DomBlock, DomDisplay, DomError,
    DomInput, EquationData, IS_READ_ONLY_SUPPORTED, KeyKind, document, metadata, pasted_html,
    validate,
};

use crate::katex::ToolEngine;
use crate::types::{JsEquationData, JsStyles, JsToolConfig, to_js};

type ToolBlock = DomBlock<ToolEngine>;

fn dom_error(e: DomError) -> JsError {
    JsError::new(&e.to_string())
}

/// One equation block instance.
///
/// The host constructs one per block with `{ data, config, api, readOnly }`
/// and drives it through the tool lifecycle hooks.
#[wasm_bindgen]
pub struct EquationTool {
    block: Rc<RefCell<ToolBlock>>,
    listeners: Option<BlockListeners>,
}

#[wasm_bindgen]
impl EquationTool {
    #[wasm_bindgen(constructor)]
    pub fn new(args: JsValue) -> Result<EquationTool, JsError> {
        let params = parse_params(&args)?;
        let document = document().map_err(dom_error)?;
        let display = DomDisplay::create(&document, &params.styles).map_err(dom_error)?;

        let engine = ToolEngine::detect();
        tracing::debug!(engine = engine.name(), read_only = params.read_only, "equation tool created");

        let mut block = ToolBlock::new(params, engine);
        block.mount_display(display);

        Ok(Self {
            block: Rc::new(RefCell::new(block)),
            listeners: None,
        })
    }

    // === Lifecycle ===

    /// Typeset the block and return its root element.
    ///
    /// Unless read-only, this also adds the hidden raw input and starts
    /// listening for clicks and key releases.
    pub fn render(&mut self) -> Result<HtmlElement, JsError> {
        let document = document().map_err(dom_error)?;
        let mut block = self.block.borrow_mut();

        block
            .render(|spec| DomInput::create(&document, spec))
            .map_err(dom_error)?;

        let display = block
            .display()
            .ok_or_else(|| JsError::new("Block was destroyed"))?;
        let root = display.root().clone();

        if let Some(input) = block.input() {
            if input.element().parent_node().is_none() {
                display.attach_input(input).map_err(dom_error)?;
            }
            if self.listeners.is_none() {
                self.listeners = Some(listen(
                    Rc::downgrade(&self.block),
                    &root,
                    input,
                ));
            }
        }

        Ok(root)
    }

    /// Data for the host to persist.
    pub fn save(&self, _block_content: JsValue) -> JsEquationData {
        self.block.borrow().save().into()
    }

    /// Whether saved data is worth keeping: blank equations are dropped.
    pub fn validate(&self, saved: JsEquationData) -> bool {
        validate(&saved.into())
    }

    /// Merges never change an equation.
    pub fn merge(&mut self, data: JsValue) {
        let incoming: JsEquationData = serde_wasm_bindgen::from_value(data).unwrap_or_default();
        self.block.borrow_mut().merge(&incoming.into());
    }

    /// Take over the markup of a pasted paragraph.
    #[wasm_bindgen(js_name = onPaste)]
    pub fn on_paste(&mut self, event: JsValue) {
        match pasted_html(&event) {
            Some(html) => self.block.borrow_mut().on_paste(&html),
            None => tracing::warn!("paste event without an element payload"),
        }
    }

    /// Remove listeners and let go of the DOM.
    pub fn destroy(&mut self) {
        self.listeners = None;
        self.block.borrow_mut().destroy();
    }

    // === Data access ===

    #[wasm_bindgen(getter)]
    pub fn data(&self) -> JsEquationData {
        self.block.borrow().data().clone().into()
    }

    /// Replace the data. Always rewrites the display with the new text.
    #[wasm_bindgen(js_name = setData)]
    pub fn set_data(&mut self, data: JsValue) -> Result<(), JsError> {
        let data: Option<JsEquationData> = serde_wasm_bindgen::from_value(data)
            .map_err(|e| JsError::new(&format!("Invalid data: {}", e)))?;
        self.block
            .borrow_mut()
            .set_data(data.map(EquationData::from));
        Ok(())
    }

    /// `"rendered"` or `"editing"`.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        match self.block.borrow().mode() {
            DisplayMode::Rendered => "rendered".to_string(),
            DisplayMode::Editing => "editing".to_string(),
        }
    }

    // === Static tool metadata ===

    #[wasm_bindgen(getter)]
    pub fn toolbox() -> JsValue {
        static_value(&metadata::toolbox())
    }

    #[wasm_bindgen(getter = pasteConfig)]
    pub fn paste_config() -> JsValue {
        static_value(&metadata::paste_config())
    }

    #[wasm_bindgen(getter)]
    pub fn sanitize() -> JsValue {
        static_value(&metadata::sanitize_config())
    }

    #[wasm_bindgen(getter = conversionConfig)]
    pub fn conversion_config() -> JsValue {
        static_value(&metadata::conversion_config())
    }

    #[wasm_bindgen(getter = isReadOnlySupported)]
    pub fn is_read_only_supported() -> bool {
        IS_READ_ONLY_SUPPORTED
    }
}

fn static_value<T: serde::Serialize>(value: &T) -> JsValue {
    to_js(value).unwrap_or_else(|_| {
        tracing::error!("failed to serialize tool metadata");
        JsValue::UNDEFINED
    })
}

/// Build block parameters from the host's constructor argument.
fn parse_params(args: &JsValue) -> Result<BlockParams, JsError> {
    let field = |name: &str| {
        js_sys::Reflect::get(args, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
    };

    let data: Option<JsEquationData> = serde_wasm_bindgen::from_value(field("data"))
        .map_err(|e| JsError::new(&format!("Invalid data: {}", e)))?;
    let config: Option<JsToolConfig> = serde_wasm_bindgen::from_value(field("config"))
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;

    let api = field("api");
    let styles = if api.is_object() {
        let styles = js_sys::Reflect::get(&api, &JsValue::from_str("styles"))
            .unwrap_or(JsValue::UNDEFINED);
        serde_wasm_bindgen::from_value::<Option<JsStyles>>(styles)
            .map_err(|e| JsError::new(&format!("Invalid api.styles: {}", e)))?
    } else {
        None
    };

    Ok(BlockParams {
        data: data.map(EquationData::from),
        config: config.unwrap_or_default().into(),
        styles: styles.unwrap_or_default().into(),
        read_only: field("readOnly").as_bool().unwrap_or(false),
    })
}

/// Route DOM events into the block. Holds the block weakly so a tool dropped
/// by the host isn't kept alive by its own listeners.
fn listen(block: Weak<RefCell<ToolBlock>>, root: &HtmlElement, input: &DomInput) -> BlockListeners {
    let click_block = block.clone();
    BlockListeners::attach(
        root,
        input.element(),
        move |target: ActivationTarget| {
            with_block(&click_block, |block| {
                let outcome = block.activate(target);
                tracing::debug!(?outcome, "block activated");
            });
        },
        move |key: KeyKind| {
            with_block(&block, |block| {
                block.key_release(key);
            });
        },
    )
}

fn with_block(block: &Weak<RefCell<ToolBlock>>, f: impl FnOnce(&mut ToolBlock)) {
    let Some(block) = block.upgrade() else {
        return;
    };
    match block.try_borrow_mut() {
        Ok(mut block) => f(&mut block),
        Err(_) => tracing::warn!("equation block busy, dropping event"),
    };
}

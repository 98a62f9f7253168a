//! WASM bindings for the equation block.
//!
//! Exposes `EquationTool`, a block tool class for JavaScript block editors:
//! construct it with `{ data, config, api, readOnly }`, call `render()` to get
//! its element, `save()` to persist. Math is typeset with the page's KaTeX
//! when loaded, MathML otherwise.

mod katex;
mod tool;
mod types;

pub use katex::*;
pub use tool::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}

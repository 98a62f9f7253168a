//! Browser event handling for the block.
//!
//! Extracts what the core state machine needs from DOM events and wires the
//! block's click and keyup listeners.

use equation_block_core::{ActivationTarget, KeyKind};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlTextAreaElement, KeyboardEvent};

/// Classify a keyboard event, preferring `key` over the legacy `keyCode`.
pub fn key_kind(event: &KeyboardEvent) -> KeyKind {
    let key = event.key();
    if key.is_empty() || key == "Unidentified" {
        KeyKind::from_key_code(event.key_code())
    } else {
        KeyKind::from_key(&key)
    }
}

/// Whether a click landed in the raw input or elsewhere in the block.
pub fn activation_target(event: &Event, input: &HtmlTextAreaElement) -> ActivationTarget {
    let input: &EventTarget = input.as_ref();
    match event.target() {
        Some(target) if &target == input => ActivationTarget::RawInput,
        _ => ActivationTarget::Display,
    }
}

/// Markup of the element carried by a host paste event (`event.detail.data`).
pub fn pasted_html(event: &JsValue) -> Option<String> {
    let detail = js_sys::Reflect::get(event, &JsValue::from_str("detail")).ok()?;
    let data = js_sys::Reflect::get(&detail, &JsValue::from_str("data")).ok()?;
    let element = data.dyn_into::<Element>().ok()?;
    Some(element.inner_html())
}

/// Click and keyup listeners on a rendered block.
///
/// Listeners are removed when this is dropped.
pub struct BlockListeners {
    _click: EventListener,
    _keyup: EventListener,
}

impl BlockListeners {
    pub fn attach<A, K>(
        root: &HtmlElement,
        input: &HtmlTextAreaElement,
        mut on_activate: A,
        mut on_key: K,
    ) -> Self
    where
        A: FnMut(ActivationTarget) + 'static,
        K: FnMut(KeyKind) + 'static,
    {
        let click_input = input.clone();
        let click = EventListener::new(root, "click", move |event| {
            on_activate(activation_target(event, &click_input));
        });

        let keyup = EventListener::new(root, "keyup", move |event| {
            match event.dyn_ref::<KeyboardEvent>() {
                Some(event) => on_key(key_kind(event)),
                None => tracing::debug!("keyup without KeyboardEvent"),
            }
        });

        Self {
            _click: click,
            _keyup: keyup,
        }
    }
}

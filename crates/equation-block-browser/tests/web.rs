//! WASM browser tests for equation-block-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use equation_block_browser::{
    ActivationTarget, BlockListeners, BlockParams, DisplayMode, DisplaySurface, DomBlock,
    DomDisplay, DomInput, InputSpec, InputSurface, KeyKind, MathmlEngine, StyleNames, document,
    pasted_html,
};
use web_sys::{KeyboardEvent, KeyboardEventInit};

fn spec(value: &str) -> InputSpec {
    InputSpec {
        class: "cdx-input".to_string(),
        placeholder: "Enter TeX".to_string(),
        value: value.to_string(),
    }
}

fn keyup(key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keyup", &init).unwrap()
}

// === Surfaces ===

#[wasm_bindgen_test]
fn test_display_classes() {
    let doc = document().unwrap();
    let display = DomDisplay::create(&doc, &StyleNames::default()).unwrap();
    assert!(display.root().class_list().contains("cdx-block"));
    assert!(display.root().class_list().contains("equation-block"));
    assert!(display.output().class_list().contains("equation-block__output"));
}

#[wasm_bindgen_test]
fn test_display_text_is_not_markup() {
    let doc = document().unwrap();
    let mut display = DomDisplay::create(&doc, &StyleNames::default()).unwrap();
    display.set_text("a <b> c");
    assert_eq!(display.markup(), "a &lt;b&gt; c");
    display.set_markup("<b>x</b>");
    assert_eq!(display.markup(), "<b>x</b>");
    display.clear();
    assert_eq!(display.markup(), "");
}

#[wasm_bindgen_test]
fn test_display_interactive_toggle() {
    let doc = document().unwrap();
    let mut display = DomDisplay::create(&doc, &StyleNames::default()).unwrap();
    display.set_interactive(true);
    assert!(display.root().class_list().contains("equation-block--interactive"));
    display.set_interactive(false);
    assert!(!display.root().class_list().contains("equation-block--interactive"));
}

#[wasm_bindgen_test]
fn test_input_from_spec() {
    let doc = document().unwrap();
    let mut input = DomInput::create(&doc, spec("x^2")).unwrap();
    assert_eq!(input.value(), "x^2");
    assert_eq!(input.element().placeholder(), "Enter TeX");
    input.set_hidden(true);
    assert!(input.is_hidden());
}

// === Block on the DOM ===

#[wasm_bindgen_test]
fn test_block_render_and_edit() {
    let doc = document().unwrap();
    let mut block: DomBlock<MathmlEngine> =
        DomBlock::new(BlockParams::new(r"\frac{a}{b}"), MathmlEngine);
    block.mount_display(DomDisplay::create(&doc, &StyleNames::default()).unwrap());

    block.render(|spec| DomInput::create(&doc, spec)).unwrap();
    let display = block.display().unwrap();
    display.attach_input(block.input().unwrap()).unwrap();
    assert!(display.markup().contains("<math"));
    assert_eq!(block.mode(), DisplayMode::Rendered);

    block.activate(ActivationTarget::Display);
    assert_eq!(block.mode(), DisplayMode::Editing);

    block.input_mut().unwrap().set_value("");
    block.key_release(KeyKind::Backspace);
    assert_eq!(block.display().unwrap().markup(), "");
    // the textarea lives next to the output, not inside it
    assert_eq!(block.display().unwrap().root().child_element_count(), 2);
}

// === Events ===

#[wasm_bindgen_test]
fn test_listeners_route_clicks_and_keys() {
    let doc = document().unwrap();
    let display = DomDisplay::create(&doc, &StyleNames::default()).unwrap();
    let input = DomInput::create(&doc, spec("")).unwrap();
    display.attach_input(&input).unwrap();

    let clicks = Rc::new(RefCell::new(Vec::new()));
    let keys = Rc::new(RefCell::new(Vec::new()));
    let listeners = {
        let clicks = clicks.clone();
        let keys = keys.clone();
        BlockListeners::attach(
            display.root(),
            input.element(),
            move |target| clicks.borrow_mut().push(target),
            move |key| keys.borrow_mut().push(key),
        )
    };

    display.output().click();
    input.element().click();
    input.element().dispatch_event(&keyup("Delete")).unwrap();
    input.element().dispatch_event(&keyup("a")).unwrap();

    assert_eq!(
        *clicks.borrow(),
        vec![ActivationTarget::Display, ActivationTarget::RawInput]
    );
    assert_eq!(*keys.borrow(), vec![KeyKind::Delete, KeyKind::Other]);

    drop(listeners);
    display.output().click();
    assert_eq!(clicks.borrow().len(), 2);
}

#[wasm_bindgen_test]
fn test_pasted_html() {
    let doc = document().unwrap();
    let p = doc.create_element("p").unwrap();
    p.set_inner_html("x<br>y");

    let detail = js_sys::Object::new();
    js_sys::Reflect::set(&detail, &JsValue::from_str("data"), &p).unwrap();
    let event = js_sys::Object::new();
    js_sys::Reflect::set(&event, &JsValue::from_str("detail"), &detail).unwrap();

    assert_eq!(pasted_html(&event), Some("x<br>y".to_string()));
    assert_eq!(pasted_html(&JsValue::NULL), None);
}

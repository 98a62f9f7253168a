//! Browser DOM layer for the equation block.
//!
//! This crate provides the DOM surfaces and event plumbing the core state
//! machine runs against. It assumes a `wasm32-unknown-unknown` target
//! environment.
//!
//! # Architecture
//!
//! - `surface`: `DomDisplay` / `DomInput`, element creation and styling
//! - `events`: key classification, click targets, paste extraction, listeners
//! - `error`: DOM failure type
//!
//! # Re-exports
//!
//! This crate re-exports `equation-block-core` for convenience, so consumers
//! only need to depend on `equation-block-browser`.

// Re-export core crate
pub use equation_block_core;
pub use equation_block_core::*;

pub mod error;
pub mod events;
pub mod surface;

pub use error::DomError;
pub use events::{BlockListeners, activation_target, key_kind, pasted_html};
pub use surface::{DomDisplay, DomInput, document};

/// The block as it runs in the browser.
pub type DomBlock<E> = EquationBlock<E, DomDisplay, DomInput>;

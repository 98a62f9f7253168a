//! equation-block-core: Pure Rust logic for the equation block, without
//! platform dependencies.
//!
//! This crate provides:
//! - `EquationData` - the persisted record, and its validation
//! - `BlockParams` / `BlockConfig` / `StyleNames` - what the host constructs a block from
//! - `TypesettingEngine` trait and `MathmlEngine` - pulldown-latex backed implementation
//! - `DisplaySurface` / `InputSurface` traits for whatever shows the block
//! - `EquationBlock<E, D, I>` - the edit/render state machine, generic over all three
//! - Static tool metadata (toolbox, paste, conversion, sanitize)

pub mod block;
pub mod config;
pub mod data;
pub mod engine;
pub mod keys;
pub mod math;
pub mod metadata;
pub mod surface;

pub use block::{Activation, ActivationTarget, DisplayMode, EquationBlock};
pub use config::{BlockConfig, BlockParams, DEFAULT_ERROR_PREFIX, StyleNames};
pub use data::{EquationData, validate};
pub use engine::{OutputFormat, PARSE_ERROR_MARKER, RenderError, RenderOptions, TypesettingEngine};
pub use keys::KeyKind;
pub use math::MathmlEngine;
pub use metadata::{
    ConversionConfig, IS_READ_ONLY_SUPPORTED, PasteConfig, SanitizeConfig, Toolbox,
    conversion_config, paste_config, sanitize_config, toolbox,
};
pub use surface::{DisplaySurface, InputSpec, InputSurface};

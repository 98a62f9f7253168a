//! The equation block: edit/render state machine and render pipeline.
//!
//! A block holds one [`EquationData`], typesets it through a
//! [`TypesettingEngine`] into a [`DisplaySurface`], and toggles between
//! showing only the typeset output and also showing the raw-input surface.
//!
//! The block is generic over the engine and both surfaces so the same logic
//! drives the DOM in the browser and the in-memory surfaces in tests.

use tracing::{debug, trace};

use crate::config::{BlockConfig, BlockParams, StyleNames};
use crate::data::EquationData;
use crate::engine::{RenderOptions, TypesettingEngine};
use crate::keys::KeyKind;
use crate::surface::{DisplaySurface, InputSpec, InputSurface};

/// Which surfaces are visible. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Typeset output only.
    #[default]
    Rendered,
    /// Raw input visible alongside the output.
    Editing,
}

/// Where an activation (click, tap) landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationTarget {
    Display,
    RawInput,
}

/// Outcome of [`EquationBlock::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Nothing happened: read-only, not rendered yet, or the click was inside
    /// the raw input.
    Ignored,
    /// The raw input was revealed.
    Editing,
    /// The output was in an error state and the last known-good text was
    /// typeset again.
    Recovered,
}

pub struct EquationBlock<E, D, I> {
    engine: E,
    options: RenderOptions,
    data: EquationData,
    config: BlockConfig,
    styles: StyleNames,
    read_only: bool,

    display: Option<D>,
    input: Option<I>,

    /// Source of what the display currently shows: the last cleanly typeset
    /// text, or the raw text mirrored in by `set_data`.
    shown_source: Option<String>,
    last_good_text: Option<String>,
    last_render_failed: bool,
}

impl<E, D, I> EquationBlock<E, D, I>
where
    E: TypesettingEngine,
    D: DisplaySurface,
    I: InputSurface,
{
    /// Create a block. No surfaces exist until [`mount_display`](Self::mount_display).
    pub fn new(params: BlockParams, engine: E) -> Self {
        Self {
            engine,
            options: RenderOptions::block(),
            data: params.data.unwrap_or_default(),
            config: params.config,
            styles: params.styles,
            read_only: params.read_only,
            display: None,
            input: None,
            shown_source: None,
            last_good_text: None,
            last_render_failed: false,
        }
    }

    /// Attach the display surface and mirror the current data into it.
    pub fn mount_display(&mut self, display: D) {
        self.display = Some(display);
        let data = std::mem::take(&mut self.data);
        self.set_data(Some(data));
    }

    // === Data ===

    pub fn data(&self) -> &EquationData {
        &self.data
    }

    /// Replace the block data. Always rewrites the display surface.
    ///
    /// The new text is written straight into the display surface as markup,
    /// trusted as already sanitized by the host. An open raw input picks up
    /// the new text too. The mirrored text becomes the snapshot a later failed
    /// render recovers to, and any earlier failure is forgotten.
    pub fn set_data(&mut self, data: Option<EquationData>) {
        self.data = data.unwrap_or_default();
        self.shown_source = Some(self.data.text.clone());
        self.last_render_failed = false;

        if let Some(display) = self.display.as_mut() {
            display.set_markup(&self.data.text);
        }
        if let Some(input) = self.input.as_mut() {
            input.set_value(&self.data.text);
        }
    }

    // === Render pipeline ===

    /// Typeset the current text into the display surface.
    ///
    /// Parse failures never escape: the display shows the configured prefix
    /// plus the error as plain text, and the raw text stays in the data so the
    /// user can fix it. Without a display surface this does nothing.
    pub fn render_from_text(&mut self) {
        let Some(display) = self.display.as_mut() else {
            trace!("render requested before display exists");
            return;
        };

        if !self.last_render_failed {
            self.last_good_text = self.shown_source.clone();
        }

        match self.engine.render(&self.data.text, &self.options) {
            Ok(markup) => {
                display.set_markup(&markup);
                self.shown_source = Some(self.data.text.clone());
                self.last_render_failed = false;
            }
            Err(err) => {
                debug!(error = %err, "equation failed to render");
                let message = format!("{}{}", self.config.error_prefix(), err);
                display.set_text(&message);
                self.last_render_failed = true;
            }
        }
    }

    // === Host lifecycle ===

    /// First render into the page.
    ///
    /// Typesets the current text and, unless read-only, builds the raw-input
    /// surface (hidden) through `make_input` and marks the display as
    /// interactive. Calling it again re-renders without rebuilding the input.
    /// Returns the display surface the host should insert.
    pub fn render<F, Err>(&mut self, make_input: F) -> Result<Option<&D>, Err>
    where
        F: FnOnce(InputSpec) -> Result<I, Err>,
    {
        self.render_from_text();

        if !self.read_only && self.input.is_none() && self.display.is_some() {
            let spec = InputSpec {
                class: self.styles.input.clone(),
                placeholder: self.config.placeholder().to_string(),
                value: self.data.text.clone(),
            };
            let mut input = make_input(spec)?;
            input.set_hidden(true);
            self.input = Some(input);

            if let Some(display) = self.display.as_mut() {
                display.set_interactive(true);
            }
        }

        Ok(self.display.as_ref())
    }

    /// The projection the host persists.
    pub fn save(&self) -> EquationData {
        EquationData {
            text: self.data.text.clone(),
        }
    }

    /// Content can't be changed through merges: the incoming data is dropped.
    pub fn merge(&mut self, _incoming: &EquationData) {
        debug!("ignoring merge into equation block");
    }

    /// Replace the data with the markup of a pasted element.
    pub fn on_paste(&mut self, pasted_html: &str) {
        self.set_data(Some(EquationData::new(pasted_html)));
    }

    /// Drop both surfaces. Later events are no-ops.
    pub fn destroy(&mut self) {
        self.input = None;
        self.display = None;
    }

    // === Events ===

    /// The user clicked or tapped somewhere inside the block.
    pub fn activate(&mut self, target: ActivationTarget) -> Activation {
        if target == ActivationTarget::RawInput {
            return Activation::Ignored;
        }
        let (Some(display), Some(input)) = (self.display.as_mut(), self.input.as_mut()) else {
            return Activation::Ignored;
        };

        if self.last_render_failed {
            let source = self.last_good_text.clone().unwrap_or_default();
            // A snapshot mirrored in by set_data was never typeset, so it may
            // fail too; the display is then left empty.
            self.shown_source = match self.engine.render(&source, &self.options) {
                Ok(markup) => {
                    display.set_markup(&markup);
                    Some(source)
                }
                Err(err) => {
                    debug!(error = %err, "last known-good equation does not render");
                    display.clear();
                    None
                }
            };
            self.last_render_failed = false;
            debug!("restored last known-good equation");
            return Activation::Recovered;
        }

        input.set_hidden(false);
        Activation::Editing
    }

    /// A key was released inside the block.
    ///
    /// Pulls the raw input into the data and re-renders. Deleting the last
    /// character empties the display entirely. Returns whether the event was
    /// handled.
    pub fn key_release(&mut self, key: KeyKind) -> bool {
        if self.read_only {
            return false;
        }

        if let Some(input) = self.input.as_ref() {
            self.data.text = input.value();
        }
        self.render_from_text();

        if key.is_deletion() && self.data.text.is_empty() {
            if let Some(display) = self.display.as_mut() {
                display.clear();
            }
        }
        true
    }

    // === Queries ===

    pub fn mode(&self) -> DisplayMode {
        match &self.input {
            Some(input) if !input.is_hidden() => DisplayMode::Editing,
            _ => DisplayMode::Rendered,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn last_good_text(&self) -> Option<&str> {
        self.last_good_text.as_deref()
    }

    pub fn last_render_failed(&self) -> bool {
        self.last_render_failed
    }

    pub fn config(&self) -> &BlockConfig {
        &self.config
    }

    pub fn styles(&self) -> &StyleNames {
        &self.styles
    }

    pub fn display(&self) -> Option<&D> {
        self.display.as_ref()
    }

    pub fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    /// Mutable access for platforms that feed user edits into the input.
    pub fn input_mut(&mut self) -> Option<&mut I> {
        self.input.as_mut()
    }
}

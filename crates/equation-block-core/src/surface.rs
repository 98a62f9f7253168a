//! Surface abstraction traits.
//!
//! These traits define the interface between the block logic and whatever
//! actually shows the output and takes the keystrokes. The browser layer
//! implements them over DOM elements; [`memory`] provides headless versions
//! for tests and server-side prerendering.

/// The region showing typeset output, or the error message in its place.
pub trait DisplaySurface {
    /// Replace the surface contents with trusted markup.
    fn set_markup(&mut self, markup: &str);

    /// Replace the surface contents with plain text. Never interpreted as markup.
    fn set_text(&mut self, text: &str);

    /// Current contents as markup.
    fn markup(&self) -> String;

    /// Flag the surface as something the user can click into.
    fn set_interactive(&mut self, interactive: bool);

    /// Drop all contents.
    fn clear(&mut self) {
        self.set_markup("");
    }
}

/// The editable region holding the raw expression source.
pub trait InputSurface {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    fn set_hidden(&mut self, hidden: bool);

    fn is_hidden(&self) -> bool;
}

/// What a platform needs to build the raw-input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub class: String,
    pub placeholder: String,
    /// Initial contents.
    pub value: String,
}

pub mod memory {
    //! In-memory surfaces with no rendering backend.

    use super::{DisplaySurface, InputSurface, InputSpec};

    /// What a [`MemoryDisplay`] currently shows.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub enum Shown {
        #[default]
        Empty,
        Markup(String),
        Text(String),
    }

    #[derive(Debug, Clone, Default)]
    pub struct MemoryDisplay {
        pub class: String,
        pub shown: Shown,
        pub interactive: bool,
    }

    impl MemoryDisplay {
        pub fn new(class: impl Into<String>) -> Self {
            Self {
                class: class.into(),
                ..Default::default()
            }
        }

        /// Contents as a user would read them: markup or text, verbatim.
        pub fn visible(&self) -> &str {
            match &self.shown {
                Shown::Empty => "",
                Shown::Markup(s) | Shown::Text(s) => s,
            }
        }
    }

    impl DisplaySurface for MemoryDisplay {
        fn set_markup(&mut self, markup: &str) {
            self.shown = if markup.is_empty() {
                Shown::Empty
            } else {
                Shown::Markup(markup.to_string())
            };
        }

        fn set_text(&mut self, text: &str) {
            self.shown = if text.is_empty() {
                Shown::Empty
            } else {
                Shown::Text(text.to_string())
            };
        }

        fn markup(&self) -> String {
            match &self.shown {
                Shown::Empty => String::new(),
                Shown::Markup(markup) => markup.clone(),
                Shown::Text(text) => html_escape::encode_text(text).into_owned(),
            }
        }

        fn set_interactive(&mut self, interactive: bool) {
            self.interactive = interactive;
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct MemoryInput {
        pub class: String,
        pub placeholder: String,
        pub value: String,
        pub hidden: bool,
    }

    impl MemoryInput {
        pub fn from_spec(spec: InputSpec) -> Self {
            Self {
                class: spec.class,
                placeholder: spec.placeholder,
                value: spec.value,
                hidden: false,
            }
        }
    }

    impl InputSurface for MemoryInput {
        fn value(&self) -> String {
            self.value.clone()
        }

        fn set_value(&mut self, value: &str) {
            self.value = value.to_string();
        }

        fn set_hidden(&mut self, hidden: bool) {
            self.hidden = hidden;
        }

        fn is_hidden(&self) -> bool {
            self.hidden
        }
    }
}

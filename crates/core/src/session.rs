//! Editable session documents and the immutable snapshots handed to producers.

use log::debug;

use crate::defaults;
use crate::error::Result;
use crate::producer::MarkupProducer;

/// Read-only snapshot of the definition documents for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definitions {
    pub design_tokens: String,
    pub layout_catalog: String,
    /// Example design document shown to the generation service.
    pub sample_design_doc: String,
}

impl Default for Definitions {
    fn default() -> Self {
        Self {
            design_tokens: defaults::DESIGN_TOKENS.to_string(),
            layout_catalog: defaults::LAYOUT_CATALOG.to_string(),
            sample_design_doc: defaults::SAMPLE_DESIGN_DOC.to_string(),
        }
    }
}

/// Mutable holder of the documents a user edits during a session.
///
/// Definition documents start from the built-in defaults and can be reset
/// to them at any time. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct Session {
    definitions: Definitions,
    manuscript: String,
    design_doc: String,
    markup: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            definitions: Definitions::default(),
            manuscript: defaults::SAMPLE_MANUSCRIPT.to_string(),
            design_doc: String::new(),
            markup: String::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current definition documents.
    pub fn definitions(&self) -> Definitions {
        self.definitions.clone()
    }

    pub fn design_tokens(&self) -> &str {
        &self.definitions.design_tokens
    }

    pub fn layout_catalog(&self) -> &str {
        &self.definitions.layout_catalog
    }

    pub fn sample_design_doc(&self) -> &str {
        &self.definitions.sample_design_doc
    }

    pub fn manuscript(&self) -> &str {
        &self.manuscript
    }

    pub fn design_doc(&self) -> &str {
        &self.design_doc
    }

    /// Markup from the last successful render.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn set_design_tokens(&mut self, text: impl Into<String>) {
        self.definitions.design_tokens = text.into();
    }

    pub fn set_layout_catalog(&mut self, text: impl Into<String>) {
        self.definitions.layout_catalog = text.into();
    }

    pub fn set_sample_design_doc(&mut self, text: impl Into<String>) {
        self.definitions.sample_design_doc = text.into();
    }

    pub fn set_manuscript(&mut self, text: impl Into<String>) {
        self.manuscript = text.into();
    }

    pub fn set_design_doc(&mut self, text: impl Into<String>) {
        self.design_doc = text.into();
    }

    pub fn reset_tokens(&mut self) {
        self.definitions.design_tokens = defaults::DESIGN_TOKENS.to_string();
    }

    pub fn reset_catalog(&mut self) {
        self.definitions.layout_catalog = defaults::LAYOUT_CATALOG.to_string();
    }

    /// Restore every document to its built-in default and clear outputs.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    /// Render the current design document with `producer`.
    ///
    /// On success the markup is stored and returned. On failure the previous
    /// markup is left in place.
    pub fn render_with(&mut self, producer: &dyn MarkupProducer) -> Result<&str> {
        let markup = producer.produce(&self.design_doc, &self.definitions)?;
        debug!("Session markup updated ({} bytes)", markup.len());
        self.markup = markup;
        Ok(&self.markup)
    }
}

//! Layout catalog: the list of named layout patterns a slide may reference.

use log::{debug, warn};
use serde_yml::Value;

use crate::error::{Error, Result};
use crate::types::LayoutDefinition;

/// Returned for ids the catalog does not know.
static GENERIC_LAYOUT: LayoutDefinition = LayoutDefinition::GENERIC;

/// Parsed layout catalog, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutCatalog {
    layouts: Vec<LayoutDefinition>,
}

impl LayoutCatalog {
    /// Parse a catalog document (a YAML list of layout records).
    ///
    /// Fails when the text is not YAML or is not a list. Individual records
    /// that are malformed, lack an id, or repeat an id are skipped with a
    /// warning.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let root: Value =
            serde_yml::from_str(text).map_err(|e| Error::CatalogParse(e.to_string()))?;

        if root.is_null() {
            return Ok(Self::default());
        }
        let entries = root
            .as_sequence()
            .ok_or_else(|| Error::CatalogParse("expected a list of layout records".to_string()))?;

        let mut catalog = Self::default();
        for (idx, entry) in entries.iter().enumerate() {
            match serde_yml::from_value::<LayoutDefinition>(entry.clone()) {
                Ok(layout) if layout.id.trim().is_empty() => {
                    warn!("Skipping layout record {} without an id", idx + 1);
                }
                Ok(layout) => catalog.push(layout),
                Err(e) => warn!("Skipping invalid layout record {}: {}", idx + 1, e),
            }
        }

        debug!("Loaded {} layouts", catalog.len());
        Ok(catalog)
    }

    /// Parse a catalog document, substituting an empty catalog on failure.
    pub fn parse_lenient(text: &str) -> Self {
        Self::from_yaml(text).unwrap_or_else(|e| {
            warn!("{}; using an empty layout catalog", e);
            Self::default()
        })
    }

    fn push(&mut self, mut layout: LayoutDefinition) {
        layout.id = layout.id.trim().to_string();
        if self.get(&layout.id).is_some() {
            warn!("Duplicate layout id {:?}; keeping the first definition", layout.id);
            return;
        }
        self.layouts.push(layout);
    }

    /// Look up a layout by exact id.
    pub fn get(&self, id: &str) -> Option<&LayoutDefinition> {
        self.layouts.iter().find(|l| l.id == id)
    }

    /// Resolve a layout id, returning the generic definition when unknown.
    pub fn resolve(&self, id: &str) -> &LayoutDefinition {
        match self.get(id) {
            Some(layout) => layout,
            None => {
                if !id.is_empty() {
                    warn!("Layout id {:?} is not in the catalog; rendering generically", id);
                }
                &GENERIC_LAYOUT
            }
        }
    }

    /// All layouts in document order.
    pub fn layouts(&self) -> &[LayoutDefinition] {
        &self.layouts
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

/// Resolve one layout id against a catalog document.
pub fn resolve_layout(id: &str, catalog_text: &str) -> LayoutDefinition {
    LayoutCatalog::parse_lenient(catalog_text).resolve(id).clone()
}

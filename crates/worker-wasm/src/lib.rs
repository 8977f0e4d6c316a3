//! WASM wrapper for the slide markup pipeline.
//!
//! Exposes the deterministic renderer and its helpers to the browser page.
//! Generation-service calls stay in JavaScript.

use serde::{Deserialize, Serialize};
use slidesmith_core::{
    convert_design_to_markup, parse_design_document as parse_document, DefaultDocument,
    DesignTokens, LayoutCatalog, LayoutDefinition,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// One catalog entry as shown in the layout picker.
#[derive(Debug, Serialize, Deserialize)]
pub struct LayoutSummary {
    pub id: String,
    pub name: String,
    pub structure: String,
    pub cols: Option<usize>,
    pub steps: Option<usize>,
    pub description: String,
    pub usage_hints: Vec<String>,
}

impl From<&LayoutDefinition> for LayoutSummary {
    fn from(layout: &LayoutDefinition) -> Self {
        Self {
            id: layout.id.clone(),
            name: layout.name.clone(),
            structure: layout.structure_tag().to_string(),
            cols: layout.cols,
            steps: layout.steps,
            description: layout.description.clone(),
            usage_hints: layout.usage_hints.clone(),
        }
    }
}

/// Render a design document into a Marp deck.
///
/// Never throws: broken tokens or catalog documents fall back to defaults.
#[wasm_bindgen]
pub fn render_markup(design_doc: &str, tokens: &str, catalog: &str) -> String {
    convert_design_to_markup(design_doc, tokens, catalog)
}

/// Generate the stylesheet for a design tokens document.
#[wasm_bindgen]
pub fn generate_stylesheet(tokens: &str) -> Result<String, JsValue> {
    let tokens = DesignTokens::from_yaml(tokens).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(slidesmith_core::generate_stylesheet(&tokens))
}

/// Parse a design document into an array of slide records.
#[wasm_bindgen]
pub fn parse_design_document(text: &str) -> Result<JsValue, JsValue> {
    let slides = parse_document(text);

    serde_wasm_bindgen::to_value(&slides)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// List the layouts of a catalog document.
#[wasm_bindgen]
pub fn list_layouts(catalog: &str) -> Result<JsValue, JsValue> {
    let summaries = list_layouts_impl(catalog).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&summaries)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn list_layouts_impl(catalog: &str) -> Result<Vec<LayoutSummary>, String> {
    let catalog = LayoutCatalog::from_yaml(catalog).map_err(|e| e.to_string())?;
    Ok(catalog.layouts().iter().map(LayoutSummary::from).collect())
}

/// Text of a built-in document (`tokens`, `catalog`, `sample`, `manuscript`).
#[wasm_bindgen]
pub fn default_document(name: &str) -> Result<String, JsValue> {
    name.parse::<DefaultDocument>()
        .map(|doc| doc.text().to_string())
        .map_err(|e| JsValue::from_str(&e))
}

/// Names accepted by [`default_document`].
#[wasm_bindgen]
pub fn default_document_names() -> js_sys::Array {
    DefaultDocument::ALL
        .iter()
        .map(|doc| JsValue::from_str(doc.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidesmith_core::defaults;

    #[test]
    fn test_render_markup_with_defaults() {
        let out = render_markup(
            defaults::SAMPLE_DESIGN_DOC,
            defaults::DESIGN_TOKENS,
            defaults::LAYOUT_CATALOG,
        );

        assert!(out.starts_with("---\nmarp: true\n"));
        assert!(out.contains("<!-- _class: title-slide -->"));
    }

    #[test]
    fn test_list_layouts_summaries() {
        let layouts = list_layouts_impl(defaults::LAYOUT_CATALOG).unwrap();

        assert_eq!(layouts.len(), 21);
        assert_eq!(layouts[0].id, "S01");
        assert_eq!(layouts[0].structure, "title-cover");
    }

    #[test]
    fn test_list_layouts_rejects_non_list() {
        assert!(list_layouts_impl("id: S01").is_err());
    }
}

//! Markup producers: interchangeable ways to turn a design document into a
//! Marp deck.

use log::debug;

use crate::assemble::DeckAssembler;
use crate::catalog::LayoutCatalog;
use crate::error::Result;
use crate::parser::parse_design_document;
use crate::render::render_slide;
use crate::session::Definitions;
use crate::style::generate_stylesheet;
use crate::tokens::DesignTokens;

/// Produces final markup from a design document and the session definitions.
pub trait MarkupProducer {
    fn produce(&self, design_doc: &str, definitions: &Definitions) -> Result<String>;
}

/// The deterministic template renderer.
#[derive(Debug, Clone, Default)]
pub struct TemplateProducer {
    assembler: DeckAssembler,
}

impl TemplateProducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom front-matter settings.
    pub fn with_assembler(mut self, assembler: DeckAssembler) -> Self {
        self.assembler = assembler;
        self
    }
}

impl MarkupProducer for TemplateProducer {
    fn produce(&self, design_doc: &str, definitions: &Definitions) -> Result<String> {
        let tokens = DesignTokens::parse_lenient(&definitions.design_tokens);
        let catalog = LayoutCatalog::parse_lenient(&definitions.layout_catalog);
        Ok(render_deck_with(design_doc, &tokens, &catalog, &self.assembler))
    }
}

/// Run the full deterministic pipeline.
///
/// Unparsable token or catalog documents are logged and replaced by empty
/// defaults, so this never fails.
pub fn convert_design_to_markup(design_doc: &str, tokens_text: &str, catalog_text: &str) -> String {
    let tokens = DesignTokens::parse_lenient(tokens_text);
    let catalog = LayoutCatalog::parse_lenient(catalog_text);
    render_deck(design_doc, &tokens, &catalog)
}

/// Render a design document against already-parsed tokens and catalog.
pub fn render_deck(design_doc: &str, tokens: &DesignTokens, catalog: &LayoutCatalog) -> String {
    render_deck_with(design_doc, tokens, catalog, &DeckAssembler::default())
}

/// [`render_deck`] with explicit front-matter settings.
pub fn render_deck_with(
    design_doc: &str,
    tokens: &DesignTokens,
    catalog: &LayoutCatalog,
    assembler: &DeckAssembler,
) -> String {
    let stylesheet = generate_stylesheet(tokens);

    let records = parse_design_document(design_doc);
    let slides: Vec<String> = records
        .iter()
        .map(|record| render_slide(record, catalog.resolve(&record.layout_id), tokens))
        .collect();

    debug!(
        "Rendered {} slides ({} without a layout id)",
        slides.len(),
        records.iter().filter(|r| !r.has_layout_id()).count()
    );
    assembler.assemble(&slides, &stylesheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn test_template_producer_renders_sample() {
        let definitions = Definitions::default();
        let out = TemplateProducer::new()
            .produce(defaults::SAMPLE_DESIGN_DOC, &definitions)
            .unwrap();

        assert!(out.starts_with("---\nmarp: true\n"));
        assert!(out.contains("<!-- _class: title-slide -->"));
        assert!(out.contains("<div class=\"grid-3\">"));
    }

    #[test]
    fn test_template_producer_front_matter_settings() {
        let producer = TemplateProducer::new()
            .with_assembler(DeckAssembler::new().with_theme("gaia").with_paginate(false));
        let out = producer.produce("## One", &Definitions::default()).unwrap();

        assert!(out.contains("theme: gaia\n"));
        assert!(out.contains("paginate: false\n"));
        assert!(out.contains("# One"));
    }

    #[test]
    fn test_bad_definitions_still_render() {
        let out = convert_design_to_markup("## Only slide", "colors: [", "not: a list");

        assert!(out.contains("# Only slide"));
        assert!(out.contains("(Structure: generic)"));
    }

    #[test]
    fn test_render_deck_matches_convert() {
        let tokens = DesignTokens::parse_lenient(defaults::DESIGN_TOKENS);
        let catalog = LayoutCatalog::parse_lenient(defaults::LAYOUT_CATALOG);

        assert_eq!(
            render_deck(defaults::SAMPLE_DESIGN_DOC, &tokens, &catalog),
            convert_design_to_markup(
                defaults::SAMPLE_DESIGN_DOC,
                defaults::DESIGN_TOKENS,
                defaults::LAYOUT_CATALOG
            )
        );
    }
}

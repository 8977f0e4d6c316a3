//! Design-document to Marp slide markup pipeline.
//!
//! Parses a per-slide design document, resolves each slide's layout pattern
//! against a catalog, renders slide fragments styled by design tokens, and
//! assembles them into a single Marp deck.

mod de;

pub mod assemble;
pub mod catalog;
pub mod defaults;
pub mod error;
pub mod labels;
pub mod parser;
pub mod producer;
pub mod render;
pub mod session;
pub mod style;
pub mod tokens;
pub mod types;

pub use assemble::{assemble, DeckAssembler};
pub use catalog::{resolve_layout, LayoutCatalog};
pub use defaults::DefaultDocument;
pub use error::{Error, Result};
pub use labels::{Field, LabelResolver};
pub use parser::parse_design_document;
pub use producer::{
    convert_design_to_markup, render_deck, render_deck_with, MarkupProducer, TemplateProducer,
};
pub use render::render_slide;
pub use session::{Definitions, Session};
pub use style::generate_stylesheet;
pub use tokens::DesignTokens;
pub use types::{LayoutDefinition, SlideRecord, StructuralKind};

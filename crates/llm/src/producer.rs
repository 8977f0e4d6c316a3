//! Markup producer that delegates to the generation service.

use slidesmith_core::{generate_stylesheet, Definitions, DesignTokens, MarkupProducer};

use crate::client::GeminiClient;

/// Sends the design document, layout catalog and generated stylesheet to the
/// service and returns its markup.
#[derive(Debug, Clone)]
pub struct GenerativeProducer {
    client: GeminiClient,
}

impl GenerativeProducer {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

impl MarkupProducer for GenerativeProducer {
    fn produce(&self, design_doc: &str, definitions: &Definitions) -> slidesmith_core::Result<String> {
        let tokens = DesignTokens::parse_lenient(&definitions.design_tokens);
        let stylesheet = generate_stylesheet(&tokens);

        Ok(self
            .client
            .generate_markup(design_doc, definitions, &stylesheet)?)
    }
}

//! Error types for the slide markup pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the strict document loaders and by markup producers.
///
/// The rendering pipeline itself recovers from every parse error locally;
/// these only reach a caller through the strict `from_yaml` loaders or an
/// external generation service.
#[derive(Error, Debug)]
pub enum Error {
    /// The design tokens document could not be parsed.
    #[error("Design tokens parsing error: {0}")]
    TokensParse(String),

    /// The layout catalog document could not be parsed.
    #[error("Layout catalog parsing error: {0}")]
    CatalogParse(String),

    /// A slide's layout parameter block was not valid JSON.
    #[error("Layout parameter parsing error: {0}")]
    ParamsParse(String),

    /// The external text-generation service failed.
    #[error("Generation service error: {0}")]
    Generation(String),
}

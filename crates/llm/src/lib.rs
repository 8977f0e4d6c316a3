//! Text-generation collaborator for the slide pipeline.
//!
//! Drafts design documents from manuscripts and, as an alternative to the
//! deterministic renderer, asks the service for finished Marp markup.

pub mod client;
pub mod error;
pub mod producer;
pub mod prompt;
pub mod settings;

pub use client::{GeminiClient, DEFAULT_MODEL};
pub use error::{LlmError, Result};
pub use producer::GenerativeProducer;
pub use prompt::strip_code_fence;
pub use settings::GenerationSettings;

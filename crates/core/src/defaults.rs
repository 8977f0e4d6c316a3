//! Built-in default documents.
//!
//! These are what a session starts with and what a reset restores.

use std::fmt;
use std::str::FromStr;

pub const DESIGN_TOKENS: &str = include_str!("../assets/design_tokens.yaml");
pub const LAYOUT_CATALOG: &str = include_str!("../assets/layout_catalog.yaml");
pub const SAMPLE_DESIGN_DOC: &str = include_str!("../assets/sample_design_doc.md");
pub const SAMPLE_MANUSCRIPT: &str = include_str!("../assets/sample_manuscript.md");

/// A named built-in document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultDocument {
    Tokens,
    Catalog,
    Sample,
    Manuscript,
}

impl DefaultDocument {
    pub const ALL: [DefaultDocument; 4] = [
        DefaultDocument::Tokens,
        DefaultDocument::Catalog,
        DefaultDocument::Sample,
        DefaultDocument::Manuscript,
    ];

    /// Look up a document by name. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tokens" | "design-tokens" => Some(Self::Tokens),
            "catalog" | "layouts" | "layout-catalog" => Some(Self::Catalog),
            "sample" | "design-doc" => Some(Self::Sample),
            "manuscript" => Some(Self::Manuscript),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Tokens => "tokens",
            Self::Catalog => "catalog",
            Self::Sample => "sample",
            Self::Manuscript => "manuscript",
        }
    }

    /// The document text.
    pub fn text(self) -> &'static str {
        match self {
            Self::Tokens => DESIGN_TOKENS,
            Self::Catalog => LAYOUT_CATALOG,
            Self::Sample => SAMPLE_DESIGN_DOC,
            Self::Manuscript => SAMPLE_MANUSCRIPT,
        }
    }
}

impl fmt::Display for DefaultDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DefaultDocument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|d| d.name()).collect();
            format!("unknown default document {:?} (expected one of: {})", s, names.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(DefaultDocument::from_name("Tokens"), Some(DefaultDocument::Tokens));
        assert_eq!(DefaultDocument::from_name(" layouts "), Some(DefaultDocument::Catalog));
        assert_eq!(DefaultDocument::from_name("slides"), None);
        assert!("slides".parse::<DefaultDocument>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for doc in DefaultDocument::ALL {
            assert_eq!(doc.name().parse::<DefaultDocument>(), Ok(doc));
            assert!(!doc.text().trim().is_empty());
        }
    }
}

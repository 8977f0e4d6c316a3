//! Design tokens: colours, typography and layout ratios.
//!
//! The tokens document is hand-edited YAML. It is read section by section so
//! a broken `typography` block does not throw away a good `colors` block.

use indexmap::IndexMap;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yml::Value;

use crate::de;
use crate::error::{Error, Result};

/// Colour used when a token reference does not resolve.
pub const DEFAULT_COLOR: &str = "#000000";

/// Parsed design tokens document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignTokens {
    /// Semantic colour name to colour value, in document order.
    pub colors: IndexMap<String, String>,

    pub typography: Typography,

    /// Page areas from `layout.structure`.
    pub areas: Vec<AreaSpec>,
}

/// Font families and per-region text styles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Typography {
    #[serde(default, deserialize_with = "de::opt_scalar_string")]
    pub font_family_ja: Option<String>,

    #[serde(default, deserialize_with = "de::opt_scalar_string")]
    pub font_family_en: Option<String>,

    #[serde(default)]
    pub title_slide: TitleSlideStyles,

    #[serde(default)]
    pub body_slide: BodySlideStyles,
}

/// Text styles for the title slide.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TitleSlideStyles {
    #[serde(default)]
    pub main_title: Option<TextStyle>,
    #[serde(default)]
    pub sub_title: Option<TextStyle>,
}

/// Text styles for body slides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BodySlideStyles {
    #[serde(default)]
    pub page_title: Option<TextStyle>,
    #[serde(default)]
    pub heading1: Option<TextStyle>,
    #[serde(default)]
    pub body_text: Option<TextStyle>,
    #[serde(default)]
    pub small_text: Option<TextStyle>,
}

/// A named text style. All values are kept as CSS-ready strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextStyle {
    #[serde(default, deserialize_with = "de::opt_scalar_string")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "de::opt_scalar_string")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "de::opt_scalar_string")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "de::opt_scalar_string")]
    pub line_height: Option<String>,
}

/// One horizontal band of the page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AreaSpec {
    #[serde(default, deserialize_with = "de::scalar_string")]
    pub area: String,
    #[serde(default)]
    pub height_ratio: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_scalar_string")]
    pub background_color: Option<String>,
}

impl DesignTokens {
    /// Parse a tokens document.
    ///
    /// Fails only when the text is not YAML or its top level is not a
    /// mapping. Problems inside a section are logged and that section (or
    /// entry) falls back to its default.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let root: Value =
            serde_yml::from_str(text).map_err(|e| Error::TokensParse(e.to_string()))?;

        if root.is_null() {
            return Ok(Self::default());
        }
        if !root.is_mapping() {
            return Err(Error::TokensParse(
                "expected a mapping at the top level".to_string(),
            ));
        }

        Ok(Self {
            colors: parse_colors(root.get("colors")),
            typography: parse_section(root.get("typography"), "typography"),
            areas: parse_areas(root.get("layout").and_then(|l| l.get("structure"))),
        })
    }

    /// Parse a tokens document, substituting empty tokens on failure.
    pub fn parse_lenient(text: &str) -> Self {
        Self::from_yaml(text).unwrap_or_else(|e| {
            warn!("{}; using default tokens", e);
            Self::default()
        })
    }

    /// Look up a colour token.
    pub fn color(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    /// Look up a colour token, falling back to [`DEFAULT_COLOR`].
    pub fn color_or_default(&self, key: &str) -> &str {
        self.color(key).unwrap_or(DEFAULT_COLOR)
    }
}

fn parse_colors(section: Option<&Value>) -> IndexMap<String, String> {
    let mut colors = IndexMap::new();
    let Some(section) = section else {
        return colors;
    };
    let Some(mapping) = section.as_mapping() else {
        if !section.is_null() {
            warn!("`colors` is not a mapping; ignoring it");
        }
        return colors;
    };

    for (key, value) in mapping {
        match (key.as_str(), value.as_str()) {
            (Some(k), Some(v)) => {
                colors.insert(k.to_string(), v.trim().to_string());
            }
            _ => warn!("Skipping colour token with a non-string key or value: {:?}", key),
        }
    }

    colors
}

fn parse_section<T: DeserializeOwned + Default>(section: Option<&Value>, name: &str) -> T {
    match section {
        None => T::default(),
        Some(v) if v.is_null() => T::default(),
        Some(v) => serde_yml::from_value(v.clone()).unwrap_or_else(|e| {
            warn!("Invalid `{}` section: {}; using defaults", name, e);
            T::default()
        }),
    }
}

fn parse_areas(section: Option<&Value>) -> Vec<AreaSpec> {
    let Some(items) = section.and_then(Value::as_sequence) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_yml::from_value::<AreaSpec>(item.clone()) {
            Ok(area) if !area.area.trim().is_empty() => Some(area),
            Ok(_) => {
                warn!("Skipping layout area without a name");
                None
            }
            Err(e) => {
                warn!("Skipping invalid layout area: {}", e);
                None
            }
        })
        .collect()
}

//! Domain types for parsed slides and layout patterns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::de;

/// One slide parsed from a design document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    /// Text of the level-2 heading. Empty when the slide has none.
    pub title: String,

    /// Catalog identifier of the applied layout. Empty when unresolved.
    pub layout_id: String,

    /// Override values from the layout parameter block.
    pub params: Map<String, Value>,

    /// Free-text element labels mapped to their values, in discovery order.
    pub elements: IndexMap<String, String>,
}

impl SlideRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the design document named a layout for this slide.
    pub fn has_layout_id(&self) -> bool {
        !self.layout_id.is_empty()
    }

    /// Read a positive count parameter such as `cols` or `steps`.
    ///
    /// Accepts JSON numbers and numeric strings; zero and anything else
    /// count as absent.
    pub fn param_count(&self, key: &str) -> Option<usize> {
        match self.params.get(key)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
                .and_then(|n| usize::try_from(n).ok())
                .filter(|n| *n > 0),
            Value::String(s) => s.trim().parse::<usize>().ok().filter(|n| *n > 0),
            _ => None,
        }
    }

    /// Set an element value, keeping the first position of a repeated label.
    pub fn set_element(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.elements.insert(label.into(), value.into());
    }
}

/// The rendering strategy a layout pattern uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralKind {
    TitleCover,
    ListVertical,
    CenterMessage,
    GridCols,
    SplitImageText,
    SplitContrast,
    FlowHorizontal,
    Timeline,
    Pyramid,
    HubSpoke,
    TableGrid,
    BigNumber,
    VisualCover,
    SplitCodeLeftContext,
    WindowConsole,
    DiagramMermaid,
    StackVerticalCode,
    /// Unknown, empty or unresolved structure.
    Generic,
}

impl StructuralKind {
    /// Map a catalog `structure` tag to a kind. Unrecognized tags are generic.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "title-cover" => Self::TitleCover,
            "list-vertical" => Self::ListVertical,
            "center-message" => Self::CenterMessage,
            "grid-cols" => Self::GridCols,
            "split-image-text" => Self::SplitImageText,
            "split-contrast" => Self::SplitContrast,
            "flow-horizontal" => Self::FlowHorizontal,
            "timeline" => Self::Timeline,
            "pyramid" => Self::Pyramid,
            "hub-spoke" => Self::HubSpoke,
            "table-grid" => Self::TableGrid,
            "big-number" => Self::BigNumber,
            "visual-cover" => Self::VisualCover,
            "split-code-left-context" => Self::SplitCodeLeftContext,
            "window-console" => Self::WindowConsole,
            "diagram-mermaid" => Self::DiagramMermaid,
            "stack-vertical-code" => Self::StackVerticalCode,
            _ => Self::Generic,
        }
    }

    /// The canonical catalog tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::TitleCover => "title-cover",
            Self::ListVertical => "list-vertical",
            Self::CenterMessage => "center-message",
            Self::GridCols => "grid-cols",
            Self::SplitImageText => "split-image-text",
            Self::SplitContrast => "split-contrast",
            Self::FlowHorizontal => "flow-horizontal",
            Self::Timeline => "timeline",
            Self::Pyramid => "pyramid",
            Self::HubSpoke => "hub-spoke",
            Self::TableGrid => "table-grid",
            Self::BigNumber => "big-number",
            Self::VisualCover => "visual-cover",
            Self::SplitCodeLeftContext => "split-code-left-context",
            Self::WindowConsole => "window-console",
            Self::DiagramMermaid => "diagram-mermaid",
            Self::StackVerticalCode => "stack-vertical-code",
            Self::Generic => "generic",
        }
    }

    /// Technical-content subtypes (code, console, diagrams).
    pub fn is_technical(self) -> bool {
        matches!(
            self,
            Self::SplitCodeLeftContext
                | Self::WindowConsole
                | Self::DiagramMermaid
                | Self::StackVerticalCode
        )
    }
}

/// One entry of the layout catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDefinition {
    /// Stable short code, unique within the catalog (e.g. `L03`).
    #[serde(default, deserialize_with = "de::scalar_string")]
    pub id: String,

    /// Human-readable name.
    #[serde(default, deserialize_with = "de::scalar_string")]
    pub name: String,

    /// Structural-kind tag as written in the catalog.
    #[serde(default, deserialize_with = "de::scalar_string")]
    pub structure: String,

    /// Default column count.
    #[serde(default, deserialize_with = "de::opt_count")]
    pub cols: Option<usize>,

    /// Default step count.
    #[serde(default, deserialize_with = "de::opt_count")]
    pub steps: Option<usize>,

    #[serde(default, deserialize_with = "de::scalar_string")]
    pub description: String,

    #[serde(default, deserialize_with = "de::string_list")]
    pub usage_hints: Vec<String>,
}

impl LayoutDefinition {
    /// The definition used when a layout id does not resolve.
    pub const GENERIC: LayoutDefinition = LayoutDefinition {
        id: String::new(),
        name: String::new(),
        structure: String::new(),
        cols: None,
        steps: None,
        description: String::new(),
        usage_hints: Vec::new(),
    };

    /// Structural kind derived from the `structure` tag.
    pub fn kind(&self) -> StructuralKind {
        StructuralKind::from_tag(&self.structure)
    }

    /// The tag to display for this layout, `generic` when none is set.
    pub fn structure_tag(&self) -> &str {
        let tag = self.structure.trim();
        if tag.is_empty() {
            StructuralKind::Generic.tag()
        } else {
            tag
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structural_kind_round_trips_tags() {
        for kind in [
            StructuralKind::TitleCover,
            StructuralKind::GridCols,
            StructuralKind::FlowHorizontal,
            StructuralKind::StackVerticalCode,
        ] {
            assert_eq!(StructuralKind::from_tag(kind.tag()), kind);
        }
    }

    #[test]
    fn test_unknown_structure_is_generic() {
        assert_eq!(StructuralKind::from_tag("radial-burst"), StructuralKind::Generic);
        assert_eq!(StructuralKind::from_tag(""), StructuralKind::Generic);
        assert_eq!(StructuralKind::from_tag(" Grid-Cols "), StructuralKind::GridCols);
    }

    #[test]
    fn test_generic_definition() {
        let layout = LayoutDefinition::GENERIC;
        assert_eq!(layout.kind(), StructuralKind::Generic);
        assert_eq!(layout.structure_tag(), "generic");
        assert_eq!(layout, LayoutDefinition::default());
    }

    #[test]
    fn test_param_count() {
        let mut record = SlideRecord::new();
        record.params.insert("cols".into(), json!(3));
        record.params.insert("steps".into(), json!("4"));
        record.params.insert("zero".into(), json!(0));
        record.params.insert("neg".into(), json!(-2));
        record.params.insert("float".into(), json!(2.0));
        record.params.insert("flag".into(), json!(true));

        assert_eq!(record.param_count("cols"), Some(3));
        assert_eq!(record.param_count("steps"), Some(4));
        assert_eq!(record.param_count("zero"), None);
        assert_eq!(record.param_count("neg"), None);
        assert_eq!(record.param_count("float"), Some(2));
        assert_eq!(record.param_count("flag"), None);
        assert_eq!(record.param_count("missing"), None);
    }

    #[test]
    fn test_set_element_keeps_first_position() {
        let mut record = SlideRecord::new();
        record.set_element("A", "1");
        record.set_element("B", "2");
        record.set_element("A", "3");

        let labels: Vec<&str> = record.elements.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(record.elements["A"], "3");
    }
}

//! Slide renderer: one parsed slide plus its layout becomes Marp markup.
//!
//! Rendering is best effort. Missing elements become visible placeholders
//! and unknown layouts fall back to a generic dump of every element, so a
//! slide never fails to render.

use log::{debug, warn};

use crate::labels::{Field, LabelResolver};
use crate::style::GRID_COLUMNS;
use crate::tokens::DesignTokens;
use crate::types::{LayoutDefinition, SlideRecord, StructuralKind};

/// Placeholder for a numbered slot with no matching element.
pub const NO_CONTENT: &str = "(No Content)";

/// Placeholder body for the text side of an image split.
pub const TEXT_PLACEHOLDER: &str = "Text content goes here.";

/// Placeholder for a big-number slide with no value.
pub const NUMBER_PLACEHOLDER: &str = "100%";

/// Glyph placed between flow steps.
pub const FLOW_ARROW: &str = "→";

/// Upper bound on repeated boxes, steps and tiers.
pub const MAX_REPEAT: usize = 12;

const DEFAULT_COLS: usize = 2;
const DEFAULT_STEPS: usize = 3;
const DEFAULT_TIERS: usize = 3;
const DEFAULT_SPOKES: usize = 4;
const DEFAULT_TABLE_COLS: usize = 4;
const DEFAULT_MILESTONES: usize = 3;

/// Render one slide.
pub fn render_slide(record: &SlideRecord, layout: &LayoutDefinition, tokens: &DesignTokens) -> String {
    SlideRenderer::new(record, layout, tokens).render()
}

/// Rendering context for a single slide.
struct SlideRenderer<'a> {
    record: &'a SlideRecord,
    layout: &'a LayoutDefinition,
    tokens: &'a DesignTokens,
    labels: &'static LabelResolver,
}

impl<'a> SlideRenderer<'a> {
    fn new(record: &'a SlideRecord, layout: &'a LayoutDefinition, tokens: &'a DesignTokens) -> Self {
        Self {
            record,
            layout,
            tokens,
            labels: LabelResolver::shared(),
        }
    }

    fn render(&self) -> String {
        match self.layout.kind() {
            StructuralKind::TitleCover => self.title_cover(),
            StructuralKind::ListVertical => self.list_vertical(),
            StructuralKind::CenterMessage => self.center_message(),
            StructuralKind::GridCols => self.grid_cols(),
            StructuralKind::SplitImageText => self.split_image_text(),
            StructuralKind::SplitContrast => self.split_contrast(),
            StructuralKind::FlowHorizontal => self.flow_horizontal(),
            StructuralKind::Timeline => self.timeline(),
            StructuralKind::Pyramid => self.pyramid(),
            StructuralKind::HubSpoke => self.hub_spoke(),
            StructuralKind::TableGrid => self.table_grid(),
            StructuralKind::BigNumber => self.big_number(),
            StructuralKind::VisualCover => self.visual_cover(),
            kind => {
                if kind.is_technical() {
                    debug!("No template for {} layouts; rendering generically", kind.tag());
                }
                self.generic()
            }
        }
    }

    fn lookup(&self, field: Field) -> Option<&'a str> {
        self.labels.lookup(&self.record.elements, field)
    }

    fn lookup_first(&self, fields: &[Field]) -> Option<&'a str> {
        self.labels.lookup_first(&self.record.elements, fields)
    }

    /// Slide title, falling back to the layout name.
    fn heading(&self) -> &'a str {
        let title = self.record.title.trim();
        if title.is_empty() {
            self.layout.name.trim()
        } else {
            title
        }
    }

    /// `# heading`, or nothing when there is no heading at all.
    fn heading_line(&self) -> Option<String> {
        let heading = self.heading();
        (!heading.is_empty()).then(|| format!("# {}", heading))
    }

    /// Resolve a count: slide parameter, then layout default, then fallback.
    fn count(&self, key: &str, layout_default: Option<usize>, fallback: usize) -> usize {
        let n = self
            .record
            .param_count(key)
            .or(layout_default.filter(|n| *n > 0))
            .unwrap_or(fallback);
        if n > MAX_REPEAT {
            warn!(
                "Slide {:?} asks for {} {}; capping at {}",
                self.heading(),
                n,
                key,
                MAX_REPEAT
            );
            MAX_REPEAT
        } else {
            n
        }
    }

    fn title_cover(&self) -> String {
        let main = self
            .lookup(Field::MainTitle)
            .unwrap_or_else(|| self.heading());

        let mut parts = vec![format!("<!-- _class: title-slide -->\n# {}", main)];
        if let Some(sub) = self.lookup(Field::Subtitle) {
            parts.push(sub.to_string());
        }
        if let Some(presenter) = self.lookup(Field::Presenter) {
            parts.push(format!(
                "<div style=\"position:absolute; bottom:30px; right:30px; font-size:18pt\">\n{}\n</div>",
                presenter
            ));
        }
        join_parts(parts)
    }

    fn list_vertical(&self) -> String {
        let items: Vec<String> = self
            .labels
            .lookup_all(&self.record.elements, Field::ListItem)
            .into_iter()
            .map(|item| format!("- {}", indent_continuation(item, "  ")))
            .collect();

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        if !items.is_empty() {
            parts.push(items.join("\n"));
        }
        join_parts(parts)
    }

    fn center_message(&self) -> String {
        let text = self
            .lookup_first(&[Field::CenterText, Field::Title])
            .unwrap_or_else(|| self.heading());

        let mut parts = vec![format!("<!-- _class: section-divider -->\n# {}", text)];
        if let Some(secondary) = self.lookup(Field::Secondary) {
            parts.push(secondary.to_string());
        }
        join_parts(parts)
    }

    fn grid_cols(&self) -> String {
        let cols = self.count("cols", self.layout.cols, DEFAULT_COLS);

        let boxes: String = (1..=cols)
            .map(|i| {
                let value = self.lookup(Field::Column(i)).unwrap_or(NO_CONTENT);
                format!("<div class=\"box\">\n\n### Point {}\n{}\n</div>\n", i, value)
            })
            .collect();

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(format!("{}\n{}</div>", grid_open(cols), boxes));
        join_parts(parts)
    }

    fn split_image_text(&self) -> String {
        let text = self.lookup(Field::BodyText).unwrap_or(TEXT_PLACEHOLDER);

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(format!(
            "<div class=\"grid-2\">\n\
             <div class=\"flex-col justify-center\">\n\n{}\n</div>\n\
             <div class=\"box center\">\n<!-- Image placeholder -->\n(Image)\n</div>\n\
             </div>",
            text
        ));
        join_parts(parts)
    }

    fn split_contrast(&self) -> String {
        let before = self.lookup(Field::Before).unwrap_or(NO_CONTENT);
        let after = self.lookup(Field::After).unwrap_or(NO_CONTENT);

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(format!(
            "<div class=\"grid-2\">\n\
             <div class=\"box\">\n\n### Before\n{}\n</div>\n\
             <div class=\"box\" style=\"border: 3px solid {}\">\n\n### After\n{}\n</div>\n\
             </div>",
            before,
            self.tokens.color_or_default("primary"),
            after
        ));
        join_parts(parts)
    }

    fn flow_horizontal(&self) -> String {
        let steps = self.count("steps", self.layout.steps, DEFAULT_STEPS);

        let boxes: Vec<String> = (1..=steps)
            .map(|i| {
                let caption = self
                    .lookup(Field::Step(i))
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Step {}", i));
                format!("<div class=\"box center\">\n{}\n</div>\n", caption)
            })
            .collect();
        let separator = format!("<div class=\"center\" style=\"font-size:30px\">{}</div>\n", FLOW_ARROW);

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(format!(
            "<div class=\"flex-row justify-center items-center\">\n{}</div>",
            boxes.join(&separator)
        ));
        join_parts(parts)
    }

    fn timeline(&self) -> String {
        let found = self.labels.lookup_all(&self.record.elements, Field::Milestone);
        let entries: Vec<String> = if found.is_empty() {
            (1..=DEFAULT_MILESTONES).map(|i| format!("Milestone {}", i)).collect()
        } else {
            found.into_iter().take(MAX_REPEAT).map(str::to_string).collect()
        };

        let n = entries.len();
        let mut markup = String::from("<div class=\"timeline\">\n<div class=\"timeline-axis\"></div>\n");
        for (i, entry) in entries.iter().enumerate() {
            let left = format_percent((i as f64 + 0.5) / n as f64 * 100.0);
            markup.push_str(&format!(
                "<div class=\"timeline-marker\" style=\"left:{left}%\"></div>\n\
                 <div class=\"timeline-label\" style=\"left:{left}%\">{}</div>\n",
                entry.replace('\n', "<br>")
            ));
        }
        markup.push_str("</div>");

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(markup);
        join_parts(parts)
    }

    fn pyramid(&self) -> String {
        let tiers = self.count("steps", self.layout.steps, DEFAULT_TIERS);

        let rows: String = (1..=tiers)
            .map(|i| {
                let width = if tiers == 1 {
                    100.0
                } else {
                    30.0 + 70.0 * (i - 1) as f64 / (tiers - 1) as f64
                };
                let value = self.lookup(Field::Tier(i)).unwrap_or(NO_CONTENT);
                format!(
                    "<div class=\"pyramid-tier\" style=\"width:{}%\">{}</div>\n",
                    format_percent(width),
                    value.replace('\n', "<br>")
                )
            })
            .collect();

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(format!("<div class=\"flex-col items-center\">\n{}</div>", rows));
        join_parts(parts)
    }

    fn hub_spoke(&self) -> String {
        let spokes = self.count("steps", self.layout.steps, DEFAULT_SPOKES);
        let hub = self.lookup(Field::Hub).unwrap_or(NO_CONTENT);

        let boxes: String = (1..=spokes)
            .map(|i| {
                let value = self.lookup(Field::Spoke(i)).unwrap_or(NO_CONTENT);
                format!("<div class=\"box center\">\n{}\n</div>\n", value)
            })
            .collect();

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(format!(
            "<div class=\"flex-col items-center\">\n\
             <div class=\"box center hub\">\n{}\n</div>\n\
             {}\n{}</div>\n\
             </div>",
            hub,
            grid_open(spokes),
            boxes
        ));
        join_parts(parts)
    }

    fn table_grid(&self) -> String {
        let cols = self.count("cols", self.layout.cols, DEFAULT_TABLE_COLS);

        let body = if cols == 2 {
            let cells: String = (1..=4)
                .map(|i| {
                    let value = self.lookup(Field::Quadrant(i)).unwrap_or(NO_CONTENT);
                    format!("<div class=\"box\">\n\n{}\n</div>\n", value)
                })
                .collect();
            format!("<div class=\"grid-2\">\n{}</div>", cells)
        } else {
            self.comparison_table(cols)
        };

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(body);
        join_parts(parts)
    }

    /// Markdown table: header from numbered columns, body from numbered rows
    /// whose values are split on `|`.
    fn comparison_table(&self, cols: usize) -> String {
        let rows: Vec<Vec<String>> = (1..=MAX_REPEAT)
            .map_while(|j| self.lookup(Field::Row(j)))
            .map(|row| row.split('|').map(table_cell).collect())
            .collect();

        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        let width = if widest > cols {
            warn!(
                "Table on slide {:?} has rows with {} cells but {} columns; adding columns",
                self.heading(),
                widest,
                cols
            );
            widest.min(MAX_REPEAT)
        } else {
            cols
        };

        let header: Vec<String> = (1..=width)
            .map(|i| match self.lookup(Field::Column(i)) {
                Some(value) => table_cell(value),
                None if i <= cols => NO_CONTENT.to_string(),
                None => String::new(),
            })
            .collect();

        let mut lines = vec![
            format!("| {} |", header.join(" | ")),
            format!("|{}", "---|".repeat(width)),
        ];

        for mut cells in rows {
            cells.resize(width, String::new());
            lines.push(format!("| {} |", cells.join(" | ")));
        }

        lines.join("\n")
    }

    fn big_number(&self) -> String {
        let value = self.lookup(Field::NumericValue).unwrap_or(NUMBER_PLACEHOLDER);

        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(format!(
            "<div class=\"center\" style=\"font-size: 100pt; color: {}; font-weight: bold;\">\n{}\n</div>",
            self.tokens.color_or_default("primary"),
            value
        ));
        join_parts(parts)
    }

    fn visual_cover(&self) -> String {
        let mut markup = String::from(
            "<!-- _class: section-divider -->\n<!-- Background image placeholder -->",
        );
        if let Some(heading) = self.heading_line() {
            markup.push('\n');
            markup.push_str(&heading);
        }
        markup
    }

    /// Heading, structure tag, then every element as `label: value`.
    fn generic(&self) -> String {
        let mut parts: Vec<String> = self.heading_line().into_iter().collect();
        parts.push(format!("(Structure: {})", self.layout.structure_tag()));

        let lines: Vec<String> = self
            .record
            .elements
            .iter()
            .map(|(label, value)| format!("- **{}**: {}", label, indent_continuation(value, "  ")))
            .collect();
        if !lines.is_empty() {
            parts.push(lines.join("\n"));
        }
        join_parts(parts)
    }
}

/// Opening tag of an `n`-column grid.
fn grid_open(cols: usize) -> String {
    if GRID_COLUMNS.contains(&cols) {
        format!("<div class=\"grid-{}\">", cols)
    } else {
        format!(
            "<div style=\"display: grid; grid-template-columns: repeat({}, 1fr); gap: 20px;\">",
            cols
        )
    }
}

fn join_parts(parts: Vec<String>) -> String {
    parts.join("\n\n")
}

/// Indent every line after the first so multi-line values stay inside a
/// Markdown list item.
fn indent_continuation(value: &str, indent: &str) -> String {
    value
        .trim()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(&format!("\n{}", indent))
}

fn table_cell(text: &str) -> String {
    text.trim().replace('\n', "<br>").replace('|', "\\|")
}

/// Percentage with at most one decimal place.
fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout(structure: &str) -> LayoutDefinition {
        LayoutDefinition {
            id: "X01".into(),
            name: "Layout Name".into(),
            structure: structure.into(),
            ..LayoutDefinition::default()
        }
    }

    fn record(title: &str, pairs: &[(&str, &str)]) -> SlideRecord {
        let mut record = SlideRecord::new();
        record.title = title.into();
        for (k, v) in pairs {
            record.set_element(*k, *v);
        }
        record
    }

    fn tokens() -> DesignTokens {
        DesignTokens::from_yaml("colors:\n  primary: \"#0052CC\"\n").unwrap()
    }

    #[test]
    fn test_title_cover() {
        let rec = record(
            "Slide 1",
            &[("メインタイトル", "Hello"), ("サブタイトル", "World"), ("右下情報", "2025 / Team")],
        );
        let out = render_slide(&rec, &layout("title-cover"), &tokens());

        assert!(out.starts_with("<!-- _class: title-slide -->\n# Hello"));
        assert!(out.contains("\n\nWorld\n\n"));
        assert!(out.contains("bottom:30px"));
        assert!(out.contains("2025 / Team"));
    }

    #[test]
    fn test_title_cover_falls_back_to_record_title() {
        let out = render_slide(&record("Deck", &[]), &layout("title-cover"), &tokens());
        assert_eq!(out, "<!-- _class: title-slide -->\n# Deck");
    }

    #[test]
    fn test_list_vertical_in_discovery_order() {
        let rec = record(
            "Agenda",
            &[("リスト項目2", "Second"), ("画面構成", "skip"), ("リスト項目1", "First\nmore")],
        );
        let out = render_slide(&rec, &layout("list-vertical"), &tokens());

        assert_eq!(out, "# Agenda\n\n- Second\n- First\n  more");
    }

    #[test]
    fn test_center_message() {
        let rec = record("Chapter", &[("中央テキスト", "1. Background"), ("サブ", "Why now")]);
        let out = render_slide(&rec, &layout("center-message"), &tokens());

        assert!(out.starts_with("<!-- _class: section-divider -->\n# 1. Background"));
        assert!(out.ends_with("Why now"));
    }

    #[test]
    fn test_grid_cols_placeholder_for_missing_column() {
        let mut rec = record("Benefits", &[("ポイント1", "Speed"), ("ポイント3", "Quality")]);
        rec.params.insert("cols".into(), json!(3));
        let out = render_slide(&rec, &layout("grid-cols"), &tokens());

        assert_eq!(out.matches("<div class=\"box\">").count(), 3);
        assert!(out.contains("<div class=\"grid-3\">"));
        assert!(out.contains("### Point 2\n(No Content)"));
        assert!(out.contains("Speed"));
        assert!(out.contains("Quality"));
    }

    #[test]
    fn test_count_precedence() {
        let mut grid = layout("grid-cols");
        grid.cols = Some(4);

        let rec = record("T", &[]);
        let out = render_slide(&rec, &grid, &tokens());
        assert_eq!(out.matches("class=\"box\"").count(), 4);

        let mut rec = record("T", &[]);
        rec.params.insert("cols".into(), json!(2));
        let out = render_slide(&rec, &grid, &tokens());
        assert_eq!(out.matches("class=\"box\"").count(), 2);

        let out = render_slide(&record("T", &[]), &layout("grid-cols"), &tokens());
        assert_eq!(out.matches("class=\"box\"").count(), DEFAULT_COLS);
    }

    #[test]
    fn test_wide_grids_use_inline_columns() {
        let mut rec = record("T", &[]);
        rec.params.insert("cols".into(), json!(7));
        let out = render_slide(&rec, &layout("grid-cols"), &tokens());

        assert!(out.contains("repeat(7, 1fr)"));
        assert_eq!(out.matches("class=\"box\"").count(), 7);
    }

    #[test]
    fn test_counts_are_capped() {
        let mut rec = record("T", &[]);
        rec.params.insert("steps".into(), json!(1000));
        let out = render_slide(&rec, &layout("flow-horizontal"), &tokens());

        assert_eq!(out.matches(FLOW_ARROW).count(), MAX_REPEAT - 1);
    }

    #[test]
    fn test_flow_separators() {
        let mut rec = record("Flow", &[("Step 1", "Receive"), ("Step 3", "Approve")]);
        rec.params.insert("steps".into(), json!(4));
        let out = render_slide(&rec, &layout("flow-horizontal"), &tokens());

        assert_eq!(out.matches(FLOW_ARROW).count(), 3);
        assert_eq!(out.matches("<div class=\"box center\">").count(), 4);
        assert!(out.contains("Receive"));
        assert!(out.contains("<div class=\"box center\">\nStep 2\n</div>"));
        assert!(out.ends_with("<div class=\"box center\">\nStep 4\n</div>\n</div>"));
    }

    #[test]
    fn test_split_image_text() {
        let out = render_slide(&record("Demo", &[]), &layout("split-image-text"), &tokens());
        assert!(out.contains(TEXT_PLACEHOLDER));
        assert!(out.contains("(Image)"));

        let rec = record("Demo", &[("説明", "A product shot")]);
        let out = render_slide(&rec, &layout("split-image-text"), &tokens());
        assert!(out.contains("A product shot"));
        assert!(!out.contains(TEXT_PLACEHOLDER));
    }

    #[test]
    fn test_split_contrast() {
        let rec = record("Change", &[("Before", "Manual"), ("After", "Automated")]);
        let out = render_slide(&rec, &layout("split-contrast"), &tokens());

        assert!(out.contains("### Before\nManual"));
        assert!(out.contains("### After\nAutomated"));
        assert!(out.contains("border: 3px solid #0052CC"));
    }

    #[test]
    fn test_timeline_markers_evenly_spaced() {
        let rec = record("Roadmap", &[("Phase 1", "Plan"), ("Phase 2", "Build")]);
        let out = render_slide(&rec, &layout("timeline"), &tokens());

        assert_eq!(out.matches("class=\"timeline-marker\"").count(), 2);
        assert!(out.contains("left:25%"));
        assert!(out.contains("left:75%"));
        assert!(out.contains(">Plan</div>"));
    }

    #[test]
    fn test_timeline_placeholder_markers() {
        let out = render_slide(&record("Roadmap", &[]), &layout("timeline"), &tokens());

        assert_eq!(out.matches("class=\"timeline-marker\"").count(), DEFAULT_MILESTONES);
        assert!(out.contains("left:16.7%"));
        assert!(out.contains("left:50%"));
    }

    #[test]
    fn test_pyramid() {
        let rec = record("Layers", &[("階層1", "Vision"), ("階層3", "Operations")]);
        let out = render_slide(&rec, &layout("pyramid"), &tokens());

        assert_eq!(out.matches("class=\"pyramid-tier\"").count(), 3);
        assert!(out.contains("width:30%\">Vision"));
        assert!(out.contains("width:65%\">(No Content)"));
        assert!(out.contains("width:100%\">Operations"));
    }

    #[test]
    fn test_hub_spoke() {
        let rec = record("Ecosystem", &[("中心", "Platform"), ("要素1", "Billing")]);
        let out = render_slide(&rec, &layout("hub-spoke"), &tokens());

        assert!(out.contains("<div class=\"box center hub\">\nPlatform\n</div>"));
        assert!(out.contains("<div class=\"grid-4\">"));
        assert_eq!(out.matches(NO_CONTENT).count(), 3);
    }

    #[test]
    fn test_table_grid_matrix() {
        let mut matrix = layout("table-grid");
        matrix.cols = Some(2);
        let rec = record("SWOT", &[("象限1", "Strengths"), ("象限4", "Threats")]);
        let out = render_slide(&rec, &matrix, &tokens());

        assert_eq!(out.matches("<div class=\"box\">").count(), 4);
        assert!(out.contains("Strengths"));
        assert!(out.contains("Threats"));
    }

    #[test]
    fn test_table_grid_comparison() {
        let mut table = layout("table-grid");
        table.cols = Some(3);
        let rec = record(
            "Plans",
            &[
                ("列1", "Feature"),
                ("列2", "Basic"),
                ("列3", "Pro"),
                ("行1", "Support | Email | 24/7"),
                ("行2", "SSO | -"),
            ],
        );
        let out = render_slide(&rec, &table, &tokens());

        assert!(out.contains("| Feature | Basic | Pro |\n|---|---|---|"));
        assert!(out.contains("| Support | Email | 24/7 |"));
        assert!(out.contains("| SSO | - |  |"));
    }

    #[test]
    fn test_table_grid_keeps_extra_row_cells() {
        let mut table = layout("table-grid");
        table.cols = Some(3);
        let rec = record(
            "Plans",
            &[("列1", "Feature"), ("列2", "Basic"), ("列3", "Pro"), ("行1", "SSO | No | Yes | Beta")],
        );
        let out = render_slide(&rec, &table, &tokens());

        assert!(out.contains("| Feature | Basic | Pro |  |\n|---|---|---|---|"));
        assert!(out.contains("| SSO | No | Yes | Beta |"));
    }

    #[test]
    fn test_big_number() {
        let out = render_slide(&record("KPI", &[]), &layout("big-number"), &tokens());
        assert!(out.contains("\n100%\n"));
        assert!(out.contains("color: #0052CC"));

        let rec = record("KPI", &[("数値", "2x")]);
        let out = render_slide(&rec, &layout("big-number"), &tokens());
        assert!(out.contains("\n2x\n"));
    }

    #[test]
    fn test_visual_cover() {
        let out = render_slide(&record("Vision", &[("x", "y")]), &layout("visual-cover"), &tokens());
        assert!(out.starts_with("<!-- _class: section-divider -->"));
        assert!(out.ends_with("# Vision"));
        assert!(!out.contains("**x**"));
    }

    #[test]
    fn test_generic_keeps_every_element() {
        let rec = record("", &[("Reason", "line one\nline two"), ("Note", "kept")]);
        let out = render_slide(&rec, &LayoutDefinition::GENERIC, &tokens());

        assert_eq!(
            out,
            "(Structure: generic)\n\n- **Reason**: line one\n  line two\n- **Note**: kept"
        );
    }

    #[test]
    fn test_unknown_and_technical_kinds_render_generically() {
        let rec = record("Code", &[("Snippet", "fn main() {}")]);

        let out = render_slide(&rec, &layout("window-console"), &tokens());
        assert!(out.contains("(Structure: window-console)"));
        assert!(out.contains("- **Snippet**: fn main() {}"));

        let out = render_slide(&rec, &layout("radial-burst"), &tokens());
        assert!(out.contains("(Structure: radial-burst)"));
    }

    #[test]
    fn test_empty_title_falls_back_to_layout_name() {
        let out = render_slide(&record("", &[]), &layout("list-vertical"), &tokens());
        assert_eq!(out, "# Layout Name");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(25.0), "25");
        assert_eq!(format_percent(100.0 / 6.0), "16.7");
    }
}

//! Stylesheet generation from design tokens.
//!
//! Produces one shared stylesheet: base page rules, heading scale, layout
//! utility classes, and the two composite rules (title slide and section
//! divider) that need token-driven colour inversion.

use crate::tokens::{DesignTokens, TextStyle};

/// Base body font size in points.
const BASE_FONT_PT: f64 = 24.0;

/// Heading scale relative to the base size, with the colour token each uses.
const HEADING_SCALE: &[(&str, f64, &str)] = &[
    ("h1", 4.0 / 3.0, "primary"),
    ("h2", 7.0 / 6.0, "primary"),
    ("h3", 1.0, "base_text"),
];

/// Column counts that get a shared `.grid-N` class.
pub const GRID_COLUMNS: std::ops::RangeInclusive<usize> = 2..=5;

const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

/// Generate the stylesheet for a set of design tokens.
///
/// Pure and total: missing tokens degrade to fixed fallbacks.
pub fn generate_stylesheet(tokens: &DesignTokens) -> String {
    let sections = [
        base_rules(tokens),
        heading_rules(tokens),
        utility_rules(),
        title_slide_rules(tokens),
        section_divider_rules(tokens),
        diagram_rules(tokens),
        area_rules(tokens),
        color_utility_rules(tokens),
    ];

    sections
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn base_rules(tokens: &DesignTokens) -> String {
    let mut decls: Vec<String> = tokens
        .colors
        .iter()
        .map(|(name, value)| format!("  --{}: {};", css_ident(name), value))
        .collect();

    decls.push(format!(
        "  background-color: {};",
        tokens.color_or_default("base_background")
    ));
    decls.push(format!("  color: {};", tokens.color_or_default("base_text")));
    decls.push(format!("  font-family: {};", font_family_list(tokens)));
    decls.push("  padding: 40px 60px;".to_string());
    decls.push(format!("  font-size: {}pt;", format_number(BASE_FONT_PT)));

    format!("/* Base */\nsection {{\n{}\n}}", decls.join("\n"))
}

fn heading_rules(tokens: &DesignTokens) -> String {
    let rules: Vec<String> = HEADING_SCALE
        .iter()
        .map(|(tag, ratio, color)| {
            format!(
                "{} {{ font-size: {}pt; color: {}; }}",
                tag,
                format_number((BASE_FONT_PT * ratio).round()),
                tokens.color_or_default(color)
            )
        })
        .collect();

    format!("/* Headings */\n{}", rules.join("\n"))
}

fn utility_rules() -> String {
    let mut rules = vec![
        "/* Layout utilities */".to_string(),
        ".center { text-align: center; }".to_string(),
    ];

    for cols in GRID_COLUMNS {
        let gap = match cols {
            2 => 40,
            3 => 30,
            4 => 20,
            _ => 15,
        };
        rules.push(format!(
            ".grid-{cols} {{ display: grid; grid-template-columns: repeat({cols}, 1fr); gap: {gap}px; align-items: start; height: 100%; }}"
        ));
    }

    rules.extend(
        [
            ".box { background: #f8f9fa; padding: 20px; border-radius: 8px; height: 100%; }",
            ".flex-col { display: flex; flex-direction: column; gap: 20px; }",
            ".flex-row { display: flex; flex-direction: row; gap: 20px; }",
            ".items-center { align-items: center; }",
            ".justify-center { justify-content: center; }",
        ]
        .map(String::from),
    );

    rules.join("\n")
}

fn title_slide_rules(tokens: &DesignTokens) -> String {
    let title = &tokens.typography.title_slide;
    let main = title.main_title.as_ref();
    let sub = title.sub_title.as_ref();

    let main_decls = text_decls(
        main,
        "48pt",
        tokens.color_or_default("base_text"),
        &["margin-bottom: 20px;"],
    );
    let sub_decls = text_decls(sub, "24pt", tokens.color_or_default("primary"), &[]);

    format!(
        "/* Title slide */\n\
         .title-slide {{ display: flex; flex-direction: column; justify-content: center; text-align: center; height: 100%; }}\n\
         .title-slide h1 {{ {} }}\n\
         .title-slide p {{ {} }}",
        main_decls, sub_decls
    )
}

fn section_divider_rules(tokens: &DesignTokens) -> String {
    let fill = tokens.color_or_default("primary");
    let ink = tokens.color_or_default("base_background");

    format!(
        "/* Section divider */\n\
         .section-divider {{ background-color: {fill}; color: {ink}; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center; }}\n\
         .section-divider h1, .section-divider h2 {{ color: {ink}; }}"
    )
}

fn diagram_rules(tokens: &DesignTokens) -> String {
    let primary = tokens.color_or_default("primary");
    let ink = tokens.color_or_default("base_background");

    format!(
        "/* Diagrams */\n\
         .timeline {{ position: relative; height: 200px; margin-top: 40px; }}\n\
         .timeline-axis {{ position: absolute; top: 50%; left: 0; right: 0; height: 4px; background: {primary}; }}\n\
         .timeline-marker {{ position: absolute; top: 50%; width: 20px; height: 20px; border-radius: 50%; background: {primary}; transform: translate(-50%, -50%); }}\n\
         .timeline-label {{ position: absolute; top: calc(50% + 24px); transform: translateX(-50%); text-align: center; font-size: 16pt; }}\n\
         .pyramid-tier {{ background: {primary}; color: {ink}; text-align: center; padding: 12px; margin: 0 auto; }}\n\
         .hub {{ border: 3px solid {primary}; font-weight: bold; }}"
    )
}

fn area_rules(tokens: &DesignTokens) -> String {
    if tokens.areas.is_empty() {
        return String::new();
    }

    let rules: Vec<String> = tokens
        .areas
        .iter()
        .map(|area| {
            let mut decls = Vec::new();
            if let Some(ratio) = area.height_ratio {
                let pct = (ratio * 100.0 * 100.0).round() / 100.0;
                decls.push(format!("height: {}%;", format_number(pct)));
            }
            if let Some(bg) = &area.background_color {
                decls.push(format!("background-color: {};", bg));
            }
            format!(".area-{} {{ {} }}", css_ident(&area.area), decls.join(" "))
        })
        .collect();

    format!("/* Page areas */\n{}", rules.join("\n"))
}

fn color_utility_rules(tokens: &DesignTokens) -> String {
    format!(
        "/* Utility colours */\n\
         .text-primary {{ color: {}; }}\n\
         .text-accent {{ color: {}; }}\n\
         .bg-primary {{ background-color: {}; color: white; }}",
        tokens.color_or_default("primary"),
        tokens.color_or_default("accent"),
        tokens.color_or_default("primary"),
    )
}

/// Declarations for a text style, with fallbacks for size and colour.
fn text_decls(style: Option<&TextStyle>, size: &str, color: &str, extra: &[&str]) -> String {
    let mut decls = vec![
        format!(
            "font-size: {};",
            style.and_then(|s| s.size.as_deref()).unwrap_or(size)
        ),
        format!(
            "color: {};",
            style.and_then(|s| s.color.as_deref()).unwrap_or(color)
        ),
    ];
    if let Some(weight) = style.and_then(|s| s.weight.as_deref()) {
        decls.push(format!("font-weight: {};", weight));
    }
    if let Some(line_height) = style.and_then(|s| s.line_height.as_deref()) {
        decls.push(format!("line-height: {};", line_height));
    }
    decls.extend(extra.iter().map(|d| d.to_string()));
    decls.join(" ")
}

/// Build a CSS font-family list from the Japanese and Latin family tokens.
///
/// Each named family is quoted on its own, duplicates are dropped, and
/// generic families move to the end of the list.
fn font_family_list(tokens: &DesignTokens) -> String {
    let typography = &tokens.typography;
    let mut named: Vec<String> = Vec::new();
    let mut generic: Vec<String> = Vec::new();

    for list in [&typography.font_family_ja, &typography.font_family_en]
        .into_iter()
        .flatten()
    {
        for raw in list.split(',') {
            let name = raw.trim().trim_matches(|c| c == '"' || c == '\'').trim();
            if name.is_empty() {
                continue;
            }
            let lower = name.to_ascii_lowercase();
            let (bucket, entry) = if GENERIC_FAMILIES.contains(&lower.as_str()) {
                (&mut generic, lower)
            } else {
                (&mut named, format!("\"{}\"", name))
            };
            if !bucket.contains(&entry) {
                bucket.push(entry);
            }
        }
    }

    named.append(&mut generic);
    if named.is_empty() {
        return "sans-serif".to_string();
    }
    named.join(", ")
}

/// Reduce a token name to characters valid in a CSS identifier.
fn css_ident(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Format a number without a trailing `.0`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tokens() -> DesignTokens {
        DesignTokens::from_yaml(crate::defaults::DESIGN_TOKENS).unwrap()
    }

    #[test]
    fn test_stylesheet_is_deterministic() {
        let tokens = default_tokens();
        assert_eq!(generate_stylesheet(&tokens), generate_stylesheet(&tokens));
    }

    #[test]
    fn test_base_rules_use_tokens() {
        let css = generate_stylesheet(&default_tokens());

        assert!(css.contains("background-color: #FFFFFF;"));
        assert!(css.contains("color: #333333;"));
        assert!(css.contains("--primary: #0052CC;"));
        assert!(css.contains("font-size: 24pt;"));
    }

    #[test]
    fn test_heading_scale() {
        let css = generate_stylesheet(&default_tokens());

        assert!(css.contains("h1 { font-size: 32pt; color: #0052CC; }"));
        assert!(css.contains("h2 { font-size: 28pt; color: #0052CC; }"));
        assert!(css.contains("h3 { font-size: 24pt; color: #333333; }"));
    }

    #[test]
    fn test_grid_utilities() {
        let css = generate_stylesheet(&DesignTokens::default());
        for cols in 2..=5 {
            assert!(css.contains(&format!(".grid-{} {{", cols)));
        }
        assert!(!css.contains(".grid-6"));
        assert!(css.contains(".box {"));
        assert!(css.contains(".flex-row {"));
    }

    #[test]
    fn test_composite_rules() {
        let css = generate_stylesheet(&default_tokens());

        assert!(css.contains(
            ".title-slide h1 { font-size: 48pt; color: #333333; font-weight: bold; margin-bottom: 20px; }"
        ));
        assert!(css.contains(".title-slide p { font-size: 24pt; color: #0052CC; font-weight: normal; }"));
        assert!(css.contains(".section-divider { background-color: #0052CC; color: #FFFFFF;"));
    }

    #[test]
    fn test_empty_tokens_fall_back() {
        let css = generate_stylesheet(&DesignTokens::default());

        assert!(css.contains("color: #000000;"));
        assert!(css.contains("font-family: sans-serif;"));
        assert!(css.contains(".title-slide h1 { font-size: 48pt; color: #000000;"));
        assert!(!css.contains("/* Page areas */"));
    }

    #[test]
    fn test_font_family_list() {
        let css = generate_stylesheet(&default_tokens());
        assert!(css.contains(
            "font-family: \"Noto Sans JP\", \"Hiragino Kaku Gothic ProN\", \"Meiryo\", \"Roboto\", \"Helvetica Neue\", \"Arial\", sans-serif;"
        ));
    }

    #[test]
    fn test_area_rules() {
        let css = generate_stylesheet(&default_tokens());
        assert!(css.contains(".area-header { height: 10%; background-color: #FFFFFF; }"));
        assert!(css.contains(".area-body { height: 85%; background-color: #FFFFFF; }"));
        assert!(css.contains(".area-footer { height: 5%; background-color: #F4F5F7; }"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(32.0), "32");
        assert_eq!(format_number(1.5), "1.5");
    }
}

//! End-to-end scenarios over the public pipeline.

use slidesmith_core::{
    assemble, convert_design_to_markup, defaults, generate_stylesheet, parse_design_document,
    render_slide, DesignTokens, LayoutCatalog,
};

const TOKENS: &str = "colors:\n  primary: \"#0052CC\"\n  base_text: \"#333333\"\n";

const CATALOG: &str = "\
- id: S01
  name: Title
  structure: title-cover
- id: L03
  name: Three points
  structure: grid-cols
  cols: 3
- id: P01
  name: Process
  structure: flow-horizontal
";

#[test]
fn test_title_slide_round_trip() {
    let doc = "## Deck\n* **適用レイアウトパターンID:** `S01`\n* **メインタイトル:** Hello\n";
    let out = convert_design_to_markup(doc, TOKENS, CATALOG);

    let body_start = out.find("<!-- _class: title-slide -->").unwrap();
    let (header, body) = out.split_at(body_start);
    assert!(header.starts_with("---\nmarp: true\n"));
    assert!(header.contains("#0052CC"));
    assert!(body.starts_with("<!-- _class: title-slide -->\n# Hello"));
}

#[test]
fn test_grid_with_missing_point() {
    let doc = "## Benefits\n\
               * **適用レイアウトパターンID:** `L03`\n\
               * **ポイント1:** Speed\n\
               * **ポイント3:** Quality\n";
    let out = convert_design_to_markup(doc, TOKENS, CATALOG);

    assert_eq!(out.matches("<div class=\"box\">").count(), 3);
    assert_eq!(out.matches("(No Content)").count(), 1);
}

#[test]
fn test_flow_params_override_catalog() {
    let doc = "## Process\n\
               * **適用レイアウトパターンID:** `P01`\n\
               * **レイアウト・パラメータ:** `{ \"steps\": 4 }`\n";
    let out = convert_design_to_markup(doc, TOKENS, CATALOG);

    assert_eq!(out.matches("→").count(), 3);
}

#[test]
fn test_empty_document() {
    let out = convert_design_to_markup("", TOKENS, CATALOG);

    assert_eq!(out, assemble(&[], &generate_stylesheet(&DesignTokens::parse_lenient(TOKENS))));
    assert!(out.ends_with("---\n"));
    assert!(!out.contains("\n\n---\n\n"));
}

#[test]
fn test_rendering_is_idempotent() {
    let first = convert_design_to_markup(
        defaults::SAMPLE_DESIGN_DOC,
        defaults::DESIGN_TOKENS,
        defaults::LAYOUT_CATALOG,
    );
    let second = convert_design_to_markup(
        defaults::SAMPLE_DESIGN_DOC,
        defaults::DESIGN_TOKENS,
        defaults::LAYOUT_CATALOG,
    );

    assert_eq!(first, second);
}

#[test]
fn test_one_fragment_per_segment() {
    for n in 1..=6 {
        let doc: Vec<String> = (1..=n).map(|i| format!("## Slide {}", i)).collect();
        let doc = doc.join("\n---\n");
        let out = convert_design_to_markup(&doc, "", "");

        assert_eq!(parse_design_document(&doc).len(), n);
        assert_eq!(out.matches("\n\n---\n\n").count(), n - 1);
    }
}

#[test]
fn test_sample_document_renders_every_slide() {
    let tokens = DesignTokens::from_yaml(defaults::DESIGN_TOKENS).unwrap();
    let catalog = LayoutCatalog::from_yaml(defaults::LAYOUT_CATALOG).unwrap();
    let records = parse_design_document(defaults::SAMPLE_DESIGN_DOC);

    let slides: Vec<String> = records
        .iter()
        .map(|r| render_slide(r, catalog.resolve(&r.layout_id), &tokens))
        .collect();

    assert_eq!(slides.len(), 6);
    assert!(slides[0].contains("(Structure: generic)"));
    assert!(slides[1].starts_with("<!-- _class: title-slide -->"));
    assert!(slides[2].contains("\n- "));
    assert!(slides[3].starts_with("<!-- _class: section-divider -->"));
    assert_eq!(slides[4].matches("→").count(), 3);
    assert!(slides[5].contains("「コスト（Cost）」"));
}

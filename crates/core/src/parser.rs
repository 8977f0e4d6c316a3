//! Design document parser.
//!
//! A design document is Markdown written by a language model: slides are
//! separated by a line holding only `---`, and each slide carries a level-2
//! heading, a backtick-quoted layout id, an optional JSON parameter block,
//! and bold-labelled bullet lines for its elements.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::SlideRecord;

/// The line that separates slides.
pub const SLIDE_SEPARATOR: &str = "---";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Label of the applied-layout-id line.
static LAYOUT_ID_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\s*(?:適用レイアウトパターンID|(?i:layout\s*(?:pattern\s*)?id))\s*[:：]\s*\*\*")
        .unwrap()
});

/// Label of the layout-parameter line.
static LAYOUT_PARAMS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\*\*\s*(?:レイアウト・?パラメータ|(?i:layout\s*param(?:eter)?s?))\s*[:：]\s*\*\*",
    )
    .unwrap()
});

/// Backtick-quoted layout identifier.
static BACKTICK_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([A-Za-z0-9]+)`").unwrap());

/// Bullet with a bold `key:` prefix.
static ELEMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-]\s*\*\*([^*]+?)\s*[:：]\s*\*\*\s*(.*)$").unwrap());

/// Parse a design document into slide records, one per non-empty segment.
pub fn parse_design_document(text: &str) -> Vec<SlideRecord> {
    let slides: Vec<SlideRecord> = split_segments(text)
        .iter()
        .map(|segment| parse_slide(segment))
        .collect();

    debug!("Parsed {} slides from design document", slides.len());
    slides
}

/// Split a document on separator lines, dropping empty segments.
///
/// A leading byte-order mark is ignored.
pub fn split_segments(text: &str) -> Vec<String> {
    let text = text.trim_start_matches(BYTE_ORDER_MARK);
    let mut segments = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim_end() == SLIDE_SEPARATOR {
            segments.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    segments.push(current.join("\n"));

    segments
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse one slide segment.
///
/// Each line is classified by the first matching rule: heading, layout id,
/// parameter block, element, continuation. Anything else is ignored.
pub fn parse_slide(segment: &str) -> SlideRecord {
    let mut record = SlideRecord::new();
    let mut current_key: Option<String> = None;

    for raw in segment.trim_start_matches(BYTE_ORDER_MARK).lines() {
        let line = raw.trim();

        if let Some(title) = line.strip_prefix("## ") {
            record.title = title.trim().to_string();
        } else if LAYOUT_ID_LABEL.is_match(line) {
            if let Some(caps) = BACKTICK_ID.captures(line) {
                record.layout_id = caps[1].to_string();
            }
        } else if let Some(label) = LAYOUT_PARAMS_LABEL.find(line) {
            match parse_params(&line[label.end()..]) {
                Ok(params) => record.params = params,
                Err(e) => warn!("{}: {:?}", e, line),
            }
        } else if let Some(caps) = ELEMENT_LINE.captures(line) {
            let key = caps[1].trim().to_string();
            record.set_element(key.clone(), caps[2].trim());
            current_key = Some(key);
        } else if let (Some(text), Some(key)) = (continuation_text(line), current_key.as_ref()) {
            if let Some(value) = record.elements.get_mut(key) {
                value.push('\n');
                value.push_str(text);
            }
        }
    }

    record
}

/// Parse the text after a parameter label as a JSON object.
pub fn parse_params(raw: &str) -> Result<serde_json::Map<String, Value>> {
    let json = raw.replace('`', "");
    match serde_json::from_str::<Value>(json.trim()) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::ParamsParse(format!(
            "expected a JSON object, got {}",
            other
        ))),
        Err(e) => Err(Error::ParamsParse(e.to_string())),
    }
}

/// Text of a plain bullet line that continues the previous element.
fn continuation_text(line: &str) -> Option<&str> {
    if line.contains("**") {
        return None;
    }
    if line.starts_with('*') {
        Some(line.trim_start_matches(|c: char| c == '*' || c.is_whitespace()))
    } else {
        line.strip_prefix("- ").map(str::trim)
    }
}

//! Heuristic lookup of slide elements by semantic field.
//!
//! Element labels are written by a language model, so they drift between
//! languages, spellings and widths ("ポイント１", "Point 1", "point1"). Each
//! field owns an ordered list of label stems. A lookup tries the stems in
//! order and, for each stem, the labels in document order; the first label
//! with a non-empty value wins.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A semantic field a renderer asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MainTitle,
    Subtitle,
    Presenter,
    ListItem,
    CenterText,
    Title,
    Secondary,
    BodyText,
    NumericValue,
    Before,
    After,
    Hub,
    /// Any numbered timeline entry.
    Milestone,
    Column(usize),
    Step(usize),
    Tier(usize),
    Spoke(usize),
    Quadrant(usize),
    Row(usize),
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Fixed(Field),
    Numbered(fn(usize) -> Field),
}

/// Ordered stems per field. Stems are lowercase; a space matches any run
/// of whitespace, `_` or `-`.
const RULES: &[(Rule, &[&str])] = &[
    (Rule::Fixed(Field::MainTitle), &["メインタイトル", "main title"]),
    (Rule::Fixed(Field::Subtitle), &["サブタイトル", "sub title", "subtitle"]),
    (Rule::Fixed(Field::Presenter), &["右下情報", "発表者", "presenter", "speaker", "author"]),
    (Rule::Fixed(Field::ListItem), &["リスト", "list"]),
    (Rule::Fixed(Field::CenterText), &["中央テキスト", "center text", "centre text"]),
    (Rule::Fixed(Field::Title), &["タイトル", "title"]),
    (Rule::Fixed(Field::Secondary), &["サブ", "sub"]),
    (Rule::Fixed(Field::BodyText), &["テキスト", "説明", "本文", "text", "description", "body"]),
    (Rule::Fixed(Field::NumericValue), &["数値", "数字", "number", "value", "kpi", "figure"]),
    (Rule::Fixed(Field::Before), &["before", "ビフォー", "導入前", "現状", "左", "left"]),
    (Rule::Fixed(Field::After), &["after", "アフター", "導入後", "右", "right"]),
    (Rule::Fixed(Field::Hub), &["中心", "中央", "hub", "center", "core"]),
    (Rule::Numbered(Field::Column), &["列", "カラム", "ポイント", "column", "col", "point"]),
    (Rule::Numbered(Field::Step), &["ステップ", "手順", "工程", "step"]),
    (Rule::Numbered(Field::Tier), &["階層", "レベル", "段", "tier", "level", "layer"]),
    (Rule::Numbered(Field::Spoke), &["要素", "周辺", "spoke", "node", "satellite"]),
    (Rule::Numbered(Field::Quadrant), &["象限", "セル", "quadrant", "cell"]),
    (Rule::Numbered(Field::Row), &["行", "row"]),
];

/// Stems for timeline entries; matched with any trailing number.
const MILESTONE_STEMS: &[&str] = &["マイルストーン", "フェーズ", "時期", "milestone", "phase", "stage"];

static SHARED: LazyLock<LabelResolver> = LazyLock::new(LabelResolver::new);

/// Rule-based resolver from semantic fields to element values.
#[derive(Debug, Clone)]
pub struct LabelResolver {
    fixed: Vec<(Field, Regex)>,
    /// One pattern per numbered stem; group 1 captures the number.
    numbered: Vec<(Field, Regex)>,
}

impl Default for LabelResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelResolver {
    /// Build a resolver with the built-in rule table.
    pub fn new() -> Self {
        let mut fixed = Vec::new();
        let mut numbered = Vec::new();

        for (rule, stems) in RULES {
            for stem in stems.iter() {
                let pattern = stem_pattern(stem);
                match rule {
                    Rule::Fixed(field) => fixed.push((*field, compile(&pattern))),
                    // Any index identifies the rule's field family.
                    Rule::Numbered(make) => numbered.push((
                        make(0),
                        compile(&format!(r"{}\s*[#№]?\s*0*(\d+)(?:\D|$)", pattern)),
                    )),
                }
            }
        }
        for stem in MILESTONE_STEMS {
            let pattern = format!(r"{}\s*#?\s*\d+", stem_pattern(stem));
            fixed.push((Field::Milestone, compile(&pattern)));
        }

        Self { fixed, numbered }
    }

    /// The process-wide resolver used by the renderer.
    pub fn shared() -> &'static LabelResolver {
        &SHARED
    }

    /// Find the value for a field, or `None` when no label matches.
    ///
    /// Fixed fields prefer earlier stems; numbered fields take the first
    /// matching label in document order.
    pub fn lookup<'a>(&self, elements: &'a IndexMap<String, String>, field: Field) -> Option<&'a str> {
        let normalized: Vec<(String, &str)> = normalized_entries(elements)
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();

        match field.index() {
            None => self
                .fixed
                .iter()
                .filter(|(f, _)| *f == field)
                .find_map(|(_, re)| {
                    normalized
                        .iter()
                        .find(|(label, _)| re.is_match(label))
                        .map(|(_, value)| *value)
                }),
            Some(_) => normalized
                .iter()
                .find(|(label, _)| self.label_matches(label, field))
                .map(|(_, value)| *value),
        }
    }

    /// Try several fields in order and return the first hit.
    pub fn lookup_first<'a>(
        &self,
        elements: &'a IndexMap<String, String>,
        fields: &[Field],
    ) -> Option<&'a str> {
        fields.iter().find_map(|field| self.lookup(elements, *field))
    }

    /// All non-empty values whose label matches a field, in document order.
    pub fn lookup_all<'a>(&self, elements: &'a IndexMap<String, String>, field: Field) -> Vec<&'a str> {
        normalized_entries(elements)
            .into_iter()
            .filter(|(label, value)| !value.trim().is_empty() && self.label_matches(label, field))
            .map(|(_, value)| value)
            .collect()
    }

    /// Whether an already normalised label matches a field.
    fn label_matches(&self, label: &str, field: Field) -> bool {
        match field.index() {
            None => self
                .fixed
                .iter()
                .any(|(f, re)| *f == field && re.is_match(label)),
            Some(n) => self
                .numbered
                .iter()
                .filter(|(f, _)| f.same_family(field))
                .any(|(_, re)| {
                    re.captures_iter(label)
                        .any(|caps| caps[1].parse::<usize>().ok() == Some(n))
                }),
        }
    }
}

impl Field {
    /// The number carried by a numbered field.
    pub fn index(self) -> Option<usize> {
        match self {
            Field::Column(n)
            | Field::Step(n)
            | Field::Tier(n)
            | Field::Spoke(n)
            | Field::Quadrant(n)
            | Field::Row(n) => Some(n),
            _ => None,
        }
    }

    fn same_family(self, other: Field) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }
}

/// NFKC-fold and lowercase a label so width and case variants compare equal.
pub fn normalize_label(label: &str) -> String {
    label.nfkc().collect::<String>().to_lowercase()
}

fn normalized_entries(elements: &IndexMap<String, String>) -> Vec<(String, &str)> {
    elements
        .iter()
        .map(|(label, value)| (normalize_label(label), value.as_str()))
        .collect()
}

fn stem_pattern(stem: &str) -> String {
    stem.split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[\s_-]*")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("label patterns are built from escaped stems")
}

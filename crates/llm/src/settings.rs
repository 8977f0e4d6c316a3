//! User-tunable generation settings.

/// Lowest accepted slider value.
pub const MIN_LEVEL: u8 = 1;
/// Highest accepted slider value.
pub const MAX_LEVEL: u8 = 5;
/// Value every setting starts at.
pub const DEFAULT_LEVEL: u8 = 3;

const DETAIL_LABELS: [&str; 3] = ["Concise summary", "Standard detail", "Comprehensive"];
const VISUAL_LABELS: [&str; 3] = ["Text-heavy", "Balanced", "Visual-first"];
const TONE_LABELS: [&str; 3] = ["Casual", "Professional", "Formal"];

/// Three 1-5 sliders steering the design document the service drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    pub detail: u8,
    pub visual: u8,
    pub tone: u8,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            detail: DEFAULT_LEVEL,
            visual: DEFAULT_LEVEL,
            tone: DEFAULT_LEVEL,
        }
    }
}

impl GenerationSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detail(mut self, level: u8) -> Self {
        self.detail = clamp_level(level);
        self
    }

    pub fn with_visual(mut self, level: u8) -> Self {
        self.visual = clamp_level(level);
        self
    }

    pub fn with_tone(mut self, level: u8) -> Self {
        self.tone = clamp_level(level);
        self
    }

    pub fn detail_label(&self) -> &'static str {
        level_label(self.detail, &DETAIL_LABELS)
    }

    pub fn visual_label(&self) -> &'static str {
        level_label(self.visual, &VISUAL_LABELS)
    }

    pub fn tone_label(&self) -> &'static str {
        level_label(self.tone, &TONE_LABELS)
    }

    /// The instruction block appended to the design-document prompt.
    pub fn instruction(&self) -> String {
        format!(
            "SETTINGS PRIORITY:\n\
             - Detail Level: {}\n\
             - Visual Ratio: {}\n\
             - Tone: {}\n",
            self.detail_label(),
            self.visual_label(),
            self.tone_label()
        )
    }
}

fn clamp_level(level: u8) -> u8 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// 1-2 pick the low label, 3 the middle one, 4-5 the high one.
fn level_label(level: u8, labels: &[&'static str; 3]) -> &'static str {
    match level {
        0..=2 => labels[0],
        3 => labels[1],
        _ => labels[2],
    }
}

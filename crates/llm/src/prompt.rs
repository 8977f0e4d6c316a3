//! Prompt text for the two generation calls.

use slidesmith_core::Definitions;

use crate::settings::GenerationSettings;

const DESIGN_DOC_SYSTEM: &str = "\
You are a professional presentation designer.
Using the manuscript and the design and layout definitions provided, plan the best slide structure.

## Inputs
1. Manuscript: the full text to turn into slides.
2. Design definitions: tone, fonts and colour rules.
3. Layout definitions: the available layout patterns (id and purpose).
4. Sample: the required output format.

## Task
Split the manuscript into a suitable number of slides. For every slide choose the most effective
layout pattern id and describe the elements that layout needs (title, body text, diagram notes).

## Constraints
* Always use ids that exist in the layout definitions (S01, D01, ...).
* Always follow the Markdown format of the sample exactly.
* Build slides that communicate, not a plain summary of the manuscript.
* Output only the design document, without any reasoning.
";

const MARKUP_SYSTEM: &str = "\
You are an expert Marp (Markdown Presentation Ecosystem) engineer.
Turn the slide design document into complete, valid Marp Markdown using the provided definitions.

## Inputs
1. Slide design document: structure, titles, layout ids and element instructions per slide.
2. Layout definitions: the structure each id (S01, C01, ...) stands for.
3. CSS theme: the base stylesheet already generated; embed it in the front matter.

## Task
Convert the design document from top to bottom into Marp slides separated by `---`.
Build HTML structure (`<div class=\"...\">`) that matches each slide's layout id and structure.

## Rules
1. Start with this front matter:
   ---
   marp: true
   theme: default
   size: 16:9
   paginate: true
   style: |
     (the CSS theme, embedded verbatim)
   ---
2. Use the utility classes the theme already defines (.grid-2, .box, .flex-row, .text-primary, ...)
   for anything other than plain text slides.
3. Output only the Markdown. Do not wrap it in a code block and do not add commentary.
";

/// A system instruction plus the user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Prompt asking for a design document from a manuscript.
pub fn design_doc_prompt(
    manuscript: &str,
    definitions: &Definitions,
    settings: &GenerationSettings,
) -> Prompt {
    let user = format!(
        "# Manuscript\n{}\n\n\
         # Design definitions\n{}\n\n\
         # Layout definitions\n{}\n\n\
         # Sample (use this format)\n{}\n\n\
         # Generation settings from the user (highest priority)\n{}",
        manuscript.trim(),
        definitions.design_tokens.trim(),
        definitions.layout_catalog.trim(),
        definitions.sample_design_doc.trim(),
        settings.instruction()
    );

    Prompt {
        system: DESIGN_DOC_SYSTEM.to_string(),
        user,
    }
}

/// Prompt asking for final markup from a design document.
pub fn markup_prompt(design_doc: &str, definitions: &Definitions, stylesheet: &str) -> Prompt {
    let user = format!(
        "# Slide design document\n{}\n\n\
         # Layout definitions (YAML)\n{}\n\n\
         # Base CSS theme (embed in the style block)\n{}\n",
        design_doc.trim(),
        definitions.layout_catalog.trim(),
        stylesheet.trim()
    );

    Prompt {
        system: MARKUP_SYSTEM.to_string(),
        user,
    }
}

/// Remove a Markdown code fence wrapped around the whole response.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text
        .strip_prefix("```markdown\n")
        .or_else(|| text.strip_prefix("```\n"))
        .unwrap_or(text);
    text.strip_suffix("\n```").unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_doc_prompt_sections() {
        let definitions = Definitions {
            design_tokens: "colors: {}".into(),
            layout_catalog: "- id: S01".into(),
            sample_design_doc: "## Sample".into(),
        };
        let prompt = design_doc_prompt("  Our plan  ", &definitions, &GenerationSettings::default());

        assert!(prompt.system.contains("layout pattern id"));
        assert!(prompt.user.starts_with("# Manuscript\nOur plan\n\n# Design definitions\ncolors: {}"));
        assert!(prompt.user.contains("# Layout definitions\n- id: S01"));
        assert!(prompt.user.contains("# Sample (use this format)\n## Sample"));
        assert!(prompt.user.ends_with("- Tone: Professional\n"));
    }

    #[test]
    fn test_markup_prompt_embeds_stylesheet() {
        let prompt = markup_prompt("## Slide", &Definitions::default(), "h1 { color: red; }\n");

        assert!(prompt.system.contains("paginate: true"));
        assert!(prompt.user.contains("# Slide design document\n## Slide"));
        assert!(prompt.user.ends_with("h1 { color: red; }\n"));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```markdown\n---\nmarp: true\n```"), "---\nmarp: true");
        assert_eq!(strip_code_fence("```\n# A\n```"), "# A");
        assert_eq!(strip_code_fence("# A"), "# A");
        assert_eq!(strip_code_fence("# A\n```"), "# A");
    }
}

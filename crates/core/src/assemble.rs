//! Marp document assembly.
//!
//! Produces a front-matter header that embeds the stylesheet, followed by the
//! slide fragments separated by `---` lines.

/// Separator placed between slide fragments.
pub const SLIDE_BREAK: &str = "\n\n---\n\n";

/// Builder for the document header and slide joining.
#[derive(Debug, Clone)]
pub struct DeckAssembler {
    theme: String,
    size: String,
    paginate: bool,
}

impl Default for DeckAssembler {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            size: "16:9".to_string(),
            paginate: true,
        }
    }
}

impl DeckAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different Marp theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Use a different slide size, e.g. `4:3`.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_paginate(mut self, paginate: bool) -> Self {
        self.paginate = paginate;
        self
    }

    /// Front matter with the stylesheet embedded as a literal block.
    ///
    /// The `style` key is omitted when the stylesheet is blank.
    pub fn header(&self, stylesheet: &str) -> String {
        let mut header = format!(
            "---\nmarp: true\ntheme: {}\nsize: {}\npaginate: {}\n",
            self.theme, self.size, self.paginate
        );

        if !stylesheet.trim().is_empty() {
            header.push_str("style: |\n");
            for line in stylesheet.trim_end().lines() {
                if line.trim().is_empty() {
                    header.push('\n');
                } else {
                    header.push_str("  ");
                    header.push_str(line);
                    header.push('\n');
                }
            }
        }

        header.push_str("---\n");
        header
    }

    /// Header followed by every slide, with no separator after the last.
    pub fn assemble(&self, slides: &[String], stylesheet: &str) -> String {
        let header = self.header(stylesheet);
        if slides.is_empty() {
            return header;
        }
        format!("{}\n{}\n", header, slides.join(SLIDE_BREAK))
    }
}

/// Assemble with the default header settings.
pub fn assemble(slides: &[String], stylesheet: &str) -> String {
    DeckAssembler::new().assemble(slides, stylesheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_embeds_indented_stylesheet() {
        let out = assemble(&[], "section {\n  color: #333;\n}\n\nh1 { x: y; }");

        assert_eq!(
            out,
            "---\nmarp: true\ntheme: default\nsize: 16:9\npaginate: true\n\
             style: |\n  section {\n    color: #333;\n  }\n\n  h1 { x: y; }\n---\n"
        );
    }

    #[test]
    fn test_empty_stylesheet_omits_style_key() {
        let out = assemble(&["# One".to_string()], "  \n");

        assert!(!out.contains("style:"));
        assert_eq!(
            out,
            "---\nmarp: true\ntheme: default\nsize: 16:9\npaginate: true\n---\n\n# One\n"
        );
    }

    #[test]
    fn test_slides_joined_without_trailing_separator() {
        let slides = vec!["# A".to_string(), "# B".to_string(), "# C".to_string()];
        let out = assemble(&slides, "h1 { color: red; }");

        assert_eq!(out.matches(SLIDE_BREAK).count(), 2);
        assert!(out.ends_with("# C\n"));
        assert!(out.contains("# A\n\n---\n\n# B"));
    }

    #[test]
    fn test_empty_deck_is_header_only() {
        let out = assemble(&[], "h1 { color: red; }");

        assert!(out.ends_with("  h1 { color: red; }\n---\n"));
        assert_eq!(out.matches("---").count(), 2);
    }

    #[test]
    fn test_builder_options() {
        let header = DeckAssembler::new()
            .with_theme("gaia")
            .with_size("4:3")
            .with_paginate(false)
            .header("");

        assert_eq!(header, "---\nmarp: true\ntheme: gaia\nsize: 4:3\npaginate: false\n---\n");
    }
}

//! GFM markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Markdown to HTML renderer.
///
/// GFM is enabled by default. When enabled, the parser supports:
/// - Tables
/// - Strikethrough (`~~text~~`)
/// - Task lists (`- [ ] item`)
/// - Autolinks and the rest of the GFM extension set
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    gfm: bool,
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM enabled by default.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render markdown text to an HTML string.
    ///
    /// The caller is expected to have split off any frontmatter first; a
    /// leading `---` block would otherwise render as a thematic break plus
    /// literal text.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let mut output = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut output, parser);
        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_paragraph() {
        let html = MarkdownRenderer::new().render("Hello world");

        assert_eq!(html, "<p>Hello world</p>\n");
    }

    #[test]
    fn test_render_heading_and_emphasis() {
        let html = MarkdownRenderer::new().render("# Title\n\n**bold**");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_gfm_table() {
        let markdown = "| a | b |\n|---|---|\n| 1 | 2 |";

        let html = MarkdownRenderer::new().render(markdown);

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_gfm_strikethrough() {
        let html = MarkdownRenderer::new().render("~~removed~~");

        assert!(html.contains("<del>removed</del>"));
    }

    #[test]
    fn test_gfm_disabled() {
        let renderer = MarkdownRenderer::new().with_gfm(false);

        let html = renderer.render("~~not struck~~");

        assert!(!html.contains("<del>"));
        assert_eq!(renderer.parser_options(), Options::empty());
    }

    #[test]
    fn test_render_tamil_text() {
        let html = MarkdownRenderer::new().render("# தமிழ்\n\nவணக்கம்");

        assert!(html.contains("<h1>தமிழ்</h1>"));
        assert!(html.contains("<p>வணக்கம்</p>"));
    }

}

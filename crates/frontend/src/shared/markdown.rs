//! Markdown rendering for bot messages.

use pulldown_cmark::{html, Options, Parser};

/// Render assistant markdown to an HTML fragment for `inner_html`.
///
/// User text is never passed through here; it renders as plain text.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paragraph() {
        assert_eq!(render_markdown("hello"), "<p>hello</p>\n");
    }

    #[test]
    fn renders_emphasis_and_lists() {
        let html = render_markdown("You get **15 days**.\n\n- PTO\n- Sick leave");
        assert!(html.contains("<strong>15 days</strong>"));
        assert!(html.contains("<li>PTO</li>"));
        assert!(html.contains("<li>Sick leave</li>"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_markdown(""), "");
    }
}

//! Markdown rendering for assistant answers
//!
//! Raw HTML in the source is escaped and shown as text, and links or images
//! with a script-capable scheme lose their target, so backend output cannot
//! inject markup into the page.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    !UNSAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}

fn neutralize(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Render Markdown to an HTML fragment
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: neutralize(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: neutralize(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_and_lists() {
        let html = render_markdown("**Revenue** grew:\n\n- Q1\n- Q2");
        assert!(html.contains("<strong>Revenue</strong>"));
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>Q1</li>"));
        assert!(!html.contains("**"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("Hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let block = render_markdown("<div onclick=\"x()\">hi</div>");
        assert!(!block.contains("<div"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = render_markdown("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"#\""));

        let ok = render_markdown("[docs](https://example.com/a)");
        assert!(ok.contains("href=\"https://example.com/a\""));
    }

    #[test]
    fn test_plain_text_is_a_paragraph() {
        assert_eq!(render_markdown("Just text"), "<p>Just text</p>\n");
    }
}

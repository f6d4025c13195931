//! Markdown Rendering
//!
//! Chat replies and trend analyses come from a language model and often use
//! markdown. They are rendered with pulldown-cmark with two restrictions:
//! - raw HTML in the source is shown as text
//! - links and images only keep http(s), mailto and relative targets

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Render untrusted markdown to HTML that is safe for `inner_html`
pub fn render_reply(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(sanitize);
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim().to_lowercase();
    let has_scheme = lower
        .split_once(':')
        .map(|(scheme, _)| !scheme.contains('/') && !scheme.contains('?') && !scheme.contains('#'))
        .unwrap_or(false);

    let allowed = !has_scheme
        || lower.starts_with("http:")
        || lower.starts_with("https:")
        || lower.starts_with("mailto:");

    if allowed {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render_reply("**Stay hydrated** and ~~skip~~ rest.");
        assert!(html.contains("<strong>Stay hydrated</strong>"));
        assert!(html.contains("<del>skip</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_reply("Hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unsafe_links_are_neutralized() {
        let html = render_reply("[click](javascript:alert(1)) and [who](https://www.who.int) and [faq](/faq)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r#"href="https://www.who.int""#));
        assert!(html.contains(r#"href="/faq""#));
    }
}

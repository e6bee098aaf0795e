// HTML page assembly
pub mod bun_page;
pub mod coverage_page;

pub use bun_page::{render_bun_page, render_local_redirect_page, render_message_page, BunPage};
pub use coverage_page::render_coverage_page;

/// Stylesheet linked from every page
pub const STYLESHEET: &str = "/static/style.css";

/// Script that sends the browser to `/{its IANA timezone}`
pub const TZ_REDIRECT_SCRIPT: &str = "/static/tz_redirect.js";

/// Escape text for safe interpolation into HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap a body in the shared document skeleton
fn document(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html>",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{title}</title>",
            "<link rel=\"stylesheet\" href=\"{stylesheet}\">",
            "</head>",
            "<body>{body}</body>",
            "</html>"
        ),
        title = escape_html(title),
        stylesheet = STYLESHEET,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("Bnuuy"), "Bnuuy");
    }

    #[test]
    fn test_document_links_stylesheet() {
        let html = document("Bun <3", "<p>hi</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Bun &lt;3</title>"));
        assert!(html.contains(STYLESHEET));
        assert!(html.contains("<body><p>hi</p></body>"));
    }
}

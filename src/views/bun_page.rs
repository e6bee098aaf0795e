use crate::models::Entry;
use crate::views::{document, escape_html, TZ_REDIRECT_SCRIPT};

/// Everything needed to render the page for one bun
#[derive(Debug, Clone)]
pub struct BunPage<'a> {
    pub entry: &'a Entry,
    /// Name already resolved from the entry or the fallbacks
    pub name: &'a str,
    /// Formatted time, eg "3:05 PM"
    pub time: String,
}

/// Full-screen bun photo with "<name> says that it is <time>"
pub fn render_bun_page(page: &BunPage<'_>) -> String {
    let entry = page.entry;
    let name = escape_html(page.name);
    let time = escape_html(&page.time);

    let credits = entry
        .attribution
        .as_ref()
        .map(|source| {
            format!(
                "<span class=\"shadow\"><a href=\"{}\" target=\"_blank\">{}</a></span>",
                escape_html(&source.url),
                escape_html(&source.credit()),
            )
        })
        .unwrap_or_default();

    let body = format!(
        concat!(
            "<div class=\"background-container\">",
            "<img id=\"bun-img\" style=\"--crop-focus-x: {focus_x}; --crop-focus-y: {focus_y}\" ",
            "src=\"/static/buns/{src}\" ",
            "alt=\"{name}&#x27;s ears are telling the time like an analog clock, and say that the time is {time}\">",
            "</div>",
            "<div class=\"center\"><main>",
            "<h1 class=\"shadow\">{name} says that it is <span class=\"no-wrap\">{time}</span></h1>",
            "{credits}",
            "</main></div>"
        ),
        focus_x = entry.focus_x,
        focus_y = entry.focus_y,
        src = escape_html(&entry.id),
        name = name,
        time = time,
        credits = credits,
    );

    document(&format!("{} says that it is {}", page.name, page.time), &body)
}

/// Simple page carrying a single message, used for "no match" and errors
pub fn render_message_page(message: &str) -> String {
    let body = format!(
        "<div class=\"center\"><main><h1 class=\"shadow\">{}</h1></main></div>",
        escape_html(message)
    );
    document(message, &body)
}

/// Hands off to the browser's timezone, linking the fallback zone without scripts
pub fn render_local_redirect_page(fallback_zone: &str) -> String {
    let body = format!(
        concat!(
            "<div class=\"center\"><main><h1 class=\"shadow\">",
            "Finding your timezone... <a href=\"/{zone}\">or see {zone}</a>",
            "</h1></main></div>",
            "<script src=\"{script}\"></script>"
        ),
        zone = escape_html(fallback_zone),
        script = TZ_REDIRECT_SCRIPT,
    );
    document("Bnuuy Time", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribution;

    #[test]
    fn test_render_bun_page() {
        let mut entry = Entry::new("biscuit.jpg", 300, 60).with_attribution(Attribution {
            platform: "Reddit".to_string(),
            author: "hoom".to_string(),
            url: "https://example.com/post".to_string(),
        });
        entry.focus_y = 0.25;

        let html = render_bun_page(&BunPage {
            entry: &entry,
            name: "Biscuit",
            time: "10:10 AM".to_string(),
        });

        assert!(html.contains("src=\"/static/buns/biscuit.jpg\""));
        assert!(html.contains("--crop-focus-x: 0.5; --crop-focus-y: 0.25"));
        assert!(html.contains("Biscuit says that it is <span class=\"no-wrap\">10:10 AM</span>"));
        assert!(html.contains("say that the time is 10:10 AM"));
        assert!(html.contains("<a href=\"https://example.com/post\" target=\"_blank\">hoom on Reddit</a>"));
    }

    #[test]
    fn test_render_bun_page_without_credit_escapes_name() {
        let entry = Entry::new("a.jpg", 0, 0);
        let html = render_bun_page(&BunPage {
            entry: &entry,
            name: "<script>",
            time: "12:00 PM".to_string(),
        });

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt; says that it is"));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_render_message_page() {
        let html = render_message_page("No matching buns at 6:00 PM :(");
        assert!(html.contains("<h1 class=\"shadow\">No matching buns at 6:00 PM :(</h1>"));
    }
}

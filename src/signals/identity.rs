//! Store identity extraction: logo URL and display name.

use dom_query::{Document, Selection};

/// Selectors for the store logo image, most specific first.
const LOGO_SELECTORS: [&str; 3] = [
    "img[class*='logo']",
    "[class*='logo'] img",
    "img[alt*='logo']",
];

/// Extracts the store logo URL from the anchored segment, then the whole
/// document, defaulting to a deterministic external favicon URL.
#[must_use]
pub fn logo_url(segment_html: &str, full_html: &str, domain: &str) -> String {
    for html in [segment_html, full_html] {
        let doc = Document::from(html);
        for selector in LOGO_SELECTORS {
            if let Some(src) = first_http_src(&doc, selector) {
                return src;
            }
        }
    }
    format!("https://www.google.com/s2/favicons?domain={domain}&sz=64")
}

/// Extracts the store display name from the page heading nearest the domain
/// anchor, defaulting to the raw domain string.
#[must_use]
pub fn store_name(segment_html: &str, full_html: &str, domain: &str) -> String {
    for html in [segment_html, full_html] {
        let doc = Document::from(html);
        for node in doc.select("h1").nodes() {
            let text = Selection::from(*node).text().trim().to_string();
            if !text.is_empty() && text.len() < 120 {
                return text;
            }
        }
    }
    domain.to_string()
}

fn first_http_src(doc: &Document, selector: &str) -> Option<String> {
    for node in doc.select(selector).nodes() {
        let sel = Selection::from(*node);
        if let Some(src) = sel.attr("src") {
            let src = src.trim().to_string();
            if src.starts_with("http://") || src.starts_with("https://") {
                return Some(src);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_from_class() {
        let html = r#"<img class="store-logo" src="https://cdn.acme.com/logo.png">"#;
        assert_eq!(logo_url(html, html, "acme.com"), "https://cdn.acme.com/logo.png");
    }

    #[test]
    fn logo_defaults_to_favicon_service() {
        assert_eq!(
            logo_url("<div></div>", "<div></div>", "acme.com"),
            "https://www.google.com/s2/favicons?domain=acme.com&sz=64"
        );
    }

    #[test]
    fn relative_logo_src_is_rejected() {
        let html = r#"<img class="logo" src="/static/logo.png">"#;
        assert_eq!(
            logo_url(html, html, "acme.com"),
            "https://www.google.com/s2/favicons?domain=acme.com&sz=64"
        );
    }

    #[test]
    fn name_from_heading() {
        let html = r#"<h1 class="store-title">Acme</h1>"#;
        assert_eq!(store_name(html, html, "acme.com"), "Acme");
    }

    #[test]
    fn name_defaults_to_domain() {
        assert_eq!(store_name("<p>no heading</p>", "<p>no heading</p>", "acme.com"), "acme.com");
    }
}

//! Text normalization.
//!
//! Produces the flattened visible-text view of a store-page document used by
//! the regex-based extractors: markup stripped, entities decoded, whitespace
//! collapsed, known UI noise removed.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `<script>`/`<style>` blocks including their content.
#[allow(clippy::expect_used)]
static SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("SCRIPT_STYLE regex")
});

/// Matches any remaining tag.
#[allow(clippy::expect_used)]
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG regex"));

/// Matches trailing "+N more" counters, a UI affordance rather than content.
#[allow(clippy::expect_used)]
static MORE_COUNTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\+\s*\d+\s+more\b").expect("MORE_COUNTER regex"));

/// Matches runs of whitespace for collapsing.
#[allow(clippy::expect_used)]
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Named and numeric entities emitted by the source, decoded in one pass.
/// `&amp;` is decoded last so entity-encoded ampersands cannot cascade into
/// a second decode.
const ENTITIES: [(&str, &str); 9] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&#x27;", "'"),
    ("&#x2F;", "/"),
    ("&#x60;", "`"),
    ("&#x3D;", "="),
    ("&amp;", "&"),
];

/// Flattens an HTML document into normalized visible text.
///
/// Removes `<script>`/`<style>` blocks and all remaining tags (each replaced
/// by a single space), decodes the standard entities used by the source,
/// strips trailing "+N more" counters, and collapses whitespace. Never fails;
/// an empty input yields an empty string.
#[must_use]
pub fn normalize(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = SCRIPT_STYLE.replace_all(html, " ");
    let text = TAG.replace_all(&text, " ");

    let mut text = text.replace("&nbsp;", " ");
    for (entity, plain) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, plain);
        }
    }

    let text = MORE_COUNTER.replace_all(&text, " ");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scripts_styles_and_tags() {
        let html = r#"<html><head><style>.a{color:red}</style></head>
            <body><script>var x = "<div>";</script><p>Free <b>delivery</b></p></body></html>"#;
        assert_eq!(normalize(html), "Free delivery");
    }

    #[test]
    fn decodes_source_entities() {
        assert_eq!(normalize("Fast &amp; free"), "Fast & free");
        assert_eq!(normalize("a &lt;b&gt; c &quot;d&quot;"), "a <b> c \"d\"");
        assert_eq!(normalize("it&#39;s it&#x27;s a&#x2F;b x&#x3D;1"), "it's it's a/b x=1");
    }

    #[test]
    fn amp_decodes_without_cascading() {
        // "&amp;lt;" is a literal "&lt;" in the page text, not a "<".
        assert_eq!(normalize("&amp;lt;"), "&lt;");
    }

    #[test]
    fn removes_more_counters() {
        assert_eq!(normalize("PayPal, Klarna +3 more"), "PayPal, Klarna");
        assert_eq!(normalize("Visa + 12 MORE accepted"), "Visa accepted");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(normalize("  a \n\t b  "), "a b");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }
}

//! Structural (DOM) query layer.
//!
//! Resolves an ordered table of enumerated locators against a parsed document
//! and gates every match behind a per-field legitimacy predicate. The source
//! page's structure is not a stable contract: each locator targets a
//! different structural variant observed in practice, and none may be assumed
//! present. The predicate is the real correctness gate — structural locators
//! can match decorative or unrelated nodes.

use dom_query::{Document, NodeRef, Selection};

use crate::patterns;

/// A structural locator, most specific variants first in each field table.
///
/// This is a narrow, hard-coded mapping for a handful of known page shapes,
/// not a general query engine.
#[derive(Debug, Clone, Copy)]
pub enum Locator {
    /// Element under a known id, e.g. `#shipping div`.
    ByIdPath {
        /// Id of the containing element.
        id: &'static str,
        /// CSS path below that element.
        path: &'static str,
    },
    /// Element whose class contains a token, taking the next element
    /// sibling with the given tag.
    ByClassSibling {
        /// Class-name substring of the label element.
        class: &'static str,
        /// Tag name the value sibling must have.
        sibling_tag: &'static str,
    },
    /// Element whose own text equals a header label, taking the next
    /// element sibling's text.
    ByTextSibling {
        /// Header label, matched case-insensitively against trimmed text.
        header: &'static str,
    },
    /// Plain CSS selector, first match.
    ByCss(&'static str),
}

/// Field type selecting which legitimacy predicate gates a structural match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Shipping/delivery details.
    Shipping,
    /// Return policy details.
    Returns,
    /// Payment method details.
    Payments,
    /// A per-section quality grade.
    Grade,
}

impl FieldKind {
    /// Allow-list check for text a locator matched. Text failing this is
    /// discarded and the next locator in the table is tried.
    #[must_use]
    pub fn is_legitimate(self, text: &str) -> bool {
        match self {
            Self::Shipping => patterns::SHIPPING_LEGIT.is_match(text),
            Self::Returns => patterns::RETURNS_LEGIT.is_match(text),
            Self::Payments => patterns::PAYMENTS_LEGIT.is_match(text),
            Self::Grade => canonical_grade(text).is_some(),
        }
    }
}

/// Ordered locator table for shipping details.
pub static SHIPPING_LOCATORS: &[Locator] = &[
    Locator::ByIdPath { id: "shipping", path: "div" },
    Locator::ByTextSibling { header: "Shipping" },
    Locator::ByClassSibling { class: "shipping", sibling_tag: "div" },
    Locator::ByCss("[data-attrid*='shipping']"),
];

/// Ordered locator table for return-policy details.
pub static RETURNS_LOCATORS: &[Locator] = &[
    Locator::ByIdPath { id: "returns", path: "div" },
    Locator::ByTextSibling { header: "Returns" },
    Locator::ByClassSibling { class: "return", sibling_tag: "div" },
    Locator::ByCss("[data-attrid*='return']"),
];

/// Ordered locator table for payment-method details.
pub static PAYMENTS_LOCATORS: &[Locator] = &[
    Locator::ByIdPath { id: "payments", path: "div" },
    Locator::ByTextSibling { header: "Payment options" },
    Locator::ByClassSibling { class: "payment", sibling_tag: "div" },
    Locator::ByCss("[data-attrid*='payment']"),
];

/// The five canonical section grade labels, in display casing.
pub const GRADE_WORDS: [&str; 5] = ["Exceptional", "Great", "Good", "Fair", "Poor"];

/// Maps arbitrary text to a canonical grade word, or `None` if the text is
/// not exactly one of the five labels (case-insensitive).
#[must_use]
pub fn canonical_grade(text: &str) -> Option<&'static str> {
    let trimmed = text.trim();
    GRADE_WORDS
        .iter()
        .find(|grade| grade.eq_ignore_ascii_case(trimmed))
        .copied()
}

/// Resolves an ordered locator table against an HTML segment.
///
/// Locators are evaluated in order; the first whose matched text passes the
/// legitimacy predicate for `kind` wins. Ties resolve to first-in-order,
/// never best-scoring. Returns an empty string when nothing legitimate
/// matches.
#[must_use]
pub fn query_field(html_segment: &str, locators: &[Locator], kind: FieldKind) -> String {
    let doc = Document::from(html_segment);
    for locator in locators {
        if let Some(text) = resolve(&doc, locator) {
            let text = collapse_ws(&text);
            if !text.is_empty() && kind.is_legitimate(&text) {
                return text;
            }
        }
    }
    String::new()
}

/// Looks up the grade for one section header.
///
/// Finds a node whose text is the header label and returns its sibling's
/// label only if it is exactly one of the five canonical grade words;
/// any other sibling text is rejected outright.
#[must_use]
pub fn grade_for(html_segment: &str, header_label: &str) -> String {
    let doc = Document::from(html_segment);
    for node in doc.select("*").nodes() {
        let sel = Selection::from(*node);
        if !sel.text().trim().eq_ignore_ascii_case(header_label) {
            continue;
        }
        if let Some(sibling) = next_element_sibling(node) {
            let label = Selection::from(sibling).text().trim().to_string();
            if let Some(grade) = canonical_grade(&label) {
                return grade.to_string();
            }
        }
    }
    String::new()
}

fn resolve(doc: &Document, locator: &Locator) -> Option<String> {
    match locator {
        Locator::ByIdPath { id, path } => {
            let sel = doc.select(&format!("#{id} {path}"));
            first_text(&sel)
        }
        Locator::ByClassSibling { class, sibling_tag } => {
            let sel = doc.select(&format!("[class*='{class}']"));
            for node in sel.nodes() {
                if let Some(sibling) = next_element_sibling(node) {
                    let tag_matches = sibling
                        .node_name()
                        .is_some_and(|name| name.eq_ignore_ascii_case(sibling_tag));
                    if tag_matches {
                        let text = Selection::from(sibling).text().trim().to_string();
                        if !text.is_empty() {
                            return Some(text);
                        }
                    }
                }
            }
            None
        }
        Locator::ByTextSibling { header } => {
            for node in doc.select("*").nodes() {
                let sel = Selection::from(*node);
                if !sel.text().trim().eq_ignore_ascii_case(header) {
                    continue;
                }
                if let Some(sibling) = next_element_sibling(node) {
                    let text = Selection::from(sibling).text().trim().to_string();
                    if !text.is_empty() {
                        return Some(text);
                    }
                }
            }
            None
        }
        Locator::ByCss(css) => first_text(&doc.select(css)),
    }
}

/// Text of the first node in a selection, `None` if empty.
fn first_text(sel: &Selection) -> Option<String> {
    sel.nodes().first().map(|node| {
        Selection::from(*node).text().trim().to_string()
    }).filter(|t| !t.is_empty())
}

/// Next sibling that is an element, skipping text nodes.
fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_field_by_id_path() {
        let html = r#"<section id="shipping"><div>Free delivery, 2-3 day shipping</div></section>"#;
        let text = query_field(html, SHIPPING_LOCATORS, FieldKind::Shipping);
        assert_eq!(text, "Free delivery, 2-3 day shipping");
    }

    #[test]
    fn query_field_by_text_sibling() {
        let html = r#"<div><span>Returns</span><span>Free 30-day returns</span></div>"#;
        let text = query_field(html, RETURNS_LOCATORS, FieldKind::Returns);
        assert_eq!(text, "Free 30-day returns");
    }

    #[test]
    fn query_field_discards_illegitimate_matches() {
        // The header row's sibling is a grade word, not shipping content; the
        // predicate must reject it and fall through to the class locator.
        let html = r#"<div>
            <span>Shipping</span><span>Great</span>
            <p class="shipping-info">label</p><div>$4.99 delivery in 2 days</div>
        </div>"#;
        let text = query_field(html, SHIPPING_LOCATORS, FieldKind::Shipping);
        assert_eq!(text, "$4.99 delivery in 2 days");
    }

    #[test]
    fn query_field_empty_when_nothing_legitimate() {
        let html = "<div><p>unrelated content</p></div>";
        assert_eq!(query_field(html, PAYMENTS_LOCATORS, FieldKind::Payments), "");
    }

    #[test]
    fn grade_for_accepts_canonical_labels_only() {
        let html = r#"<div><span>Shipping</span><span>great</span>
            <span>Returns</span><span>Mediocre</span></div>"#;
        assert_eq!(grade_for(html, "Shipping"), "Great");
        assert_eq!(grade_for(html, "Returns"), "");
        assert_eq!(grade_for(html, "Website quality"), "");
    }

    #[test]
    fn canonical_grade_normalizes_case() {
        assert_eq!(canonical_grade("EXCEPTIONAL"), Some("Exceptional"));
        assert_eq!(canonical_grade(" poor "), Some("Poor"));
        assert_eq!(canonical_grade("Great value"), None);
    }
}

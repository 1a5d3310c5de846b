//! Store rating, review count, and ScamAdviser score extraction.
//!
//! Every field here is an ordered fallback chain. Each rule targets a
//! different structural variant of the rating block observed in practice;
//! the first non-empty match wins.

use regex::Regex;

use crate::locate;
use crate::patterns;

/// Extracts the numeric store rating as text, e.g. `"4.6"`.
///
/// Chain: `aria-label` with "overall score N out of 5" → numeric text inside
/// the known rating markup block → legacy inline text patterns near the
/// domain anchor, then over the whole visible text.
#[must_use]
pub fn store_rating(segment_html: &str, full_html: &str, visible_text: &str, domain: &str) -> String {
    for html in [segment_html, full_html] {
        if let Some(caps) = patterns::RATING_ARIA.captures(html) {
            return caps[1].to_string();
        }
    }
    for html in [segment_html, full_html] {
        if let Some(caps) = patterns::RATING_MARKUP.captures(html) {
            return caps[1].to_string();
        }
    }
    search_anchored(visible_text, domain, &patterns::RATING_INLINE)
}

/// Extracts the review count as text, e.g. `"1,204"`.
///
/// Chain: parenthesized count adjacent to "store rating" → review-count span
/// markup → generic "(N reviews)" near the domain, then whole-document.
#[must_use]
pub fn review_count(segment_html: &str, full_html: &str, visible_text: &str, domain: &str) -> String {
    let adjacent = search_anchored(visible_text, domain, &patterns::REVIEWS_BY_RATING);
    if !adjacent.is_empty() {
        return adjacent;
    }
    for html in [segment_html, full_html] {
        if let Some(caps) = patterns::REVIEWS_MARKUP.captures(html) {
            return caps[1].to_string();
        }
    }
    search_anchored(visible_text, domain, std::slice::from_ref(&*patterns::REVIEWS_GENERIC))
}

/// Extracts the ScamAdviser trust score out of 100; empty when absent.
#[must_use]
pub fn scamadviser_score(visible_text: &str) -> String {
    patterns::SCAMADVISER_SCORE
        .captures(visible_text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Runs a pattern list first inside windows around each domain mention in
/// the visible text, then over the whole text. With no domain mention the
/// whole text is the only window.
fn search_anchored(text: &str, domain: &str, rules: &[Regex]) -> String {
    if !domain.trim().is_empty() {
        let domain_pat = locate::domain_pattern(domain);
        for index in locate::find_all_indices(text, &domain_pat) {
            let near = locate::window(text, index, patterns::TEXT_RADIUS);
            for rule in rules {
                if let Some(caps) = rule.captures(near) {
                    return caps[1].to_string();
                }
            }
        }
    }
    for rule in rules {
        if let Some(caps) = rule.captures(text) {
            return caps[1].to_string();
        }
    }
    String::new()
}

//! Top Quality Store badge detection.
//!
//! The badge phrase can appear generically elsewhere in the document (the
//! page may describe multiple merchants), so a marker only counts when the
//! queried domain is mentioned within a fixed-radius window around it.

use crate::locate;
use crate::patterns;

/// Returns `true` iff the domain token appears within 2200 bytes of any
/// badge-marker occurrence in the raw HTML. Marker occurrences include
/// visible badge text and `aria-label`/`alt` attribute values carrying the
/// badge phrase.
#[must_use]
pub fn extract_badge(raw_html: &str, domain: &str) -> bool {
    if domain.trim().is_empty() {
        return false;
    }
    let domain_pat = locate::domain_pattern(domain);
    locate::find_all_indices(raw_html, &patterns::TQS_BADGE)
        .into_iter()
        .any(|index| {
            let near = locate::window(raw_html, index, patterns::BADGE_RADIUS);
            domain_pat.is_match(near)
        })
}

//! Locator and windowing utilities.
//!
//! These bound false-positive risk when a marker phrase appears generically
//! elsewhere in the document: extractors search a clamped window around an
//! anchor offset instead of the whole page.
//!
//! Offsets are byte offsets into the source string; window edges are snapped
//! to UTF-8 character boundaries before slicing.

use regex::Regex;

/// Default radius (in bytes of raw HTML) around the domain mention.
pub const ANCHOR_RADIUS: usize = 32_000;

/// Byte-offset bounds of a region judged "near" the domain mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorWindow {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

/// Returns the start offset of every non-overlapping match, in document order.
#[must_use]
pub fn find_all_indices(text: &str, pattern: &Regex) -> Vec<usize> {
    pattern.find_iter(text).map(|m| m.start()).collect()
}

/// Extracts the substring covering the inclusive interval
/// `[index - radius, index + radius]`, clamped to the text bounds and
/// snapped to character boundaries.
#[must_use]
pub fn window(text: &str, index: usize, radius: usize) -> &str {
    let start = snap_back(text, index.saturating_sub(radius));
    let end = snap_forward(text, index.saturating_add(radius).saturating_add(1));
    &text[start..end]
}

/// Builds the case-insensitive whole-word pattern for a domain token,
/// optionally preceded by a scheme and/or `www.`.
#[must_use]
#[allow(clippy::expect_used)]
pub fn domain_pattern(domain: &str) -> Regex {
    let escaped = regex::escape(domain.trim());
    Regex::new(&format!(r"(?i)(?:https?://)?(?:www\.)?\b{escaped}\b"))
        .expect("escaped domain pattern")
}

/// Locates the domain mention in the raw HTML and returns the bounded window
/// around its first occurrence. `None` means the domain string is absent and
/// extractors must operate on the whole document.
#[must_use]
pub fn anchor_window(raw_html: &str, domain: &str, radius: usize) -> Option<AnchorWindow> {
    if domain.trim().is_empty() {
        return None;
    }
    let m = domain_pattern(domain).find(raw_html)?;
    Some(AnchorWindow {
        start: snap_back(raw_html, m.start().saturating_sub(radius)),
        end: snap_forward(raw_html, m.start().saturating_add(radius).saturating_add(1)),
    })
}

fn snap_back(s: &str, offset: usize) -> usize {
    let mut i = offset.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn snap_forward(s: &str, offset: usize) -> usize {
    let mut i = offset.min(s.len());
    while !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

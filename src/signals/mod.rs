//! Field extractors and the merge/assembly stage.
//!
//! Orchestrates one extraction pass: the anchored segment and the whole
//! document are queried structurally, the normalized text views provide the
//! regex fallbacks, and the results are merged into one [`SignalRecord`]
//! with fixed precedence (structural match → windowed regex →
//! whole-document regex).

pub mod badge;
pub mod grades;
pub mod identity;
pub mod payments;
pub mod rating;
pub mod returns;
pub mod shipping;

use tracing::debug;

use crate::locate;
use crate::patterns;
use crate::record::SignalRecord;
use crate::structural::{self, FieldKind};
use crate::text;

/// Extracts all trust/commerce signals from a store-page document.
///
/// Pure in `(html, domain)`: no I/O, no shared state, no failure mode. Every
/// field independently succeeds or falls back to its default; one field's
/// failure never aborts extraction of the others. The returned record is
/// always fully populated.
#[must_use]
pub fn extract_signals(html: &str, domain: &str) -> SignalRecord {
    let domain = domain.trim();
    let visible_text = text::normalize(html);

    let anchor = locate::anchor_window(html, domain, locate::ANCHOR_RADIUS);
    let segment = match anchor {
        Some(w) => &html[w.start..w.end],
        None => html,
    };
    debug!(
        domain,
        anchored = anchor.is_some(),
        segment_len = segment.len(),
        "extraction pass"
    );

    // Structural pass over the anchored segment.
    let mut shipping_details =
        structural::query_field(segment, structural::SHIPPING_LOCATORS, FieldKind::Shipping);
    let mut return_details =
        structural::query_field(segment, structural::RETURNS_LOCATORS, FieldKind::Returns);
    let mut payment_details =
        structural::query_field(segment, structural::PAYMENTS_LOCATORS, FieldKind::Payments);

    // Whole-document structural retry, only when the anchored pass yielded
    // nothing useful for any of the delivery/return/wallet fields.
    if anchor.is_some()
        && shipping_details.is_empty()
        && return_details.is_empty()
        && payment_details.is_empty()
    {
        debug!("anchored structural pass empty, retrying whole document");
        shipping_details =
            structural::query_field(html, structural::SHIPPING_LOCATORS, FieldKind::Shipping);
        return_details =
            structural::query_field(html, structural::RETURNS_LOCATORS, FieldKind::Returns);
        payment_details =
            structural::query_field(html, structural::PAYMENTS_LOCATORS, FieldKind::Payments);
    }

    // Textual fallback views: a window around the domain mention in the
    // flattened text, then the whole flattened text.
    let near_text = if domain.is_empty() {
        visible_text.as_str()
    } else {
        locate::domain_pattern(domain)
            .find(&visible_text)
            .map_or(visible_text.as_str(), |m| {
                locate::window(&visible_text, m.start(), patterns::TEXT_RADIUS)
            })
    };

    let shipping_sources = [shipping_details.as_str(), near_text, visible_text.as_str()];
    let return_sources = [return_details.as_str(), near_text, visible_text.as_str()];
    let payment_sources = [payment_details.as_str(), near_text, visible_text.as_str()];

    SignalRecord {
        tqs_badge: badge::extract_badge(html, domain),
        delivery_time: shipping::delivery_time(&shipping_sources),
        shipping_cost_free: shipping::shipping_cost_free(&shipping_sources),
        shipping_details,
        return_window: returns::return_window(&return_sources),
        return_cost_free: returns::return_cost_free(&return_sources),
        return_details,
        e_wallets: payments::e_wallets(&payment_sources),
        store_rating: rating::store_rating(segment, html, &visible_text, domain),
        review_count: rating::review_count(segment, html, &visible_text, domain),
        scamadviser_score: rating::scamadviser_score(&visible_text),
        section_grades: grades::section_grades(segment, html),
        logo_url: identity::logo_url(segment, html, domain),
        store_name: identity::store_name(segment, html, domain),
    }
}

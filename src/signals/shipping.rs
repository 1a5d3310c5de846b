//! Shipping signal extraction: delivery time and free-shipping flag.

use crate::patterns;

/// Extracts a normalized delivery time from candidate texts, tried in
/// precedence order (structural result first, looser text views after).
///
/// The first candidate that yields anything settles the field: a day/hour
/// count or range wins within it, e.g. `"2-3 day"`, else the bare
/// "free delivery" literal yields `"Free delivery"`. A looser candidate is
/// consulted only when the stricter ones yielded nothing at all. Empty when
/// no candidate matches.
#[must_use]
pub fn delivery_time(candidates: &[&str]) -> String {
    for text in candidates {
        if let Some(caps) = patterns::DAY_HOUR_COUNT.captures(text) {
            let range = caps[1].split_whitespace().collect::<String>().replace('–', "-");
            let unit = caps[2].to_lowercase();
            return format!("{range} {unit}");
        }
        if patterns::FREE_DELIVERY_LITERAL.is_match(text) {
            return "Free delivery".to_string();
        }
    }
    String::new()
}

/// Whether any candidate text states shipping is free.
#[must_use]
pub fn shipping_cost_free(candidates: &[&str]) -> bool {
    candidates.iter().any(|text| patterns::FREE_DELIVERY.is_match(text))
}

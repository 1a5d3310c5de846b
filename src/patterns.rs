//! Compiled regex patterns for signal extraction.
//!
//! All patterns are compiled once at startup using `LazyLock`. Patterns are
//! stateless constants; extractors track match positions explicitly, so there
//! is no shared mutable match state anywhere in the engine.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Radius (bytes of raw HTML) around a badge marker inside which the domain
/// token must appear for the badge to count.
pub const BADGE_RADIUS: usize = 2_200;

/// Radius (bytes of normalized text) for "near the domain" regex fallbacks.
pub const TEXT_RADIUS: usize = 2_000;

// =============================================================================
// Badge
// =============================================================================

/// Matches the Top Quality Store badge marker, in visible text or inside
/// `aria-label`/`alt` attribute values.
pub static TQS_BADGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)top\s+quality\s+store").expect("TQS_BADGE regex"));

// =============================================================================
// Shipping
// =============================================================================

/// Matches a day/hour count or range, e.g. "2-3 day", "24 hours".
pub static DAY_HOUR_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+(?:\s*[-–]\s*\d+)?)\s*(days?|hours?)\b").expect("DAY_HOUR_COUNT regex")
});

/// Matches free-shipping statements: "free delivery/shipping" or
/// "delivery/shipping cost: free".
pub static FREE_DELIVERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bfree\s+(?:delivery|shipping)\b|\b(?:delivery|shipping)\s+cost:?\s*free\b")
        .expect("FREE_DELIVERY regex")
});

/// Matches the bare "free delivery" literal used when no day count is given.
pub static FREE_DELIVERY_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bfree\s+delivery\b").expect("FREE_DELIVERY_LITERAL regex"));

// =============================================================================
// Returns
// =============================================================================

/// Matches a day count immediately followed by "return(s)", e.g.
/// "30-day returns", "60 day return".
pub static RETURN_WINDOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*-?\s*days?\s+returns?\b").expect("RETURN_WINDOW regex")
});

/// Matches free-returns statements: "free return(s)", optionally with a
/// day-count token in between ("free 30-day returns"), or
/// "return shipping/cost: free".
pub static FREE_RETURNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bfree\s+(?:\d+[\s-]*days?\s+)?returns?\b|\breturn\s+(?:shipping|cost):?\s*free\b")
        .expect("FREE_RETURNS regex")
});

// =============================================================================
// Payments
// =============================================================================

/// Digital wallets/providers recognized in payment text, in display casing.
pub const WALLETS: [&str; 6] = [
    "Apple Pay",
    "Google Pay",
    "Shop Pay",
    "PayPal",
    "Afterpay",
    "Klarna",
];

// =============================================================================
// Rating and reviews
// =============================================================================

/// Matches an accessibility label carrying the overall score, e.g.
/// `aria-label="Acme: overall score 4.6 out of 5 based on reviews"`.
pub static RATING_ARIA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)aria-label\s*=\s*"[^"]*overall\s+score[^"]*?([0-5](?:\.\d)?)\s+out\s+of\s+5"#)
        .expect("RATING_ARIA regex")
});

/// Matches the numeric text inside the known rating markup block.
pub static RATING_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<(?:span|div)[^>]*class="[^"]*\brating[^"]*"[^>]*>\s*([0-5](?:\.\d)?)\s*<"#)
        .expect("RATING_MARKUP regex")
});

/// Legacy inline rating patterns, tried in order against visible text.
pub static RATING_INLINE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)([0-5](?:\.\d)?)\s*★\s*store\s+rating").expect("star rating regex"),
        Regex::new(r"(?i)([0-5](?:\.\d)?)\s*/\s*5\s+store\s+rating").expect("slash rating regex"),
        Regex::new(r"(?i)store\s+rating[:\s]+([0-5](?:\.\d)?)\b").expect("plain rating regex"),
    ]
});

/// Matches a parenthesized count adjacent to "store rating", either side.
pub static REVIEWS_BY_RATING: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)store\s+rating[^()]{0,40}\((\d[\d,]*)\)").expect("rating-then-count regex"),
        Regex::new(r"(?i)\((\d[\d,]*)\)[^()]{0,40}store\s+rating").expect("count-then-rating regex"),
    ]
});

/// Matches the markup-specific review-count span.
pub static REVIEWS_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span[^>]*class="[^"]*review[^"]*"[^>]*>\s*\(?(\d[\d,]*)\)?"#)
        .expect("REVIEWS_MARKUP regex")
});

/// Matches a generic "(N reviews)" phrase in visible text.
pub static REVIEWS_GENERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\((\d[\d,]*)\s+reviews?\)").expect("REVIEWS_GENERIC regex")
});

/// Matches a ScamAdviser trust score, e.g. "ScamAdviser trust score: 85/100".
pub static SCAMADVISER_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)scamadviser[^.]{0,80}?trust\s*score\D{0,20}(\d{1,3})\s*/\s*100")
        .expect("SCAMADVISER_SCORE regex")
});

// =============================================================================
// Legitimacy filters
// =============================================================================

/// Shipping text must carry a day/hour/currency token or a shipping word.
pub static SHIPPING_LEGIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+\s*(?:[-–]\s*\d+\s*)?(?:day|hour)s?\b|[$€£]|\bdelivery\b|\bshipping\b|\bfree\b")
        .expect("SHIPPING_LEGIT regex")
});

/// Returns text must mention days, returns, or free.
pub static RETURNS_LEGIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+\s*-?\s*days?\b|\breturns?\b|\bfree\b").expect("RETURNS_LEGIT regex")
});

/// Payments text must name a known provider or the word "payment".
pub static PAYMENTS_LEGIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bpayments?\b|apple\s+pay|google\s+pay|shop\s+pay|paypal|afterpay|klarna|visa|mastercard|amex",
    )
    .expect("PAYMENTS_LEGIT regex")
});

//! Result types for signal extraction output.
//!
//! A [`SignalRecord`] is always fully populated: every field has a defined
//! default (empty string or `false`) that stands in when extraction of that
//! field fails. Callers never see a partial record.

use serde::{Deserialize, Serialize};

/// Per-section quality grades reported on the store page.
///
/// Each field is one of `Exceptional`, `Great`, `Good`, `Fair`, `Poor`,
/// or empty when the section carries no recognizable grade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionGrades {
    /// Grade for the "Shipping" section.
    pub shipping: String,

    /// Grade for the "Returns" section.
    pub returns: String,

    /// Grade for the "Competitive pricing" section.
    pub pricing: String,

    /// Grade for the "Payment options" section.
    pub payments: String,

    /// Grade for the "Website quality" section.
    pub website: String,
}

/// Structured trust/commerce signals extracted from a store-page document.
///
/// Booleans are two-valued: `false` means "not stated" as well as
/// "confirmed not free" — callers cannot distinguish the two.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    /// Whether the Top Quality Store badge appears near the domain mention.
    pub tqs_badge: bool,

    /// Normalized delivery time, e.g. `"2-3 day"`, or `"Free delivery"`
    /// when only the free-delivery literal is present.
    pub delivery_time: String,

    /// Whether shipping is stated as free.
    pub shipping_cost_free: bool,

    /// Raw shipping text that passed the legitimacy filter.
    pub shipping_details: String,

    /// Return window, e.g. `"30 days"`.
    pub return_window: String,

    /// Whether returns are stated as free.
    pub return_cost_free: bool,

    /// Raw returns text that passed the legitimacy filter.
    pub return_details: String,

    /// Supported digital wallets in first-seen order, e.g. `"PayPal, Klarna"`.
    pub e_wallets: String,

    /// Numeric store rating as text, e.g. `"4.6"`.
    pub store_rating: String,

    /// Review count as text, e.g. `"1,204"`.
    pub review_count: String,

    /// ScamAdviser trust score out of 100, e.g. `"85"`; empty if absent.
    pub scamadviser_score: String,

    /// Per-section quality grades.
    pub section_grades: SectionGrades,

    /// Store logo URL; falls back to a deterministic favicon service URL.
    pub logo_url: String,

    /// Store display name; falls back to the raw domain string.
    pub store_name: String,
}

/// JSON envelope produced around a record by the fetch boundary.
///
/// Serializes as `{"signals": {...}}` on success or `{"error": "..."}`
/// on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalsResponse {
    /// Successful extraction.
    Signals {
        /// The extracted signal record.
        signals: SignalRecord,
    },
    /// Boundary failure (validation or upstream fetch).
    Error {
        /// Human-readable failure description.
        error: String,
    },
}

impl From<crate::Result<SignalRecord>> for SignalsResponse {
    fn from(result: crate::Result<SignalRecord>) -> Self {
        match result {
            Ok(signals) => Self::Signals { signals },
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}

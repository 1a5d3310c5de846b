//! # store-signals
//!
//! Extraction of structured trust/commerce signals from merchant "store page"
//! documents: badge presence, delivery time, shipping/return cost-free flags,
//! return window, supported digital wallets, store rating, review count, and
//! per-section quality grades.
//!
//! The source document's structure is unstable, undocumented, and subject to
//! silent change, so the engine is a multi-stage, fault-tolerant pipeline:
//! DOM-aware structural queries, proximity windowing around the queried
//! domain's mention, per-field content-legitimacy filters, and layered
//! regex fallbacks. Extraction never fails: every field independently
//! degrades to its default and the record is always fully populated.
//!
//! ## Quick Start
//!
//! ```rust
//! use store_signals::extract_signals;
//!
//! let html = r#"<html><body>
//!   <h1>Acme</h1> example.com
//!   <section id="shipping"><div>Free delivery, 2-3 day shipping</div></section>
//! </body></html>"#;
//!
//! let signals = extract_signals(html, "example.com");
//! assert_eq!(signals.delivery_time, "2-3 day");
//! assert!(signals.shipping_cost_free);
//! ```

mod error;
mod patterns;
mod record;

/// Locator and windowing utilities for proximity-bounded searches.
pub mod locate;

/// Structural (DOM) query layer: locator tables and legitimacy predicates.
pub mod structural;

/// Text normalization into the flattened visible-text view.
pub mod text;

/// Field extractors and the merge/assembly stage.
pub mod signals;

/// Upstream fetch boundary.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use error::{Error, Result};
pub use record::{SectionGrades, SignalRecord, SignalsResponse};
pub use signals::extract_signals;

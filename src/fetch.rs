//! Upstream fetch boundary (feature `fetch`).
//!
//! Thin glue around the extraction engine: one GET per call, no caching, no
//! retry. The engine itself never performs I/O; callers are responsible for
//! bounding upstream latency beyond the client timeout set here.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::record::SignalRecord;

const STOREPAGES_URL: &str = "https://www.google.com/storepages";
const USER_AGENT: &str = "Mozilla/5.0";
const TIMEOUT_SECS: u64 = 30;

/// Fetches the raw store-page document for a domain.
///
/// Issues `GET {STOREPAGES_URL}?q=<domain>&c=<country>&v=19`. Any non-2xx
/// response is a hard failure for this request.
pub fn fetch_store_page(domain: &str, country: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    debug!(domain, country, "fetching store page");
    let response = client
        .get(STOREPAGES_URL)
        .query(&[("q", domain), ("c", country), ("v", "19")])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        warn!(domain, status = status.as_u16(), "upstream returned non-2xx");
        return Err(Error::Upstream {
            status: status.as_u16(),
        });
    }

    Ok(response.text()?)
}

/// Validates the domain, fetches the store page, and extracts signals.
///
/// # Errors
///
/// [`Error::MissingDomain`] when `domain` is blank; [`Error::Upstream`] or
/// [`Error::Http`] when the fetch fails. Extraction itself cannot fail.
pub fn get_signals(domain: &str, country: &str) -> Result<SignalRecord> {
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(Error::MissingDomain);
    }
    let html = fetch_store_page(domain, country)?;
    Ok(crate::extract_signals(&html, domain))
}

//! Digital wallet extraction from payment-method text.

use crate::patterns::WALLETS;

/// Collects the distinct wallets named in the first candidate text that
/// mentions any, preserving first-seen order within that text, joined as a
/// display string: `"PayPal, Klarna"`.
#[must_use]
pub fn e_wallets(candidates: &[&str]) -> String {
    for text in candidates {
        let found = wallets_in(text);
        if !found.is_empty() {
            return found.join(", ");
        }
    }
    String::new()
}

/// Distinct wallets in one text, ordered by first occurrence.
fn wallets_in(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let mut found: Vec<(usize, &'static str)> = WALLETS
        .iter()
        .filter_map(|wallet| lower.find(&wallet.to_lowercase()).map(|pos| (pos, *wallet)))
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, wallet)| wallet).collect()
}

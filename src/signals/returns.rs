//! Returns signal extraction: return window and free-returns flag.

use crate::patterns;

/// Extracts the return window from candidate texts in precedence order.
///
/// Only a day count immediately followed by "return(s)" qualifies; output is
/// normalized to `"N days"`.
#[must_use]
pub fn return_window(candidates: &[&str]) -> String {
    for text in candidates {
        if let Some(caps) = patterns::RETURN_WINDOW.captures(text) {
            return format!("{} days", &caps[1]);
        }
    }
    String::new()
}

/// Whether any candidate text states returns are free.
#[must_use]
pub fn return_cost_free(candidates: &[&str]) -> bool {
    candidates.iter().any(|text| patterns::FREE_RETURNS.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_from_hyphenated_form() {
        assert_eq!(return_window(&["Free 30-day returns"]), "30 days");
        assert!(return_cost_free(&["Free 30-day returns"]));
    }

    #[test]
    fn window_requires_adjacent_returns_word() {
        assert_eq!(return_window(&["ships in 5 days, no returns"]), "");
    }

    #[test]
    fn cost_colon_free_variant() {
        assert!(return_cost_free(&["Return shipping: free"]));
        assert!(return_cost_free(&["return cost free"]));
        assert!(!return_cost_free(&["returns accepted within 30 days"]));
    }

    #[test]
    fn earlier_candidate_wins() {
        assert_eq!(return_window(&["60 day returns", "30-day returns"]), "60 days");
    }
}

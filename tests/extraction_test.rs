//! End-to-end extraction fixtures covering each signal field.

use store_signals::extract_signals;

const DOMAIN: &str = "acme-store.com";

fn store_page_fixture() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Store report</title><style>.x{{color:red}}</style></head>
<body>
  <script>var tracking = "noise";</script>
  <h1 class="store-title">Acme Store</h1>
  <img class="site-logo" src="https://cdn.acme-store.com/logo.png">
  <p>Report for https://www.{DOMAIN}</p>
  <img alt="Top Quality Store">
  <div class="store-rating" aria-label="Acme Store: overall score 4.6 out of 5 based on reviews">
    <span class="review-count">(1,204)</span>
  </div>
  <section id="shipping"><div>Free delivery, 2-3 day shipping</div></section>
  <section id="returns"><div>Free 30-day returns</div></section>
  <section id="payments"><div>PayPal, Klarna, Apple Pay and PayPal accepted</div></section>
  <div class="grades">
    <span>Shipping</span><span>Great</span>
    <span>Returns</span><span>Good</span>
    <span>Competitive pricing</span><span>Exceptional</span>
    <span>Payment options</span><span>Fair</span>
    <span>Website quality</span><span>Poor</span>
  </div>
  <p>ScamAdviser trust score: 88/100</p>
</body>
</html>"#
    )
}

#[test]
fn full_fixture_extracts_every_field() {
    let html = store_page_fixture();
    let signals = extract_signals(&html, DOMAIN);

    assert!(signals.tqs_badge);
    assert_eq!(signals.delivery_time, "2-3 day");
    assert!(signals.shipping_cost_free);
    assert_eq!(signals.shipping_details, "Free delivery, 2-3 day shipping");
    assert_eq!(signals.return_window, "30 days");
    assert!(signals.return_cost_free);
    assert_eq!(signals.return_details, "Free 30-day returns");
    assert_eq!(signals.e_wallets, "PayPal, Klarna, Apple Pay");
    assert_eq!(signals.store_rating, "4.6");
    assert_eq!(signals.review_count, "1,204");
    assert_eq!(signals.scamadviser_score, "88");
    assert_eq!(signals.section_grades.shipping, "Great");
    assert_eq!(signals.section_grades.returns, "Good");
    assert_eq!(signals.section_grades.pricing, "Exceptional");
    assert_eq!(signals.section_grades.payments, "Fair");
    assert_eq!(signals.section_grades.website, "Poor");
    assert_eq!(signals.logo_url, "https://cdn.acme-store.com/logo.png");
    assert_eq!(signals.store_name, "Acme Store");
}

#[test]
fn badge_marker_beyond_radius_is_false() {
    let filler = "y".repeat(3000);
    let html = format!("<div>{DOMAIN}</div> {filler} <img alt=\"Top Quality Store\">");
    let signals = extract_signals(&html, DOMAIN);
    assert!(!signals.tqs_badge);
}

#[test]
fn wallets_dedup_and_first_seen_order() {
    let html = format!(
        "<html><body>{DOMAIN} payment options: PayPal, then Klarna, then PayPal again</body></html>"
    );
    let signals = extract_signals(&html, DOMAIN);
    assert_eq!(signals.e_wallets, "PayPal, Klarna");
}

#[test]
fn minimal_heading_and_rating_fixture() {
    let html = format!(
        r#"<html><body>{DOMAIN}
        <h1 class="kx">Acme</h1>
        <div class="rating-block" aria-label="store overall score 4.6 out of 5 stars"></div>
        </body></html>"#
    );
    let signals = extract_signals(&html, DOMAIN);
    assert_eq!(signals.store_rating, "4.6");
    assert_eq!(signals.store_name, "Acme");
}

#[test]
fn shipping_text_without_structure_uses_regex_fallback() {
    let html = format!("<p>{DOMAIN}: Free delivery, 2-3 day shipping</p>");
    let signals = extract_signals(&html, DOMAIN);
    assert_eq!(signals.delivery_time, "2-3 day");
    assert!(signals.shipping_cost_free);
    // No locator matched, so the structural detail stays empty.
    assert_eq!(signals.shipping_details, "");
}

#[test]
fn structural_free_delivery_beats_unrelated_day_count() {
    // A day count elsewhere in the page body must not override the
    // structural shipping tier's free-delivery result.
    let html = format!(
        r#"<p>{DOMAIN}</p>
        <section id="shipping"><div>Free delivery on all orders</div></section>
        <p>battery lasts 2 days</p>"#
    );
    let signals = extract_signals(&html, DOMAIN);
    assert_eq!(signals.delivery_time, "Free delivery");
    assert!(signals.shipping_cost_free);
}

#[test]
fn absent_domain_falls_back_to_whole_document() {
    let html = r#"<html><body>
      <section id="shipping"><div>Free delivery, 5-7 day shipping</div></section>
      <span>Returns</span><span>Good</span>
    </body></html>"#;
    let signals = extract_signals(html, "missing-merchant.com");
    assert_eq!(signals.delivery_time, "5-7 day");
    assert_eq!(signals.section_grades.returns, "Good");
    assert_eq!(signals.store_name, "missing-merchant.com");
    assert_eq!(
        signals.logo_url,
        "https://www.google.com/s2/favicons?domain=missing-merchant.com&sz=64"
    );
}

#[test]
fn unrelated_merchant_rating_outside_window_is_ignored() {
    let filler = "lorem ipsum ".repeat(400);
    let html = format!(
        "<p>other.shop 1.1/5 store rating</p> {filler} <p>{DOMAIN} 4.9/5 store rating</p>"
    );
    let signals = extract_signals(&html, DOMAIN);
    assert_eq!(signals.store_rating, "4.9");
}

#[test]
fn scamadviser_absent_yields_empty() {
    let html = format!("<p>{DOMAIN} store page</p>");
    assert_eq!(extract_signals(&html, DOMAIN).scamadviser_score, "");
}

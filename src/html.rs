//! Anchor extraction from HTML documents.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("Invalid anchor selector"));

/// Parse `text` as HTML and return the `href` of every anchor in document order.
///
/// Anchors without an `href` attribute are kept as `None`.
///
/// # Examples
///
/// ```
/// use goo_getf::html::anchor_hrefs;
///
/// let hrefs = anchor_hrefs(r#"<p><a href="https://a">x</a><a name="top">y</a></p>"#);
/// assert_eq!(hrefs, vec![Some("https://a".to_string()), None]);
/// ```
pub fn anchor_hrefs(text: &str) -> Vec<Option<String>> {
    let document = Html::parse_document(text);
    document
        .select(&ANCHOR_SELECTOR)
        .map(|anchor| anchor.value().attr("href").map(str::to_owned))
        .collect()
}

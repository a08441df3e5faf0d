//! Extract absolute, normalised HTTP(S) links from HTML relative to a base
//! URL (C4).

use scraper::{Html, Selector};
use std::sync::OnceLock;
use url::Url;

fn anchor_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("a[href]").expect("static selector is valid"))
}

/// Normalise a URL per §4.5: strip the fragment, and use `/` as the path
/// when the path is empty (`http://host` and `http://host/` are the same
/// location).
pub fn normalize_url(mut url: Url) -> Url {
    url.set_fragment(None);
    if url.path().is_empty() {
        url.set_path("/");
    }
    url
}

/// Parse `html` and return every absolute `http`/`https` link, resolved
/// against `base` and normalised. Malformed or non-HTTP(S) hrefs are
/// skipped silently — link extraction never fails the enclosing task.
pub fn extract_links(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let selector = anchor_selector();

    document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(normalize_url)
        .collect()
}

//! Strip HTML markup down to plain text (C3).
//!
//! `html5ever` (via `scraper`) already treats `<script>`/`<style>` bodies
//! as raw text nodes rather than child elements, so a plain tag-stripping
//! walk would otherwise splice JS/CSS source into the indexed text. This
//! module's tree walk explicitly skips those subtrees — the "strip block
//! elements" step from C3 — before collapsing everything else to text.

use scraper::{Html, Node};

const NOISE_TAGS: &[&str] = &["script", "style", "noscript"];

/// Parse `html` and return its visible text content, whitespace-collapsed,
/// with `<script>`/`<style>`/`<noscript>` bodies excluded entirely.
pub fn strip_all_tags(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();
    collect_text(document.tree.root(), &mut text);

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: ego_tree::NodeRef<'_, Node>, out: &mut String) {
    if let Some(element) = node.value().as_element() {
        if NOISE_TAGS.contains(&element.name()) {
            return;
        }
    }
    if let Some(text) = node.value().as_text() {
        out.push_str(text);
        out.push(' ');
    }
    for child in node.children() {
        collect_text(child, out);
    }
}

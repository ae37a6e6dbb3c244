// src/core/html.rs
// Thin helpers over `scraper`'s DOM. Tag names are matched as html5ever reports
// them (lowercase).

use scraper::{ElementRef, Html, Node};

use super::sanitize::normalize_ws;

/// HTML caps colspan at 1000; anything larger is treated as 1000.
const MAX_COLSPAN: usize = 1000;

/// Text of every comment node in the document, in document order.
pub fn comments(doc: &Html) -> impl Iterator<Item = &str> {
    doc.tree.root().descendants().filter_map(|node| match node.value() {
        Node::Comment(c) => Some(&**c),
        _ => None,
    })
}

/// Every element with the given tag name, in document order.
/// Nested matches are included.
pub fn tags<'a>(doc: &'a Html, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
    doc.tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

/// Direct element children (text and comments skipped).
pub fn child_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Visible text of an element with whitespace collapsed.
pub fn cell_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// `colspan` of a cell, defaulting to 1 for missing/invalid/zero values.
pub fn colspan(el: ElementRef<'_>) -> usize {
    el.value()
        .attr("colspan")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .map(|n| n.min(MAX_COLSPAN))
        .unwrap_or(1)
}

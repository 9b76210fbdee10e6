//! Small helpers over `scraper` shared by the legacy list reader and the due-date scan.

use scraper::{ElementRef, Html, Selector};

use crate::issue::ParseFailure;

pub fn parse(html: &str) -> Html {
	Html::parse_fragment(html)
}

pub fn selector(css: &str) -> Result<Selector, ParseFailure> {
	Selector::parse(css).map_err(|e| ParseFailure::Markup { detail: format!("bad selector `{css}`: {e}") })
}

/// Concatenated text of every descendant text node.
pub fn text_content(element: ElementRef<'_>) -> String {
	element.text().collect()
}

/// Nearest element sibling before `element`, skipping text and comment nodes.
pub fn previous_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
	element.prev_siblings().find_map(ElementRef::wrap)
}

/// Text content of every element in document order, one element per line.
///
/// Nested elements repeat their text under each ancestor; line-anchored scans rely on the
/// innermost element giving its text a line of its own.
pub fn flatten_text(html: &str) -> String {
	let document = parse(html);
	document.root_element().descendants().filter_map(ElementRef::wrap).map(text_content).collect::<Vec<_>>().join("\n")
}

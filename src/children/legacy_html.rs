//! Children listed as `<ul>`s of issue links in the rendered body, each under a heading.
//!
//! Older issues predate both text conventions; their children only survive as hovercard
//! anchors in `body_html`.

use url::Url;

use super::{ExtractOptions, heading, reference};
use crate::{
	issue::{ChildRecord, IssueRef, ParseFailure},
	markup,
};

const LISTS: &str = "ul";
const ISSUE_ANCHORS: &str = r#"a[href][data-hovercard-type*="issue"]"#;

/// Read every heading-qualified list of `issue.body_html`.
///
/// Records come out list by list, anchors in document order within each. `href`s are taken
/// verbatim; they are only checked against `github.com` when `strict_legacy_hosts` is set.
pub fn extract(issue: &IssueRef, options: &ExtractOptions) -> Result<Vec<ChildRecord>, ParseFailure> {
	let document = markup::parse(&issue.body_html);
	let lists = markup::selector(LISTS)?;
	let anchors = markup::selector(ISSUE_ANCHORS)?;

	let mut records = Vec::new();
	for list in document.select(&lists) {
		let title = markup::previous_element_sibling(list).map(|el| markup::text_content(el).trim().to_string());
		let Some(title) = title.filter(|t| heading::is_valid_children(Some(t.as_str()), &options.extra_headings)) else {
			continue;
		};

		for anchor in list.select(&anchors) {
			let Some(href) = anchor.value().attr("href") else { continue };
			if options.strict_legacy_hosts && !Url::parse(href).is_ok_and(|url| reference::is_github_host(&url)) {
				tracing::debug!("[children] legacy list `{title}`: skipping non-GitHub href {href:?}");
				continue;
			}
			records.push(ChildRecord::new(title.as_str(), href));
		}
	}
	tracing::debug!("[children] legacy-html: {} records", records.len());
	Ok(records)
}

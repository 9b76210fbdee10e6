//! Children listed line by line after a `children:` token.

use super::{reference, section};
use crate::issue::{ChildRecord, IssueRef, ParseFailure};

/// Case-sensitive; only the first occurrence counts.
pub const HEADER: &str = "children:";
pub const GROUP: &str = "children:";

/// Read the `children:` section of the raw body.
///
/// Does not consult the tasklist block itself: precedence between the two is the chain's job
/// (see [`Extractor`](super::Extractor)).
pub fn extract(issue: &IssueRef) -> Result<Vec<ChildRecord>, ParseFailure> {
	let lines: Vec<&str> = section::locate(&issue.body, HEADER).into_iter().filter_map(section::last_token).collect();
	if lines.is_empty() {
		return Err(ParseFailure::section_missing(HEADER));
	}
	// Rendered HTML handed in where markdown was expected
	if let Some(line) = lines.iter().find(|line| line.starts_with('<')) {
		return Err(ParseFailure::GuardViolation { line: line.to_string() });
	}

	let sequence = reference::resolve_sequence(lines, issue);
	tracing::debug!("[children] children-line: {} of {} lines resolved", sequence.consumed(), sequence.total);
	Ok(sequence.urls.into_iter().map(|url| ChildRecord::new(GROUP, url)).collect())
}

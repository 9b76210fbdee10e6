//! Children listed in a fenced ```` ```[tasklist] ```` block.

use super::{reference, section};
use crate::issue::{ChildRecord, IssueRef, ParseFailure};

pub const HEADER: &str = "```[tasklist]";
pub const GROUP: &str = "tasklist";

pub fn extract(issue: &IssueRef) -> Result<Vec<ChildRecord>, ParseFailure> {
	let lines: Vec<&str> = section::locate(&issue.body, HEADER)
		.into_iter()
		.take_while(|line| !is_closing_fence(line))
		.filter(|line| section::is_task_list_item(line))
		.filter_map(section::last_token)
		.collect();
	if lines.is_empty() {
		return Err(ParseFailure::section_missing(HEADER));
	}

	let sequence = reference::resolve_sequence(lines, issue);
	tracing::debug!("[children] tasklist: {} of {} lines resolved", sequence.consumed(), sequence.total);
	Ok(sequence.urls.into_iter().map(|url| ChildRecord::new(GROUP, url)).collect())
}

fn is_closing_fence(line: &str) -> bool {
	line.trim_start().starts_with("```")
}

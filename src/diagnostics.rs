//! Non-fatal, per-issue diagnostics collected for later display.

use serde::{Deserialize, Serialize};

use crate::issue::IssueRef;

/// One problem with one issue, pointing at the user guide section that explains the fix.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
	pub issue: IssueRef,
	/// Anchor id within the user guide, e.g. `#eta`.
	pub user_guide_section: String,
	pub error_title: String,
	pub error_message: String,
}

impl ErrorEntry {
	pub fn new(issue: IssueRef, user_guide_section: impl Into<String>, error_title: impl Into<String>, error_message: impl Into<String>) -> Self {
		Self {
			issue,
			user_guide_section: user_guide_section.into(),
			error_title: error_title.into(),
			error_message: error_message.into(),
		}
	}

	/// Full link into the user guide hosted at `guide_url`.
	pub fn guide_link(&self, guide_url: &str) -> String {
		format!("{guide_url}{}", self.user_guide_section)
	}
}

/// Where diagnostics go. Owned by the caller; the engine only ever appends.
pub trait ErrorSink {
	fn add_error(&mut self, entry: ErrorEntry);
}

impl ErrorSink for Vec<ErrorEntry> {
	fn add_error(&mut self, entry: ErrorEntry) {
		self.push(entry);
	}
}

/// In-memory collector.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorLog {
	entries: Vec<ErrorEntry>,
}

impl ErrorLog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn entries(&self) -> &[ErrorEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries reported against the issue at `html_url`.
	pub fn for_issue<'a>(&'a self, html_url: &'a str) -> impl Iterator<Item = &'a ErrorEntry> + 'a {
		self.entries.iter().filter(move |e| e.issue.html_url == html_url)
	}
}

impl ErrorSink for ErrorLog {
	fn add_error(&mut self, entry: ErrorEntry) {
		self.entries.push(entry);
	}
}

impl IntoIterator for ErrorLog {
	type IntoIter = std::vec::IntoIter<ErrorEntry>;
	type Item = ErrorEntry;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

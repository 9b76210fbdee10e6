//! Issue records consumed and produced by child extraction.
//!
//! All of these are transient: built per extraction call and dropped once the caller is done.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// Snapshot of one issue, as the tracker's REST API hands it out.
/// Read-only to the extraction engine.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct IssueRef {
	/// Raw markdown body. GitHub sends `null` for an empty body.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub body: String,
	/// Server-rendered HTML of the body.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub body_html: String,
	/// Canonical `https://github.com/{owner}/{repo}/issues/{number}`, or empty when unknown.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub html_url: String,
	#[serde(default, deserialize_with = "null_as_empty")]
	pub title: String,
	/// Whether this is the top of the tree the caller is walking.
	#[serde(default)]
	pub root_issue: bool,
}

impl IssueRef {
	pub fn new(html_url: impl Into<String>) -> Self {
		Self {
			html_url: html_url.into(),
			..Self::default()
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();
		self
	}

	pub fn with_body_html(mut self, body_html: impl Into<String>) -> Self {
		self.body_html = body_html.into();
		self
	}

	/// Mark as the root of the tree being walked.
	pub fn root(mut self) -> Self {
		self.root_issue = true;
		self
	}
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One discovered child. `group` names the section that produced it:
/// `"tasklist"`, `"children:"`, or the heading text of a legacy HTML list.
///
/// Duplicates are legal and preserved, both within and across groups.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChildRecord {
	pub group: String,
	pub html_url: String,
}

impl ChildRecord {
	pub fn new(group: impl Into<String>, html_url: impl Into<String>) -> Self {
		Self {
			group: group.into(),
			html_url: html_url.into(),
		}
	}
}

impl fmt::Display for ChildRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.group, self.html_url)
	}
}

/// Owner and repository an issue URL points into.
/// Format: `https://github.com/{owner}/{repo}/...`
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RepoRef {
	pub owner: String,
	pub repo: String,
}

impl RepoRef {
	pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
		Self {
			owner: owner.into(),
			repo: repo.into(),
		}
	}

	/// Take owner and repo from the first two path segments of an absolute URL.
	/// Returns None if the string is not a URL or its path is too short.
	pub fn from_url(url: &str) -> Option<Self> {
		let url = Url::parse(url.trim()).ok()?;
		let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
		let owner = segments.next()?;
		let repo = segments.next()?;
		Some(Self::new(owner, repo))
	}

	/// `owner/repo#number`, the form authors write by hand.
	pub fn short_reference(&self, number: &str) -> String {
		format!("{}/{}#{number}", self.owner, self.repo)
	}
}

impl fmt::Display for RepoRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.owner, self.repo)
	}
}

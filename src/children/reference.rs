//! Turning one normalized line into an absolute GitHub issue URL.

use url::Url;

use crate::issue::{IssueRef, ParseFailure, RepoRef};

/// `#123`: an issue in the same repository as the parent.
pub fn is_short_reference(line: &str) -> bool {
	line.strip_prefix('#').is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse a reference into a canonical URL.
///
/// Accepts:
/// - absolute URLs: `https://github.com/owner/repo/issues/123`
/// - scheme-less GitHub URLs: `github.com/owner/repo/issues/123`
/// - cross-repo short references: `owner/repo#123`
pub fn canonicalize_reference(candidate: &str) -> Result<Url, url::ParseError> {
	let candidate = candidate.trim();
	if let Some((owner, repo, number)) = split_repo_reference(candidate) {
		return Url::parse(&format!("https://github.com/{owner}/{repo}/issues/{number}"));
	}
	if candidate.starts_with("github.com/") {
		return Url::parse(&format!("https://{candidate}"));
	}
	Url::parse(candidate)
}

fn split_repo_reference(candidate: &str) -> Option<(&str, &str, &str)> {
	let (path, number) = candidate.split_once('#')?;
	let (owner, repo) = path.split_once('/')?;
	let well_formed = !owner.is_empty() && !repo.is_empty() && !repo.contains('/') && !owner.contains(':') && is_short_reference(&candidate[path.len()..]);
	well_formed.then_some((owner, repo, number))
}

/// Resolve one line into a child issue URL.
///
/// `#N` is first expanded against the parent's `html_url`. The result must parse as a URL whose
/// host contains `github.com`.
pub fn resolve(line: &str, issue: &IssueRef) -> Result<Url, ParseFailure> {
	let expanded;
	let candidate = if is_short_reference(line) {
		let repo = RepoRef::from_url(&issue.html_url).ok_or_else(|| ParseFailure::invalid_reference(line, format!("cannot expand short reference, parent URL `{}` has no owner/repo", issue.html_url)))?;
		expanded = repo.short_reference(&line[1..]);
		tracing::trace!("[children] expanded {line} -> {expanded}");
		expanded.as_str()
	} else {
		line
	};

	let url = canonicalize_reference(candidate).map_err(|e| ParseFailure::invalid_reference(line, e.to_string()))?;
	if !is_github_host(&url) {
		return Err(ParseFailure::invalid_reference(line, format!("host `{}` is not github.com", url.host_str().unwrap_or_default())));
	}
	Ok(url)
}

pub(crate) fn is_github_host(url: &Url) -> bool {
	url.host_str().is_some_and(|host| host.contains("github.com"))
}

/// Outcome of resolving a section's lines in order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolvedSequence {
	/// Successfully resolved URLs, in line order.
	pub urls: Vec<Url>,
	/// Number of candidate lines handed in.
	pub total: usize,
	/// The failure that ended the sequence early, if any.
	pub stopped_by: Option<ParseFailure>,
}

impl ResolvedSequence {
	/// Lines consumed before the sequence ended.
	pub fn consumed(&self) -> usize {
		self.urls.len()
	}

	pub fn is_truncated(&self) -> bool {
		self.stopped_by.is_some()
	}
}

/// Resolve lines in order, stopping at the first one that fails.
///
/// Sections are routinely followed by unrelated prose or links, so the first line that does not
/// resolve is taken as the end of the list rather than as an error. Lines after it are not
/// looked at, even if they would resolve.
pub fn resolve_sequence<'a>(lines: impl IntoIterator<Item = &'a str>, issue: &IssueRef) -> ResolvedSequence {
	let mut sequence = ResolvedSequence::default();
	for line in lines {
		sequence.total += 1;
		if sequence.stopped_by.is_some() {
			continue;
		}
		match resolve(line, issue) {
			Ok(url) => {
				tracing::trace!("[children] resolved {line:?} -> {url}");
				sequence.urls.push(url);
			}
			Err(failure) => {
				tracing::debug!("[children] section ends at {line:?}: {failure}");
				sequence.stopped_by = Some(failure);
			}
		}
	}
	sequence
}

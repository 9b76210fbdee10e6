//! Why an extraction strategy gave up.
//!
//! These are control flow between strategies: the chain catches every one of them except
//! the failure of its last strategy, which is handed to the caller.

use miette::Diagnostic;
use serde::Serialize;

#[derive(Clone, Debug, Diagnostic, Eq, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseFailure {
	/// Header token absent, or present but nothing usable after it. The two are not told apart.
	#[error("section `{header}` is missing or has no usable lines")]
	#[diagnostic(code(issue_tree::children::section_missing))]
	SectionMissingOrEmpty { header: String },

	#[error("invalid child reference `{line}`: {reason}")]
	#[diagnostic(
		code(issue_tree::children::invalid_reference),
		help("children must be GitHub issue URLs, `owner/repo#123`, or `#123` for the current repository")
	)]
	InvalidChildReference { line: String, reason: String },

	#[error("line `{line}` looks like HTML where plain markdown was expected")]
	#[diagnostic(code(issue_tree::children::html_in_markdown), help("pass the raw issue `body`, not `body_html`"))]
	GuardViolation { line: String },

	#[error("could not query issue markup: {detail}")]
	#[diagnostic(code(issue_tree::children::markup))]
	Markup { detail: String },

	#[error("no extraction strategies configured")]
	#[diagnostic(code(issue_tree::children::no_strategies))]
	NoStrategies,
}

impl ParseFailure {
	pub(crate) fn section_missing(header: &str) -> Self {
		Self::SectionMissingOrEmpty { header: header.to_string() }
	}

	pub(crate) fn invalid_reference(line: &str, reason: impl Into<String>) -> Self {
		Self::InvalidChildReference {
			line: line.to_string(),
			reason: reason.into(),
		}
	}
}

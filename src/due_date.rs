//! Author-supplied ETAs (`eta: 2024-06-30`) in the rendered issue body.

use std::sync::LazyLock;

use jiff::civil::Date;
use miette::Diagnostic;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
	diagnostics::{ErrorEntry, ErrorSink},
	issue::IssueRef,
	markup,
};

/// User guide anchor for ETA problems.
pub const ETA_SECTION: &str = "#eta";
pub const ETA_NOT_FOUND_TITLE: &str = "ETA not found";
pub const ETA_NOT_FOUND_MESSAGE: &str = "ETA not found in issue body";

static ETA_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mi)^[ \t]*eta[ \t]*:[ \t]*(.*)$").expect("valid regex"));
static DAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid regex"));
static MONTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})(?:[^\d-]|$)").expect("valid regex"));
static QUARTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^(?:(\d{4})[ -]?q([1-4])|q([1-4])[ /-]?(\d{4}))").expect("valid regex"));

#[derive(Clone, Debug, Diagnostic, Eq, PartialEq, thiserror::Error)]
pub enum EtaError {
	#[error("no `eta:` line in issue body")]
	#[diagnostic(code(issue_tree::eta::not_found), help("add a line like `eta: 2024-06-30`"))]
	NotFound,

	#[error("`eta: {token}` is not a date")]
	#[diagnostic(code(issue_tree::eta::unparseable), help("use `YYYY-MM-DD`, `YYYY-MM`, or a quarter like `2024-Q3`"))]
	Unparseable { token: String },
}

/// ETA of an issue; empty when none could be found.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DueDate {
	pub eta: String,
}

/// Find the first usable `eta:` line in `text`.
///
/// Returns the date normalized to `YYYY-MM-DD`, `YYYY-MM`, or `YYYY-QN`. Lines whose token is not
/// a date are skipped in favour of later ones; if none parse, the first bad token is reported.
pub fn scan_eta(text: &str) -> Result<String, EtaError> {
	let mut first_bad: Option<String> = None;
	for captures in ETA_LINE.captures_iter(text) {
		let token = captures.get(1).map_or("", |m| m.as_str()).trim();
		match normalize_eta(token) {
			Some(eta) => return Ok(eta),
			None => {
				first_bad.get_or_insert_with(|| token.to_string());
			}
		}
	}
	Err(match first_bad {
		Some(token) => EtaError::Unparseable { token },
		None => EtaError::NotFound,
	})
}

fn normalize_eta(token: &str) -> Option<String> {
	if let Some(day) = DAY.find(token) {
		return day.as_str().parse::<Date>().ok().map(|date| date.to_string());
	}
	if let Some(captures) = MONTH.captures(token) {
		let month: u8 = captures[2].parse().ok()?;
		return (1..=12).contains(&month).then(|| format!("{}-{:02}", &captures[1], month));
	}
	if let Some(captures) = QUARTER.captures(token) {
		let (year, quarter) = match (captures.get(1), captures.get(2)) {
			(Some(year), Some(quarter)) => (year.as_str(), quarter.as_str()),
			_ => (captures.get(4)?.as_str(), captures.get(3)?.as_str()),
		};
		return Some(format!("{year}-Q{quarter}"));
	}
	None
}

/// ETA of `issue`, read from its rendered body.
///
/// Never fails. When no ETA is found the result is empty, and a diagnostic is appended to
/// `errors` for non-root issues with a known URL; otherwise the miss is silent.
pub fn get_due_date(issue: &IssueRef, errors: &mut impl ErrorSink) -> DueDate {
	let text = markup::flatten_text(&issue.body_html);
	match scan_eta(&text) {
		Ok(eta) => DueDate { eta },
		Err(err) => {
			if !issue.html_url.is_empty() && !issue.root_issue {
				tracing::warn!("[eta] {}: {err}", issue.html_url);
				errors.add_error(ErrorEntry::new(issue.clone(), ETA_SECTION, ETA_NOT_FOUND_TITLE, ETA_NOT_FOUND_MESSAGE));
			} else {
				tracing::debug!("[eta] {:?}: {err}, not reported", issue.html_url);
			}
			DueDate::default()
		}
	}
}

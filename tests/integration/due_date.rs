//! ETA scanning over rendered bodies, with diagnostics going to a caller-owned log.

use issue_tree::{DueDate, ErrorLog, IssueRef, get_due_date};
use rstest::rstest;

use crate::fixtures::{PARENT_URL, legacy_issue, tasklist_issue};

#[rstest]
fn test_eta_found(legacy_issue: IssueRef) {
	let mut errors = ErrorLog::new();
	assert_eq!(get_due_date(&legacy_issue, &mut errors), DueDate { eta: "2025-09-30".to_string() });
	assert!(errors.is_empty());
}

#[rstest]
fn test_eta_missing_reported_per_issue(tasklist_issue: IssueRef) {
	let mut errors = ErrorLog::new();
	let other = IssueRef::new("https://github.com/o/r/issues/77").with_body_html("<p>nothing</p>");

	assert_eq!(get_due_date(&tasklist_issue, &mut errors).eta, "");
	assert_eq!(get_due_date(&other, &mut errors).eta, "");

	assert_eq!(errors.len(), 2);
	assert_eq!(errors.for_issue(PARENT_URL).count(), 1);
	let entry = errors.for_issue("https://github.com/o/r/issues/77").next().unwrap();
	assert_eq!(entry.user_guide_section, "#eta");
	assert_eq!(entry.error_title, "ETA not found");
	assert_eq!(entry.error_message, "ETA not found in issue body");
}

#[rstest]
fn test_eta_missing_on_root_is_silent(tasklist_issue: IssueRef) {
	let mut errors = ErrorLog::new();
	assert_eq!(get_due_date(&tasklist_issue.root(), &mut errors), DueDate::default());
	assert!(errors.is_empty());
}

#[test]
fn test_eta_unparseable_is_reported_like_missing() {
	let issue = IssueRef::new(PARENT_URL).with_body_html("<p>ETA: when it's done</p>");
	let mut errors = ErrorLog::new();
	assert_eq!(get_due_date(&issue, &mut errors).eta, "");
	assert_eq!(errors.len(), 1);
}

//! The full tasklist -> children-line -> legacy HTML chain, as a caller drives it.

use issue_tree::{ChildRecord, Extractor, IssueRef, ParseFailure, StrategyKind, get_children};
use rstest::rstest;

use crate::fixtures::{PARENT_URL, children_line_issue, legacy_issue, tasklist_issue};

fn render(records: &[ChildRecord]) -> String {
	records.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

#[rstest]
fn test_tasklist_takes_precedence(tasklist_issue: IssueRef) {
	let children = get_children(&tasklist_issue).unwrap();
	insta::assert_snapshot!(render(&children), @r"
	tasklist https://github.com/o/r/issues/2
	tasklist https://github.com/o/r/issues/3
	tasklist https://github.com/other/repo/issues/4
	");
}

#[rstest]
fn test_children_line_truncates_at_unrelated_link(children_line_issue: IssueRef) {
	let extraction = Extractor::default().children_with_trail(&children_line_issue).unwrap();

	assert_eq!(extraction.strategy, StrategyKind::ChildrenLine);
	assert_eq!(extraction.fallbacks.len(), 1);
	assert_eq!(extraction.fallbacks[0].strategy, StrategyKind::TaskList);
	insta::assert_snapshot!(render(&extraction.children), @r"
	children: https://github.com/o/r/issues/5
	children: https://github.com/o/r/issues/7
	children: https://github.com/o/r/issues/10
	children: https://github.com/o/r/issues/11
	");
}

#[rstest]
fn test_legacy_html_fallback(legacy_issue: IssueRef) {
	let extraction = Extractor::default().children_with_trail(&legacy_issue).unwrap();

	assert_eq!(extraction.strategy, StrategyKind::LegacyHtml);
	let fell_through: Vec<StrategyKind> = extraction.fallbacks.iter().map(|f| f.strategy).collect();
	assert_eq!(fell_through, vec![StrategyKind::TaskList, StrategyKind::ChildrenLine]);
	assert_eq!(
		extraction.children,
		vec![
			ChildRecord::new("Child issues", "https://github.com/o/r/issues/20"),
			ChildRecord::new("Child issues", "https://github.com/x/y/issues/21"),
		]
	);
}

#[test]
fn test_html_in_body_falls_back_to_legacy() {
	// Some callers hand the rendered HTML in as `body`; the children-line guard must reject it
	let html = r#"<p>children:</p>
<h3>Children</h3>
<ul>
<li><a data-hovercard-type="issue" href="https://github.com/o/r/issues/8">#8</a></li>
</ul>"#;
	let issue = IssueRef::new(PARENT_URL).with_body(html).with_body_html(html);
	let extraction = Extractor::default().children_with_trail(&issue).unwrap();

	assert_eq!(extraction.strategy, StrategyKind::LegacyHtml);
	assert!(matches!(extraction.fallbacks[1].failure, ParseFailure::GuardViolation { .. }));
	assert_eq!(extraction.children, vec![ChildRecord::new("Children", "https://github.com/o/r/issues/8")]);
}

#[test]
fn test_nothing_found_is_empty_not_error() {
	let issue = IssueRef::new(PARENT_URL).with_body("No structure at all").with_body_html("<p>No structure at all</p>");
	assert!(get_children(&issue).unwrap().is_empty());
}

#[rstest]
#[case::tasklist(tasklist_issue())]
#[case::children_line(children_line_issue())]
#[case::legacy(legacy_issue())]
fn test_repeatable(#[case] issue: IssueRef) {
	let extractor = Extractor::default();
	assert_eq!(extractor.children(&issue).unwrap(), extractor.children(&issue).unwrap());
}

#[test]
fn test_concurrent_callers() {
	let extractor = Extractor::default();
	let issues = [tasklist_issue(), children_line_issue(), legacy_issue()];
	let expected: Vec<_> = issues.iter().map(|issue| extractor.children(issue).unwrap()).collect();

	let extractor = &extractor;
	std::thread::scope(|s| {
		let handles: Vec<_> = issues.iter().map(|issue| s.spawn(move || extractor.children(issue).unwrap())).collect();
		let got: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
		assert_eq!(got, expected);
	});
}

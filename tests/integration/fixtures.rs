//! Shared issue fixtures.
//!
//! Bodies are shaped like what GitHub actually serves: markdown in `body`, the server render of
//! the same issue in `body_html`.

use std::path::PathBuf;

use issue_tree::IssueRef;
use rstest::fixture;

pub const PARENT_URL: &str = "https://github.com/o/r/issues/1";

/// Issue using a fenced tasklist block, with a `children:` list further down.
#[fixture]
pub fn tasklist_issue() -> IssueRef {
	IssueRef::new(PARENT_URL).with_title("Tasklist parent").with_body(
		"Overview of the work.\r\n\r\n```[tasklist]\r\n### Tasks\r\n- [ ] https://github.com/o/r/issues/2\r\n- [x] #3\r\n- [ ] other/repo#4\r\n```\r\n\r\nchildren:\r\n- #99\r\n",
	)
}

/// Issue using a `children:` list followed by unrelated prose.
#[fixture]
pub fn children_line_issue() -> IssueRef {
	IssueRef::new(PARENT_URL)
		.with_title("Children parent")
		.with_body("children:\n- https://github.com/o/r/issues/5\n- https://github.com/o/r/issues/7\n- #10\n- #11\n\nSee also: https://unrelated.example/x")
}

/// Issue predating both text conventions; children only appear in the rendered HTML.
#[fixture]
pub fn legacy_issue() -> IssueRef {
	IssueRef::new(PARENT_URL).with_title("Legacy parent").with_body("Just prose, no list here.").with_body_html(
		r#"<p>Just prose, no list here.</p>
<h2>Child issues</h2>
<ul>
<li><a class="issue-link js-issue-link" data-hovercard-type="issue" data-hovercard-url="/o/r/issues/20/hovercard" href="https://github.com/o/r/issues/20">#20</a></li>
<li><a class="issue-link js-issue-link" data-hovercard-type="issue" data-hovercard-url="/x/y/issues/21/hovercard" href="https://github.com/x/y/issues/21">x/y#21</a></li>
</ul>
<p>eta: 2025-09-30</p>"#,
	)
}

/// Writes `issue` as GitHub-style JSON into a fresh temp dir.
pub fn write_issue_json(issue: &IssueRef) -> (tempfile::TempDir, PathBuf) {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("issue.json");
	std::fs::write(&path, serde_json::to_string(issue).unwrap()).unwrap();
	(dir, path)
}

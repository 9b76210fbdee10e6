//! Which headings introduce a list of children in legacy issue bodies.

/// Labels recognized out of the box. Compared case-insensitively, without a trailing `:`.
pub const CHILDREN_HEADINGS: [&str; 6] = ["children", "child issues", "sub-issues", "subissues", "sub issues", "tasks"];

/// Whether `heading` names a children list. `extra` extends the built-in labels.
pub fn is_valid_children(heading: Option<&str>, extra: &[String]) -> bool {
	let Some(heading) = heading.map(normalize).filter(|h| !h.is_empty()) else {
		return false;
	};
	CHILDREN_HEADINGS.iter().copied().chain(extra.iter().map(String::as_str)).any(|label| normalize(label) == heading)
}

fn normalize(label: &str) -> String {
	label.trim().trim_end_matches(':').trim_end().to_lowercase()
}

//! Finding a header token in raw text and cleaning up the lines after it.

/// Lines following the first occurrence of `header` in `text`.
///
/// The header line itself is dropped. Runs of `\r`/`\n` count as a single break, so blank
/// lines never show up. Each line gets its markdown link unwrapped (see [`unwrap_markdown_link`]).
///
/// An absent header yields an empty vec: a missing section is a normal outcome, not an error.
pub fn locate<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
	let Some(start) = text.find(header) else {
		return Vec::new();
	};
	text[start..].split(['\r', '\n']).filter(|line| !line.is_empty()).skip(1).map(unwrap_markdown_link).collect()
}

/// `[label](url)` -> `url`. Lines without a `](` are returned untouched.
pub fn unwrap_markdown_link(line: &str) -> &str {
	match line.rsplit_once("](") {
		Some((_, tail)) => tail.strip_suffix(')').unwrap_or(tail),
		None => line,
	}
}

/// Whether the line is a markdown list item (`- ...`), ignoring leading whitespace.
pub fn is_task_list_item(line: &str) -> bool {
	line.trim_start().starts_with('-')
}

/// Last space-separated token of the trimmed line, dropping checkbox and bullet decoration:
/// `- [ ] https://...` -> `https://...`. None for blank lines.
pub fn last_token(line: &str) -> Option<&str> {
	line.trim().split(' ').next_back().filter(|token| !token.is_empty())
}

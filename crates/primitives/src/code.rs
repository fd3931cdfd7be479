use std::sync::LazyLock;

use regex::Regex;

/// Closed (or end-of-text terminated) code regions, in priority order:
/// indented lines, fenced blocks, `[code]` blocks, inline spans.
static CODE_REGIONS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?m)^(?: {4}|\t)[^\n]*|(?:^|\n)```[\s\S]*?(?:\n```|\z)|(?:^|\n)\[code\][\s\S]*?(?:\[/code\]|\z)|`[^`\n]*`")
		.expect("code region pattern is valid")
});

/// Returns true if byte offset `pos` lies inside a code region of `text`.
///
/// Region bounds are inclusive, so a cursor sitting right after a closing
/// fence still counts as inside. A lone backtick opened after the last
/// closed region makes everything after it code.
pub fn in_code_region(text: &str, pos: usize) -> bool {
	let mut end = 0;
	for m in CODE_REGIONS.find_iter(text) {
		let start = if text[m.start()..].starts_with('\n') { m.start() + 1 } else { m.start() };
		if start <= pos && pos <= m.end() {
			return true;
		}
		end = m.end();
	}

	text[end..].find('`').is_some_and(|open| pos > end + open)
}

#[cfg(test)]
mod tests;

use crate::trigger::is_word_char;

/// The in-progress reference under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSpan<'a> {
	/// Char column of the trigger character within the line.
	pub start: usize,
	/// Text between the trigger character and the cursor.
	pub term: &'a str,
}

impl TermSpan<'_> {
	/// Char column where the completed reference starts replacing text.
	pub fn replace_start(&self) -> usize {
		self.start + 1
	}
}

/// Finds the term being typed at char column `col` of `line`.
///
/// Scans back to the nearest `trigger` on the line. The trigger must open the
/// line or follow a non-word character, and no whitespace may separate it
/// from the cursor. Returns `None` otherwise.
pub fn term_at_cursor(line: &str, col: usize, trigger: char) -> Option<TermSpan<'_>> {
	let end = line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx);
	let prefix = &line[..end];
	let trigger_idx = prefix.rfind(trigger)?;
	let term = &prefix[trigger_idx + trigger.len_utf8()..];

	if term.chars().any(char::is_whitespace) {
		return None;
	}
	if prefix[..trigger_idx].chars().next_back().is_some_and(is_word_char) {
		return None;
	}

	Some(TermSpan {
		start: prefix[..trigger_idx].chars().count(),
		term,
	})
}

#[cfg(test)]
mod tests;

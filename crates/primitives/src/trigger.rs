//! Autocomplete trigger rule.
//!
//! Decides, from the text and cursor, whether typing the trigger character
//! should open (or keep open) the hashtag autocomplete. Three situations veto
//! it:
//!
//! - backspacing into a reference that was already completed (`#category |`
//!   becoming `#category|`),
//! - a run of trigger characters at line start, which is a heading marker
//!   (`### `), not a reference,
//! - a cursor inside a code region.

use crate::code::in_code_region;

/// Heading marker runs are only recognised strictly below this column.
pub const HEADING_MAX_COLUMN: usize = 6;

/// Text and cursor state for one trigger evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerContext<'a> {
	/// Full editor contents.
	pub text: &'a str,
	/// Zero-based line of the cursor.
	pub row: usize,
	/// Zero-based column of the cursor within its line, in chars.
	pub col: usize,
	/// Whether this evaluation follows a backspace.
	pub backspace: bool,
}

impl<'a> TriggerContext<'a> {
	/// Context for a plain keystroke.
	pub fn new(text: &'a str, row: usize, col: usize) -> Self {
		Self {
			text,
			row,
			col,
			backspace: false,
		}
	}

	/// Marks this evaluation as following a backspace.
	pub fn after_backspace(mut self) -> Self {
		self.backspace = true;
		self
	}

	/// Byte offset of the cursor in [`Self::text`], clamped to the line end.
	pub fn byte_offset(&self) -> Option<usize> {
		let mut line_start = 0;
		for (row, line) in self.text.split('\n').enumerate() {
			if row == self.row {
				let col = line.char_indices().nth(self.col).map_or(line.len(), |(idx, _)| idx);
				return Some(line_start + col);
			}
			line_start += line.len() + 1;
		}
		None
	}

	fn line(&self) -> Option<&'a str> {
		self.text.split('\n').nth(self.row)
	}
}

/// Returns true if autocomplete may run at the cursor described by `ctx`.
///
/// Cursors on a row past the end of the text never trigger.
pub fn should_trigger(ctx: &TriggerContext<'_>, trigger: char) -> bool {
	let (Some(mut line), Some(offset)) = (ctx.line(), ctx.byte_offset()) else {
		return false;
	};
	let mut col = ctx.col;

	if ctx.backspace {
		col = col.saturating_sub(1);
		line = drop_last_char(line);
		if is_completed_reference(line, trigger) {
			return false;
		}
	}

	if col > 0 && col < HEADING_MAX_COLUMN && is_heading_marker(line, col, trigger) {
		return false;
	}

	!in_code_region(ctx.text, offset)
}

fn drop_last_char(line: &str) -> &str {
	line.char_indices().next_back().map_or(line, |(idx, _)| &line[..idx])
}

/// Trigger followed by at least one word character at line start.
fn is_completed_reference(line: &str, trigger: char) -> bool {
	let mut chars = line.chars();
	chars.next() == Some(trigger) && chars.next().is_some_and(is_word_char)
}

/// The first `col` chars of `line` are all `trigger`.
fn is_heading_marker(line: &str, col: usize, trigger: char) -> bool {
	line.chars().take(col).filter(|&c| c == trigger).count() == col
}

pub(crate) fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests;

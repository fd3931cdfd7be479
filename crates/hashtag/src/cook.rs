use taglink_primitives::{TYPE_SUFFIX_SEPARATOR, in_code_region};

use crate::markup::{Element, Fragment, Node, PLACEHOLDER_CLASS};

/// Turns plain text into a fragment with a placeholder for every reference.
///
/// A reference is the trigger followed by slug characters (word characters
/// and `-`), optionally followed by `::type`. It must open the text or follow
/// whitespace, and must not sit inside a code region.
pub fn cook(text: &str, trigger: char) -> Fragment {
	let mut fragment = Fragment::new();
	let mut copied = 0;
	let mut prev: Option<char> = None;

	for (idx, c) in text.char_indices() {
		let at_boundary = prev.is_none_or(char::is_whitespace);
		prev = Some(c);
		if c != trigger || !at_boundary || idx < copied {
			continue;
		}

		let body_start = idx + c.len_utf8();
		let Some(len) = reference_len(&text[body_start..]) else {
			continue;
		};
		if in_code_region(text, idx) {
			continue;
		}

		let end = body_start + len;
		fragment.push(Node::text(&text[copied..idx]));
		fragment.push(
			Element::new("span")
				.with_attr("class", PLACEHOLDER_CLASS)
				.with_text(&text[idx..end])
				.into(),
		);
		copied = end;
	}

	fragment.push(Node::text(&text[copied..]));
	fragment
}

fn is_slug_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_' || c == '-'
}

fn slug_len(s: &str) -> usize {
	s.find(|c: char| !is_slug_char(c)).unwrap_or(s.len())
}

/// Byte length of the `slug[::type]` at the start of `s`, if any.
fn reference_len(s: &str) -> Option<usize> {
	let slug = slug_len(s);
	if slug == 0 {
		return None;
	}
	let kind = s[slug..]
		.strip_prefix(TYPE_SUFFIX_SEPARATOR)
		.map(slug_len)
		.filter(|&len| len > 0)
		.map_or(0, |len| TYPE_SUFFIX_SEPARATOR.len() + len);
	Some(slug + kind)
}

#[cfg(test)]
mod tests;

use super::*;

#[test]
fn extracts_term_up_to_cursor() {
	let span = term_at_cursor("see #featu here", 10, '#').unwrap();
	assert_eq!(span.term, "featu");
	assert_eq!(span.start, 4);
	assert_eq!(span.replace_start(), 5);
}

#[test]
fn bare_trigger_yields_empty_term() {
	assert_eq!(term_at_cursor("#", 1, '#').map(|s| s.term), Some(""));
}

#[test]
fn whitespace_between_trigger_and_cursor_is_no_match() {
	assert_eq!(term_at_cursor("#done and more", 14, '#'), None);
}

#[test]
fn trigger_inside_word_is_ignored() {
	assert_eq!(term_at_cursor("issue#12", 8, '#'), None);
}

#[test]
fn multibyte_columns_are_chars() {
	let span = term_at_cursor("ça #été", 7, '#').unwrap();
	assert_eq!(span.term, "été");
	assert_eq!(span.start, 3);
}

#[test]
fn no_trigger_before_cursor() {
	assert_eq!(term_at_cursor("plain text #later", 5, '#'), None);
}

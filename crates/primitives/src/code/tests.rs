use super::*;

fn cursor_at(text: &str, marker: &str) -> usize {
	text.find(marker).unwrap()
}

#[test]
fn plain_text_is_not_code() {
	assert!(!in_code_region("hello #", 6));
}

#[test]
fn fenced_block_contains_cursor() {
	let text = "intro\n```\nlet x = #\n```\nafter #";
	assert!(in_code_region(text, cursor_at(text, "#\n```")));
	assert!(!in_code_region(text, text.len() - 1));
}

#[test]
fn unterminated_fence_runs_to_end() {
	let text = "intro\n```rust\nfn main() { #";
	assert!(in_code_region(text, text.len()));
	assert!(!in_code_region(text, 2));
}

#[test]
fn inline_span_is_code() {
	let text = "use `#ff0000` or #red";
	assert!(in_code_region(text, cursor_at(text, "#ff")));
	assert!(!in_code_region(text, cursor_at(text, "#red")));
}

#[test]
fn open_backtick_makes_rest_code() {
	let text = "see `unfinished #";
	assert!(in_code_region(text, text.len()));
	assert!(!in_code_region(text, 2));
}

#[test]
fn indented_line_is_code() {
	let text = "para\n    indented #\nnext #";
	assert!(in_code_region(text, cursor_at(text, "#\n")));
	assert!(!in_code_region(text, text.len()));
}

#[test]
fn bbcode_block_is_code() {
	let text = "[code]\n#not-a-tag\n[/code]\n#tag";
	assert!(in_code_region(text, cursor_at(text, "#not")));
	assert!(!in_code_region(text, cursor_at(text, "#tag")));
}

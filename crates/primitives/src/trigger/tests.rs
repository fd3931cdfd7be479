use rstest::rstest;

use super::*;

#[rstest]
#[case::plain_text("hello #", 0, 6, true)]
#[case::heading_marker("### ", 0, 3, false)]
#[case::single_hash_at_line_start("#", 0, 1, false)]
#[case::reference_at_line_start("#c", 0, 2, true)]
#[case::heading_run_past_limit("######", 0, 6, true)]
#[case::column_zero("", 0, 0, true)]
#[case::second_line_heading("intro\n## ", 1, 2, false)]
#[case::inside_fence("```\nsee #", 1, 5, false)]
#[case::after_fence("```\ncode\n```\nsee #", 3, 5, true)]
#[case::inside_inline_code("use `#", 0, 6, false)]
#[case::row_out_of_range("hello", 3, 0, false)]
fn keystroke(#[case] text: &str, #[case] row: usize, #[case] col: usize, #[case] expected: bool) {
	assert_eq!(should_trigger(&TriggerContext::new(text, row, col), '#'), expected);
}

#[rstest]
#[case::into_completed_reference("#category ", 10, false)]
#[case::inside_completed_reference("#category", 9, false)]
#[case::reference_mid_line("hello #category ", 16, true)]
#[case::double_trigger("##x ", 4, true)]
#[case::heading_after_backspace("### ", 4, false)]
fn backspace(#[case] text: &str, #[case] col: usize, #[case] expected: bool) {
	let ctx = TriggerContext::new(text, 0, col).after_backspace();
	assert_eq!(should_trigger(&ctx, '#'), expected);
}

#[test]
fn custom_trigger_character() {
	assert!(!should_trigger(&TriggerContext::new("@@", 0, 2), '@'));
	assert!(should_trigger(&TriggerContext::new("hi @", 0, 4), '@'));
	assert!(!should_trigger(&TriggerContext::new("@sam ", 0, 5).after_backspace(), '@'));
}

#[test]
fn byte_offset_accounts_for_multibyte_lines() {
	let ctx = TriggerContext::new("héllo\nwörld #", 1, 6);
	assert_eq!(ctx.byte_offset(), Some("héllo\nwörld ".len()));
	assert_eq!(TriggerContext::new("ab", 0, 10).byte_offset(), Some(2));
	assert_eq!(TriggerContext::new("ab", 1, 0).byte_offset(), None);
}

use pretty_assertions::assert_eq;

use super::*;

fn placeholder(text: &str) -> Node {
	Element::new("span").with_attr("class", PLACEHOLDER_CLASS).with_text(text).into()
}

#[test]
fn wraps_references_and_keeps_surrounding_text() {
	let fragment = cook("see #bugs and #support::tag.", '#');
	assert_eq!(
		fragment.nodes,
		vec![
			Node::text("see "),
			placeholder("#bugs"),
			Node::text(" and "),
			placeholder("#support::tag"),
			Node::text("."),
		]
	);
}

#[test]
fn reference_at_start_of_text() {
	assert_eq!(cook("#feature-request", '#').nodes, vec![placeholder("#feature-request")]);
}

#[test]
fn ignores_headings_and_mid_word_triggers() {
	for text in ["# Heading", "## Heading", "issue#12", "#"] {
		assert_eq!(cook(text, '#').nodes, vec![Node::text(text)], "{text:?}");
	}
}

#[test]
fn incomplete_type_suffix_is_not_part_of_reference() {
	let fragment = cook("#bugs:: x", '#');
	assert_eq!(fragment.nodes, vec![placeholder("#bugs"), Node::text(":: x")]);
}

#[test]
fn skips_code_regions() {
	let text = "`#inline` then #real\n```\n#fenced\n```";
	let fragment = cook(text, '#');
	assert_eq!(fragment.placeholders().map(Element::text_content).collect::<Vec<_>>(), ["#real"]);
}

#[test]
fn custom_trigger() {
	let fragment = cook("ping @ops and #bugs", '@');
	assert_eq!(fragment.placeholders().map(Element::text_content).collect::<Vec<_>>(), ["@ops"]);
}

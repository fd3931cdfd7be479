use pretty_assertions::assert_eq;

use super::*;

#[test]
fn renders_nested_markup_with_escaping() {
	let fragment: Fragment = [
		Node::text("a < b & "),
		Element::new("a")
			.with_attr("href", "/q?x=\"1\"&y=2")
			.with_child(Element::new("span").with_text("<b>"))
			.into(),
	]
	.into_iter()
	.collect();

	assert_eq!(
		fragment.to_string(),
		r#"a &lt; b &amp; <a href="/q?x=&quot;1&quot;&amp;y=2"><span>&lt;b&gt;</span></a>"#
	);
}

#[test]
fn push_merges_adjacent_text() {
	let mut fragment = Fragment::new();
	fragment.push(Node::text("one "));
	fragment.push(Node::text(""));
	fragment.push(Node::text("two"));
	assert_eq!(fragment.nodes, vec![Node::text("one two")]);
}

#[test]
fn placeholders_are_found_inside_containers() {
	let placeholder = Element::new("span").with_attr("class", "mention hashtag-raw").with_text("#bugs");
	let fragment = Fragment {
		nodes: vec![
			Element::new("p").with_child(Node::text("see ")).with_child(placeholder.clone()).into(),
			Element::new("span").with_attr("class", "hashtag-rawish").with_text("#no").into(),
		],
	};

	let found: Vec<_> = fragment.placeholders().collect();
	assert_eq!(found, vec![&placeholder]);
	assert_eq!(found[0].text_content(), "#bugs");
}

use super::*;

#[test]
fn strip_type_suffix_only_matches_exact_kind() {
	assert_eq!(strip_type_suffix("support::tag", "tag"), "support");
	assert_eq!(strip_type_suffix("support::tag", "category"), "support::tag");
	assert_eq!(strip_type_suffix("support", "tag"), "support");
	assert_eq!(strip_type_suffix("hashtag", "tag"), "hashtag");
}

#[test]
fn type_order_parses_comma_list() {
	let order: TypeOrder = " category, tag,,channel ".parse().unwrap();
	assert_eq!(order.iter().collect::<Vec<_>>(), ["category", "tag", "channel"]);
	assert_eq!(order.to_string(), "category,tag,channel");
}

#[test]
fn search_result_deserializes_wire_names() {
	let json = r#"{
		"ref": "feature",
		"text": "Feature",
		"icon": "folder",
		"relative_url": "/c/feature/2",
		"type": "category",
		"description": "Ideas"
	}"#;
	let tag: Hashtag = serde_json::from_str(json).unwrap();
	assert_eq!(tag.reference, "feature");
	assert_eq!(tag.kind, "category");
	assert_eq!(tag.canonical_slug(), "feature");
	assert_eq!(tag.completion_text('#'), "#feature");
}

#[test]
fn lookup_entity_keeps_slug() {
	let json = r#"{"ref":"bugs::tag","text":"bugs","icon":"tag","relative_url":"/tag/bugs","slug":"bugs"}"#;
	let tag: Hashtag = serde_json::from_str(json).unwrap();
	assert_eq!(tag.kind, "");
	assert_eq!(tag.canonical_slug(), "bugs");
}

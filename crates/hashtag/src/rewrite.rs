//! Placeholder rewriting.
//!
//! Each placeholder's reference is tried against the registry under every
//! type in priority order, stripping a matching `::type` suffix first. The
//! first hit replaces the placeholder with a link; misses stay untouched.

use indexmap::IndexSet;
use taglink_primitives::{Hashtag, TypeOrder, strip_type_suffix};
use tracing::trace;

use crate::markup::{COOKED_CLASS, Element, Fragment, Node};
use crate::registry::HashtagRegistry;

/// Builds the resolved link element for `entity`.
pub fn link_element(entity: &Hashtag) -> Element {
	let icon = &entity.icon;
	Element::new("a")
		.with_attr("class", COOKED_CLASS)
		.with_attr("href", &entity.relative_url)
		.with_attr("data-type", &entity.kind)
		.with_attr("data-slug", entity.canonical_slug())
		.with_child(
			Element::new("svg")
				.with_attr("class", format!("fa d-icon d-icon-{icon} svg-icon svg-node"))
				.with_child(Element::new("use").with_attr("href", format!("#{icon}"))),
		)
		.with_child(Element::new("span").with_text(&entity.text))
}

/// Replaces every placeholder the registry can resolve with a link.
///
/// Returns the lowercase, de-duplicated references of every placeholder
/// found, resolved or not, that has not been looked up yet, in document
/// order. Running it again on rewritten content returns nothing and changes
/// nothing.
pub fn resolve_seen(order: &TypeOrder, fragment: &mut Fragment, registry: &HashtagRegistry, trigger: char) -> Vec<String> {
	let mut unseen = IndexSet::new();
	let mut resolved = 0usize;

	rewrite_nodes(&mut fragment.nodes, &mut |placeholder| {
		let raw = raw_reference(placeholder, trigger);
		let lower = raw.to_lowercase();
		if !registry.is_checked(&lower) {
			unseen.insert(lower);
		}

		let entity = order.iter().find_map(|kind| registry.get(kind, strip_type_suffix(&raw, kind)))?;
		resolved += 1;
		Some(link_element(entity))
	});

	if resolved > 0 || !unseen.is_empty() {
		trace!(resolved, unseen = unseen.len(), "rewrite.resolve_seen");
	}
	unseen.into_iter().collect()
}

/// Lowercase, de-duplicated references of all placeholders still present.
pub fn pending_references(fragment: &Fragment, trigger: char) -> Vec<String> {
	let pending: IndexSet<String> = fragment
		.placeholders()
		.map(|placeholder| raw_reference(placeholder, trigger).to_lowercase())
		.collect();
	pending.into_iter().collect()
}

fn raw_reference(placeholder: &Element, trigger: char) -> String {
	let text = placeholder.text_content();
	match text.strip_prefix(trigger) {
		Some(stripped) => stripped.to_owned(),
		None => text,
	}
}

fn rewrite_nodes(nodes: &mut [Node], resolve: &mut impl FnMut(&Element) -> Option<Element>) {
	for node in nodes {
		let Node::Element(element) = node else {
			continue;
		};
		if !element.is_placeholder() {
			rewrite_nodes(&mut element.children, resolve);
			continue;
		}
		if let Some(link) = resolve(element) {
			*node = Node::Element(link);
		}
	}
}

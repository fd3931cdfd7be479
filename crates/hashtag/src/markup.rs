//! Minimal content tree for rendered posts.
//!
//! Only what placeholder rewriting needs: elements with ordered attributes,
//! text, and HTML serialization.

use std::fmt::{self, Write as _};

use indexmap::IndexMap;

/// Class marking an unresolved reference.
pub const PLACEHOLDER_CLASS: &str = "hashtag-raw";

/// Class marking a resolved entity link.
pub const COOKED_CLASS: &str = "hashtag-cooked";

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Text(String),
	Element(Element),
}

impl Node {
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			Self::Text(_) => None,
		}
	}

	fn write_text(&self, out: &mut String) {
		match self {
			Self::Text(text) => out.push_str(text),
			Self::Element(element) => {
				for child in &element.children {
					child.write_text(out);
				}
			}
		}
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

/// An element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	pub tag: String,
	pub attrs: IndexMap<String, String>,
	pub children: Vec<Node>,
}

impl Element {
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attrs: IndexMap::new(),
			children: Vec::new(),
		}
	}

	/// Builder: sets an attribute, keeping its first position if already present.
	pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}

	pub fn with_child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	pub fn with_text(self, text: impl Into<String>) -> Self {
		self.with_child(Node::Text(text.into()))
	}

	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.attr("class").is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
	}

	/// Returns true for an unresolved reference placeholder.
	pub fn is_placeholder(&self) -> bool {
		self.tag == "span" && self.has_class(PLACEHOLDER_CLASS)
	}

	/// Concatenated text of all descendants.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.write_text(&mut out);
		}
		out
	}
}

/// An ordered sequence of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
	pub nodes: Vec<Node>,
}

impl Fragment {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a node, merging adjacent text.
	pub fn push(&mut self, node: Node) {
		if let Node::Text(text) = &node {
			if text.is_empty() {
				return;
			}
			if let Some(Node::Text(last)) = self.nodes.last_mut() {
				last.push_str(text);
				return;
			}
		}
		self.nodes.push(node);
	}

	/// Iterates placeholder elements in document order.
	pub fn placeholders(&self) -> impl Iterator<Item = &Element> {
		let mut found = Vec::new();
		collect_placeholders(&self.nodes, &mut found);
		found.into_iter()
	}
}

impl FromIterator<Node> for Fragment {
	fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
		let mut fragment = Self::new();
		for node in iter {
			fragment.push(node);
		}
		fragment
	}
}

fn collect_placeholders<'a>(nodes: &'a [Node], found: &mut Vec<&'a Element>) {
	for node in nodes {
		if let Node::Element(element) = node {
			if element.is_placeholder() {
				found.push(element);
			} else {
				collect_placeholders(&element.children, found);
			}
		}
	}
}

fn escape(out: &mut impl fmt::Write, raw: &str, attribute: bool) -> fmt::Result {
	for c in raw.chars() {
		match c {
			'&' => out.write_str("&amp;")?,
			'<' => out.write_str("&lt;")?,
			'>' => out.write_str("&gt;")?,
			'"' if attribute => out.write_str("&quot;")?,
			c => out.write_char(c)?,
		}
	}
	Ok(())
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => escape(f, text, false),
			Self::Element(element) => fmt::Display::fmt(element, f),
		}
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{}", self.tag)?;
		for (name, value) in &self.attrs {
			write!(f, " {name}=\"")?;
			escape(f, value, true)?;
			f.write_char('"')?;
		}
		f.write_char('>')?;
		for child in &self.children {
			fmt::Display::fmt(child, f)?;
		}
		write!(f, "</{}>", self.tag)
	}
}

impl fmt::Display for Fragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.nodes.iter().try_for_each(|node| fmt::Display::fmt(node, f))
	}
}

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Trigger character used when none is configured.
pub const DEFAULT_TRIGGER: char = '#';

/// Separator between a reference and an explicit type (`#support::tag`).
pub const TYPE_SUFFIX_SEPARATOR: &str = "::";

/// A resolvable entity, as returned by both the search and batch lookup endpoints.
///
/// Search results always carry `type`; batch lookups carry `slug` and group
/// entities by type at the response level instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hashtag {
	/// Reference the entity answers to (what follows the trigger character).
	#[serde(rename = "ref")]
	pub reference: String,
	/// Display text.
	pub text: String,
	/// Icon identifier.
	#[serde(default)]
	pub icon: String,
	/// Link target, relative to the site root.
	pub relative_url: String,
	/// Entity type identifier (`category`, `tag`, ...).
	#[serde(rename = "type", default)]
	pub kind: String,
	/// Canonical slug.
	#[serde(default)]
	pub slug: String,
	/// Optional longer description shown next to candidates.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl Hashtag {
	/// Text inserted into the editor when this entity is committed.
	pub fn completion_text(&self, trigger: char) -> String {
		format!("{trigger}{}", self.reference)
	}

	/// Canonical slug, falling back to the reference when the resolver omitted it.
	pub fn canonical_slug(&self) -> &str {
		if self.slug.is_empty() { &self.reference } else { &self.slug }
	}
}

/// Ordered entity-type identifiers.
///
/// The first type wins when a bare reference resolves under several types.
/// The same order is forwarded to the resolver to bias its ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeOrder(Vec<String>);

impl TypeOrder {
	/// Creates an order from type identifiers, highest priority first.
	pub fn new<I, S>(types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(types.into_iter().map(Into::into).collect())
	}

	/// Iterates type identifiers in priority order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<S: Into<String>> FromIterator<S> for TypeOrder {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter)
	}
}

impl fmt::Display for TypeOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join(","))
	}
}

impl FromStr for TypeOrder {
	type Err = std::convert::Infallible;

	/// Parses a comma-separated list, ignoring blanks.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(s.split(',').map(str::trim).filter(|t| !t.is_empty()).collect())
	}
}

/// Strips a trailing `::<kind>` suffix from `reference`, if present.
pub fn strip_type_suffix<'a>(reference: &'a str, kind: &str) -> &'a str {
	reference
		.strip_suffix(kind)
		.and_then(|rest| rest.strip_suffix(TYPE_SUFFIX_SEPARATOR))
		.unwrap_or(reference)
}

#[cfg(test)]
mod tests;

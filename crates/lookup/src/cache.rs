//! Short-lived search result memo.
//!
//! Entries have no individual expiry. A single write timestamp covers the
//! whole cache, and once it is older than the TTL everything is dropped
//! together on the next access.

use std::time::Duration;

use rustc_hash::FxHashMap as HashMap;
use tokio::time::Instant;
use tracing::trace;

use crate::SearchOutcome;

/// Term-keyed search results sharing one expiry epoch.
#[derive(Debug)]
pub struct SearchCache {
	entries: HashMap<String, SearchOutcome>,
	/// Time of the most recent write, if any since the last wipe.
	written_at: Option<Instant>,
	ttl: Duration,
}

impl SearchCache {
	/// Creates an empty cache wiped `ttl` after its last write.
	pub fn new(ttl: Duration) -> Self {
		Self {
			entries: HashMap::default(),
			written_at: None,
			ttl,
		}
	}

	/// Drops every entry if the last write is at least one TTL old.
	///
	/// Returns true if a wipe happened.
	pub fn expire(&mut self, now: Instant) -> bool {
		let Some(written_at) = self.written_at else {
			return false;
		};
		if now.saturating_duration_since(written_at) < self.ttl {
			return false;
		}

		trace!(entries = self.entries.len(), "search.cache.wipe");
		self.entries.clear();
		self.written_at = None;
		true
	}

	/// Returns the memoized outcome for `term`.
	///
	/// Does not check expiry; call [`Self::expire`] first.
	pub fn get(&self, term: &str) -> Option<&SearchOutcome> {
		self.entries.get(term)
	}

	/// Stores an outcome and restarts the expiry window for the whole cache.
	pub fn insert(&mut self, term: String, outcome: SearchOutcome, now: Instant) {
		self.entries.insert(term, outcome);
		self.written_at = Some(now);
	}

	pub fn contains(&self, term: &str) -> bool {
		self.entries.contains_key(term)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests;

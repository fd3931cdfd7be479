use std::sync::Arc;

use parking_lot::Mutex;
use taglink_lookup::{Resolver, SearchConfig, SearchController, SearchOutcome};
use taglink_primitives::{DEFAULT_TRIGGER, TriggerContext, TypeOrder, should_trigger};
use tracing::{debug, warn};

use crate::markup::Fragment;
use crate::registry::HashtagRegistry;
use crate::{Result, rewrite};

/// Per-editor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
	/// Character opening a reference.
	pub trigger: char,
	/// Type priority for disambiguation, also forwarded to the resolver.
	pub type_order: TypeOrder,
	/// Debounce, timeout, and cache timing for autocomplete searches.
	pub search: SearchConfig,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			trigger: DEFAULT_TRIGGER,
			type_order: TypeOrder::new(["category", "tag"]),
			search: SearchConfig::default(),
		}
	}
}

/// Outcome of one [`HashtagSession::decorate`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorateReport {
	/// References sent to the batch lookup.
	pub fetched: Vec<String>,
	/// References whose placeholders are still in the content.
	pub unresolved: Vec<String>,
}

/// Lookup state for one editing surface.
///
/// Holds the search cache, the single-flight search slot, and the seen
/// registry. Clones share all of it.
pub struct HashtagSession<R> {
	config: SessionConfig,
	resolver: Arc<R>,
	search: SearchController<R>,
	registry: Arc<Mutex<HashtagRegistry>>,
}

impl<R> Clone for HashtagSession<R> {
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			resolver: Arc::clone(&self.resolver),
			search: self.search.clone(),
			registry: Arc::clone(&self.registry),
		}
	}
}

impl<R: Resolver> HashtagSession<R> {
	pub fn new(resolver: Arc<R>, config: SessionConfig) -> Self {
		Self {
			search: SearchController::new(Arc::clone(&resolver), config.search),
			resolver,
			registry: Arc::new(Mutex::new(HashtagRegistry::new())),
			config,
		}
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	/// The underlying search controller, for cancellation and inspection.
	pub fn controller(&self) -> &SearchController<R> {
		&self.search
	}

	/// Runs the trigger rule with this session's trigger character.
	pub fn should_trigger(&self, ctx: &TriggerContext<'_>) -> bool {
		should_trigger(ctx, self.config.trigger)
	}

	/// Searches for `term` with the configured type order.
	///
	/// Never fails: transport errors are logged and reported as no results.
	pub async fn search(&self, term: &str) -> SearchOutcome {
		match self.search.search(term, &self.config.type_order).await {
			Ok(outcome) => outcome,
			Err(error) => {
				warn!(term, %error, "search unavailable");
				SearchOutcome::Cancelled
			}
		}
	}

	/// Rewrites every placeholder the registry already knows.
	///
	/// Returns the references that still need a batch lookup.
	pub fn resolve_seen(&self, fragment: &mut Fragment) -> Vec<String> {
		self.resolve_seen_with(&self.config.type_order, fragment)
	}

	/// [`Self::resolve_seen`] with an explicit type priority.
	pub fn resolve_seen_with(&self, order: &TypeOrder, fragment: &mut Fragment) -> Vec<String> {
		let registry = self.registry.lock();
		rewrite::resolve_seen(order, fragment, &registry, self.config.trigger)
	}

	/// Looks up `references` with the configured type order.
	pub async fn fetch_unseen(&self, references: &[String]) -> Result<Vec<String>> {
		self.fetch_unseen_with(&self.config.type_order, references).await
	}

	/// Looks up `references` in one request and records the results.
	///
	/// References already checked are dropped first; if none remain no request
	/// is made. Every requested reference is marked checked once the response
	/// arrives, whether or not it resolved.
	pub async fn fetch_unseen_with(&self, order: &TypeOrder, references: &[String]) -> Result<Vec<String>> {
		let pending: Vec<String> = {
			let registry = self.registry.lock();
			references.iter().filter(|r| !registry.is_checked(r)).cloned().collect()
		};
		if pending.is_empty() {
			return Ok(pending);
		}

		debug!(count = pending.len(), %order, "lookup.request");
		let response = self.resolver.lookup(&pending, order).await?;

		let mut registry = self.registry.lock();
		registry.ingest(response);
		registry.mark_checked(&pending);
		Ok(pending)
	}

	/// Resolves what is known, fetches what is not, and resolves again.
	///
	/// A failed lookup is logged and leaves its placeholders in place.
	pub async fn decorate(&self, fragment: &mut Fragment) -> DecorateReport {
		let unseen = self.resolve_seen(fragment);
		let mut fetched = Vec::new();
		if !unseen.is_empty() {
			match self.fetch_unseen(&unseen).await {
				Ok(requested) => {
					fetched = requested;
					self.resolve_seen(fragment);
				}
				Err(error) => warn!(count = unseen.len(), %error, "hashtag lookup failed"),
			}
		}

		let unresolved = rewrite::pending_references(fragment, self.config.trigger);
		DecorateReport { fetched, unresolved }
	}

	/// Runs `f` against the registry.
	pub fn with_registry<T>(&self, f: impl FnOnce(&HashtagRegistry) -> T) -> T {
		f(&self.registry.lock())
	}
}

//! Debounced, single-flight search orchestration.
//!
//! # Lifecycle
//!
//! Every [`SearchController::search`] call supersedes whatever came before it:
//! a pending debounce is abandoned and an in-flight request is aborted. The
//! controller therefore moves through three phases:
//!
//! - `Idle`: nothing outstanding.
//! - `Debouncing`: a task is sleeping out the quiet period for the latest term.
//! - `InFlight`: the latest term has been sent to the [`Resolver`].
//!
//! A burst of calls inside the debounce window collapses into one request
//! for the last term. Superseded callers resolve to
//! [`SearchOutcome::Cancelled`] right away.
//!
//! # Timeouts
//!
//! Outside test mode, each [`PendingSearch`] stops waiting after the
//! configured timeout and yields `Cancelled`. The request itself keeps
//! running and still populates the cache when it lands.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use parking_lot::Mutex;
use taglink_primitives::TypeOrder;
use tokio::sync::oneshot;
use tokio::time::{Instant, Sleep, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::{Resolver, Result, SearchCache, SearchOutcome};

/// Quiet period before a typed term is sent.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// How long a caller waits for a search before giving up.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Lifetime of the result cache after its last write.
pub const CACHE_TTL: Duration = Duration::from_secs(30);

/// Search timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
	/// Quiet period before a term is sent.
	pub debounce: Duration,
	/// How long callers wait before resolving to `Cancelled`.
	pub timeout: Duration,
	/// Result cache lifetime.
	pub cache_ttl: Duration,
	/// Disables the timeout race so tests never depend on it.
	pub test_mode: bool,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			debounce: SEARCH_DEBOUNCE,
			timeout: SEARCH_TIMEOUT,
			cache_ttl: CACHE_TTL,
			test_mode: false,
		}
	}
}

/// Observable controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
	Idle,
	Debouncing,
	InFlight,
}

enum Phase {
	Idle,
	Debouncing { generation: u64, cancel: CancellationToken },
	InFlight { generation: u64, cancel: CancellationToken },
}

struct ControllerState {
	generation: u64,
	phase: Phase,
	cache: SearchCache,
}

impl ControllerState {
	/// Cancels whatever is outstanding and returns to idle.
	fn supersede(&mut self) {
		match std::mem::replace(&mut self.phase, Phase::Idle) {
			Phase::Idle => {}
			Phase::Debouncing { generation, cancel } | Phase::InFlight { generation, cancel } => {
				trace!(generation, "search.supersede");
				cancel.cancel();
			}
		}
	}

	/// Returns to idle if `generation` is still the active one.
	fn settle(&mut self, generation: u64) {
		let active = match &self.phase {
			Phase::Idle => return,
			Phase::Debouncing { generation, .. } | Phase::InFlight { generation, .. } => *generation,
		};
		if active == generation {
			self.phase = Phase::Idle;
		}
	}
}

/// Turns typed terms into candidate lists.
///
/// Cloning shares the cache and the single-flight slot. Must be used from
/// within a Tokio runtime.
pub struct SearchController<R> {
	resolver: Arc<R>,
	config: SearchConfig,
	state: Arc<Mutex<ControllerState>>,
}

impl<R> Clone for SearchController<R> {
	fn clone(&self) -> Self {
		Self {
			resolver: Arc::clone(&self.resolver),
			config: self.config,
			state: Arc::clone(&self.state),
		}
	}
}

impl<R: Resolver> SearchController<R> {
	/// Creates a controller with an empty cache.
	pub fn new(resolver: Arc<R>, config: SearchConfig) -> Self {
		Self {
			resolver,
			state: Arc::new(Mutex::new(ControllerState {
				generation: 0,
				phase: Phase::Idle,
				cache: SearchCache::new(config.cache_ttl),
			})),
			config,
		}
	}

	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// Returns the generation of the most recent network-bound search.
	pub fn generation(&self) -> u64 {
		self.state.lock().generation
	}

	pub fn phase(&self) -> SearchPhase {
		match self.state.lock().phase {
			Phase::Idle => SearchPhase::Idle,
			Phase::Debouncing { .. } => SearchPhase::Debouncing,
			Phase::InFlight { .. } => SearchPhase::InFlight,
		}
	}

	/// Returns true if `term` has a live cache entry.
	pub fn is_cached(&self, term: &str) -> bool {
		let mut state = self.state.lock();
		state.cache.expire(Instant::now());
		state.cache.contains(term)
	}

	/// Cancels the outstanding search, if any. Its caller sees `Cancelled`.
	pub fn cancel(&self) {
		self.state.lock().supersede();
	}

	/// Searches for `term`, superseding any earlier search.
	///
	/// Cache hits, empty terms, and terms containing whitespace resolve
	/// immediately without touching the network. Everything else is
	/// debounced and sent to the resolver.
	pub fn search(&self, term: &str, order: &TypeOrder) -> PendingSearch {
		let now = Instant::now();
		let mut state = self.state.lock();
		state.supersede();
		state.cache.expire(now);

		if let Some(hit) = state.cache.get(term) {
			trace!(term, "search.cache_hit");
			return PendingSearch::ready(hit.clone());
		}
		if term.is_empty() || term.chars().any(char::is_whitespace) {
			return PendingSearch::ready(SearchOutcome::Cancelled);
		}

		state.generation = state.generation.wrapping_add(1);
		let generation = state.generation;
		let cancel = CancellationToken::new();
		state.phase = Phase::Debouncing {
			generation,
			cancel: cancel.clone(),
		};
		drop(state);

		let (tx, rx) = oneshot::channel();
		let task = SearchTask {
			resolver: Arc::clone(&self.resolver),
			state: Arc::clone(&self.state),
			term: term.to_owned(),
			order: order.clone(),
			generation,
			cancel,
			debounce: self.config.debounce,
		};
		tokio::spawn(async move {
			let _ = tx.send(task.run().await);
		});

		let timeout = (!self.config.test_mode).then_some(self.config.timeout);
		PendingSearch::waiting(rx, timeout)
	}
}

/// One debounced search, from quiet period to cache write.
struct SearchTask<R> {
	resolver: Arc<R>,
	state: Arc<Mutex<ControllerState>>,
	term: String,
	order: TypeOrder,
	generation: u64,
	cancel: CancellationToken,
	debounce: Duration,
}

impl<R: Resolver> SearchTask<R> {
	async fn run(self) -> Result<SearchOutcome> {
		if self.debounce > Duration::ZERO {
			tokio::select! {
				_ = self.cancel.cancelled() => return Ok(SearchOutcome::Cancelled),
				_ = sleep(self.debounce) => {}
			}
		}
		if !self.enter_flight() {
			return Ok(SearchOutcome::Cancelled);
		}

		debug!(term = %self.term, generation = self.generation, order = %self.order, "search.request");
		let response = tokio::select! {
			_ = self.cancel.cancelled() => {
				trace!(generation = self.generation, "search.aborted");
				return Ok(SearchOutcome::Cancelled);
			}
			response = self.resolver.search(&self.term, &self.order) => response,
		};

		match response {
			Ok(results) => {
				let outcome = SearchOutcome::from_results(results);
				debug!(term = %self.term, count = outcome.results().len(), "search.complete");
				let mut state = self.state.lock();
				state.cache.insert(self.term.clone(), outcome.clone(), Instant::now());
				state.settle(self.generation);
				Ok(outcome)
			}
			Err(error) if error.is_transport() => {
				self.state.lock().settle(self.generation);
				Err(error)
			}
			Err(error) => {
				warn!(term = %self.term, %error, "search failed, treating as no results");
				self.state.lock().settle(self.generation);
				Ok(SearchOutcome::Cancelled)
			}
		}
	}

	/// Moves the controller from debouncing to in-flight, unless superseded.
	fn enter_flight(&self) -> bool {
		let mut state = self.state.lock();
		if self.cancel.is_cancelled() || state.generation != self.generation {
			return false;
		}
		state.phase = Phase::InFlight {
			generation: self.generation,
			cancel: self.cancel.clone(),
		};
		true
	}
}

/// Future for one [`SearchController::search`] call.
///
/// Settles exactly once; a response arriving after the timeout fired is
/// ignored. Only hard transport failures surface as `Err`.
#[must_use = "a search does nothing for the caller unless awaited"]
pub struct PendingSearch {
	inner: PendingInner,
}

enum PendingInner {
	Ready(Option<SearchOutcome>),
	Waiting {
		rx: oneshot::Receiver<Result<SearchOutcome>>,
		deadline: Option<Pin<Box<Sleep>>>,
	},
}

impl PendingSearch {
	fn ready(outcome: SearchOutcome) -> Self {
		Self {
			inner: PendingInner::Ready(Some(outcome)),
		}
	}

	fn waiting(rx: oneshot::Receiver<Result<SearchOutcome>>, timeout: Option<Duration>) -> Self {
		Self {
			inner: PendingInner::Waiting {
				rx,
				deadline: timeout.map(|t| Box::pin(sleep(t))),
			},
		}
	}
}

impl Future for PendingSearch {
	type Output = Result<SearchOutcome>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		match &mut self.get_mut().inner {
			PendingInner::Ready(outcome) => Poll::Ready(Ok(outcome.take().unwrap_or(SearchOutcome::Cancelled))),
			PendingInner::Waiting { rx, deadline } => {
				if let Poll::Ready(result) = Pin::new(rx).poll(cx) {
					// A dropped sender means the task was torn down with the runtime.
					return Poll::Ready(result.unwrap_or(Ok(SearchOutcome::Cancelled)));
				}
				if let Some(deadline) = deadline {
					if deadline.as_mut().poll(cx).is_ready() {
						trace!("search.timeout");
						return Poll::Ready(Ok(SearchOutcome::Cancelled));
					}
				}
				Poll::Pending
			}
		}
	}
}

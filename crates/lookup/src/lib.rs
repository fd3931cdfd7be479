//! Remote hashtag search and batch lookup.
//!
//! [`SearchController`] turns the term under the cursor into candidate
//! entities. Keystrokes are debounced, only one request is ever outstanding,
//! callers stop waiting after a timeout, and completed responses are memoized
//! for a short window. The network side is abstracted behind [`Resolver`],
//! with [`HttpResolver`] as the production implementation.

use std::io;

mod cache;
mod controller;
mod http;
mod outcome;
mod resolver;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use cache::SearchCache;
pub use controller::{CACHE_TTL, PendingSearch, SEARCH_DEBOUNCE, SEARCH_TIMEOUT, SearchConfig, SearchController, SearchPhase};
pub use http::HttpResolver;
pub use outcome::SearchOutcome;
pub use resolver::{LookupResponse, Resolver};

/// A convenient type alias for `Result` with `E` = [`enum@crate::Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Possible errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The request never produced a response (connect, TLS, reset, ...).
	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),
	/// The resolver cannot be reached at all.
	#[error("resolver offline")]
	Offline(#[source] io::Error),
	/// The endpoint answered with a non-success status.
	#[error("server error: HTTP {status}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Response body, for diagnostics.
		body: String,
	},
	/// The endpoint answered with an undecodable body.
	#[error("deserialization failed: {0}")]
	Decode(#[from] serde_json::Error),
	/// The configured endpoint is not a usable base URL.
	#[error("invalid endpoint: {0}")]
	InvalidEndpoint(#[from] url::ParseError),
}

impl Error {
	/// Returns true for hard transport failures.
	///
	/// These propagate to the caller; every other failure degrades to
	/// [`SearchOutcome::Cancelled`].
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Transport(_) | Self::Offline(_))
	}
}

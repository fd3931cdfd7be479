//! Render-time hashtag resolution.
//!
//! Content arrives as a [`Fragment`] in which every unresolved reference is a
//! placeholder element (`<span class="hashtag-raw">#slug</span>`). A
//! [`HashtagSession`] owns everything one editor needs to turn those into
//! links:
//!
//! - a [`HashtagRegistry`] of entities seen so far, filled by batch lookups
//!   with first-write-wins semantics,
//! - the set of references already looked up, so unresolvable ones are never
//!   requested twice,
//! - a [`SearchController`](taglink_lookup::SearchController) for
//!   autocomplete.
//!
//! Sessions are explicit values; two editors never share state unless they
//! share a session.

mod cook;
mod markup;
mod registry;
mod rewrite;
mod session;

pub use cook::cook;
pub use markup::{COOKED_CLASS, Element, Fragment, Node, PLACEHOLDER_CLASS};
pub use registry::HashtagRegistry;
pub use rewrite::{link_element, pending_references, resolve_seen};
pub use session::{DecorateReport, HashtagSession, SessionConfig};

/// A convenient type alias for `Result` with `E` = [`enum@crate::Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Possible errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The batch lookup request failed.
	#[error("batch lookup failed: {0}")]
	Lookup(#[from] taglink_lookup::Error),
}

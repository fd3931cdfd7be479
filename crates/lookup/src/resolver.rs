use async_trait::async_trait;
use indexmap::IndexMap;
use taglink_primitives::{Hashtag, TypeOrder};

use crate::Result;

/// Batch lookup response: entity type to the entities resolved under it.
pub type LookupResponse = IndexMap<String, Vec<Hashtag>>;

/// The two remote endpoints the lookup engine talks to.
#[async_trait]
pub trait Resolver: Send + Sync + 'static {
	/// Searches for entities matching a partial reference.
	///
	/// `Ok(None)` means the endpoint answered without a result list.
	async fn search(&self, term: &str, order: &TypeOrder) -> Result<Option<Vec<Hashtag>>>;

	/// Resolves full references in one call. Unknown references are simply
	/// absent from the response.
	async fn lookup(&self, slugs: &[String], order: &TypeOrder) -> Result<LookupResponse>;
}

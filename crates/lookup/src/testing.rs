//! In-memory [`Resolver`] that records every call.

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use taglink_primitives::{Hashtag, TypeOrder, strip_type_suffix};

use crate::{Error, LookupResponse, Resolver, Result};

/// Failure injected into every subsequent call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
	/// Answer with this HTTP status.
	Status(u16),
	/// Fail as an unreachable resolver.
	Offline,
}

/// Resolver backed by a fixed entity list.
///
/// Search matches entities whose reference starts with the term
/// (case-insensitively) and ranks them by type order. Lookup resolves each
/// slug under the first type in order that knows it, honoring `::type`
/// suffixes.
#[derive(Debug, Default)]
pub struct MemoryResolver {
	entities: Vec<Hashtag>,
	latency: Mutex<Duration>,
	failure: Mutex<Option<Failure>>,
	searches: Mutex<Vec<(String, TypeOrder)>>,
	lookups: Mutex<Vec<(Vec<String>, TypeOrder)>>,
}

impl MemoryResolver {
	pub fn new(entities: Vec<Hashtag>) -> Self {
		Self {
			entities,
			..Self::default()
		}
	}

	/// Delays every response by `latency`.
	pub fn set_latency(&self, latency: Duration) {
		*self.latency.lock() = latency;
	}

	pub fn set_failure(&self, failure: Option<Failure>) {
		*self.failure.lock() = failure;
	}

	/// Terms passed to [`Resolver::search`], in call order.
	pub fn searches(&self) -> Vec<String> {
		self.searches.lock().iter().map(|(term, _)| term.clone()).collect()
	}

	/// Terms and type orders passed to [`Resolver::search`], in call order.
	pub fn search_calls(&self) -> Vec<(String, TypeOrder)> {
		self.searches.lock().clone()
	}

	/// Slug batches passed to [`Resolver::lookup`], in call order.
	pub fn lookups(&self) -> Vec<Vec<String>> {
		self.lookups.lock().iter().map(|(slugs, _)| slugs.clone()).collect()
	}

	/// Slug batches and type orders passed to [`Resolver::lookup`], in call order.
	pub fn lookup_calls(&self) -> Vec<(Vec<String>, TypeOrder)> {
		self.lookups.lock().clone()
	}

	async fn respond(&self) -> Result<()> {
		let latency = *self.latency.lock();
		if latency > Duration::ZERO {
			tokio::time::sleep(latency).await;
		}
		let failure = *self.failure.lock();
		match failure {
			None => Ok(()),
			Some(Failure::Status(status)) => Err(Error::Status {
				status,
				body: String::new(),
			}),
			Some(Failure::Offline) => Err(Error::Offline(io::Error::new(io::ErrorKind::NotConnected, "memory resolver offline"))),
		}
	}

	fn rank(&self, order: &TypeOrder, kind: &str) -> usize {
		order.iter().position(|t| t == kind).unwrap_or(order.len())
	}
}

#[async_trait]
impl Resolver for MemoryResolver {
	async fn search(&self, term: &str, order: &TypeOrder) -> Result<Option<Vec<Hashtag>>> {
		self.searches.lock().push((term.to_owned(), order.clone()));
		self.respond().await?;

		let needle = term.to_lowercase();
		let mut results: Vec<Hashtag> = self
			.entities
			.iter()
			.filter(|e| e.reference.to_lowercase().starts_with(&needle))
			.cloned()
			.collect();
		results.sort_by_key(|e| self.rank(order, &e.kind));
		Ok(Some(results))
	}

	async fn lookup(&self, slugs: &[String], order: &TypeOrder) -> Result<LookupResponse> {
		self.lookups.lock().push((slugs.to_vec(), order.clone()));
		self.respond().await?;

		let mut response = LookupResponse::new();
		for slug in slugs {
			let found = order.iter().find_map(|kind| {
				let reference = strip_type_suffix(slug, kind);
				self.entities
					.iter()
					.find(|e| e.kind == kind && e.reference.eq_ignore_ascii_case(reference))
			});
			if let Some(entity) = found {
				response.entry(entity.kind.clone()).or_default().push(entity.clone());
			}
		}
		Ok(response)
	}
}

/// Builds an entity with conventional URL, icon, and slug for its type.
pub fn entity(kind: &str, reference: &str, text: &str) -> Hashtag {
	let (prefix, icon) = match kind {
		"category" => ("c", "folder"),
		"tag" => ("tag", "tag"),
		other => (other, "hashtag"),
	};
	Hashtag {
		reference: reference.to_owned(),
		text: text.to_owned(),
		icon: icon.to_owned(),
		relative_url: format!("/{prefix}/{reference}"),
		kind: kind.to_owned(),
		slug: reference.to_owned(),
		description: None,
	}
}

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use taglink_lookup::LookupResponse;
use taglink_primitives::Hashtag;
use tracing::trace;

/// Entities seen by one session, keyed by type then reference.
///
/// Entries are never replaced once set. The registry also remembers which
/// references were already sent to a batch lookup, so unresolvable ones are
/// not requested again.
#[derive(Debug, Default)]
pub struct HashtagRegistry {
	by_type: HashMap<String, HashMap<String, Hashtag>>,
	checked: HashSet<String>,
}

impl HashtagRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `entity` under `(kind, entity.reference)` unless that slot is taken.
	///
	/// Returns true if the entity was inserted.
	pub fn insert_if_absent(&mut self, kind: &str, mut entity: Hashtag) -> bool {
		let by_ref = self.by_type.entry(kind.to_owned()).or_default();
		if by_ref.contains_key(&entity.reference) {
			return false;
		}
		if entity.kind.is_empty() {
			entity.kind = kind.to_owned();
		}
		by_ref.insert(entity.reference.clone(), entity);
		true
	}

	/// Merges a batch lookup response. Returns how many entities were new.
	pub fn ingest(&mut self, response: LookupResponse) -> usize {
		let mut inserted = 0;
		for (kind, entities) in response {
			for entity in entities {
				if self.insert_if_absent(&kind, entity) {
					inserted += 1;
				}
			}
		}
		trace!(inserted, total = self.len(), "registry.ingest");
		inserted
	}

	/// Looks up `reference` under `kind`, falling back to its lowercase form.
	pub fn get(&self, kind: &str, reference: &str) -> Option<&Hashtag> {
		let by_ref = self.by_type.get(kind)?;
		by_ref.get(reference).or_else(|| by_ref.get(&reference.to_lowercase()))
	}

	/// Records references as looked up, case-insensitively.
	pub fn mark_checked<I, S>(&mut self, references: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.checked.extend(references.into_iter().map(|r| r.as_ref().to_lowercase()));
	}

	pub fn is_checked(&self, reference: &str) -> bool {
		self.checked.contains(&reference.to_lowercase())
	}

	/// Number of stored entities across all types.
	pub fn len(&self) -> usize {
		self.by_type.values().map(HashMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

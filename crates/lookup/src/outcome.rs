use taglink_primitives::Hashtag;

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
	/// Candidates in resolver order. Never empty.
	Resolved(Vec<Hashtag>),
	/// No usable result: empty term, whitespace, timeout, supersession,
	/// soft failure, or an empty response.
	Cancelled,
}

impl SearchOutcome {
	/// Normalizes a resolver response; absent and empty both mean no match.
	pub fn from_results(results: Option<Vec<Hashtag>>) -> Self {
		match results {
			Some(results) if !results.is_empty() => Self::Resolved(results),
			_ => Self::Cancelled,
		}
	}

	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}

	/// Candidates, empty when cancelled.
	pub fn results(&self) -> &[Hashtag] {
		match self {
			Self::Resolved(results) => results,
			Self::Cancelled => &[],
		}
	}

	pub fn into_results(self) -> Vec<Hashtag> {
		match self {
			Self::Resolved(results) => results,
			Self::Cancelled => Vec::new(),
		}
	}
}

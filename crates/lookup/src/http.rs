//! HTTP implementation of the search and batch lookup endpoints.
//!
//! - `GET {base}/hashtags/search.json?term=..&order[]=..` answers
//!   `{ "results": [...] }`, where `results` may be absent.
//! - `GET {base}/hashtags.json?slugs[]=..&order[]=..` answers an object
//!   keyed by entity type.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use taglink_primitives::{Hashtag, TypeOrder};
use tracing::trace;
use url::Url;

use crate::{Error, LookupResponse, Resolver, Result};

const SEARCH_PATH: &str = "hashtags/search.json";
const LOOKUP_PATH: &str = "hashtags.json";

#[derive(Debug, Deserialize)]
struct SearchResponse {
	#[serde(default)]
	results: Option<Vec<Hashtag>>,
}

/// Resolver talking to a remote site over HTTP.
#[derive(Debug, Clone)]
pub struct HttpResolver {
	client: Client,
	search_url: Url,
	lookup_url: Url,
}

impl HttpResolver {
	/// Creates a resolver rooted at `base` (e.g. `https://forum.example.com/`).
	pub fn new(base: &str) -> Result<Self> {
		Self::with_client(Client::new(), Url::parse(base)?)
	}

	/// Creates a resolver with a preconfigured client.
	///
	/// A `base` without a trailing slash is treated as a directory, so
	/// `https://example.com/forum` resolves to `https://example.com/forum/hashtags.json`.
	pub fn with_client(client: Client, mut base: Url) -> Result<Self> {
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}
		Ok(Self {
			client,
			search_url: base.join(SEARCH_PATH)?,
			lookup_url: base.join(LOOKUP_PATH)?,
		})
	}

	async fn get_json<T: DeserializeOwned>(&self, url: &Url, query: &[(&str, &str)]) -> Result<T> {
		trace!(url = %url, params = query.len(), "http.get");
		let response = self.client.get(url.clone()).query(query).send().await?;
		let status = response.status();
		let body = response.bytes().await?;

		if !status.is_success() {
			return Err(Error::Status {
				status: status.as_u16(),
				body: String::from_utf8_lossy(&body).into_owned(),
			});
		}
		Ok(serde_json::from_slice(&body)?)
	}
}

fn order_params<'a>(order: &'a TypeOrder, params: &mut Vec<(&'static str, &'a str)>) {
	params.extend(order.iter().map(|kind| ("order[]", kind)));
}

#[async_trait]
impl Resolver for HttpResolver {
	async fn search(&self, term: &str, order: &TypeOrder) -> Result<Option<Vec<Hashtag>>> {
		let mut params = vec![("term", term)];
		order_params(order, &mut params);
		let response: SearchResponse = self.get_json(&self.search_url, &params).await?;
		Ok(response.results)
	}

	async fn lookup(&self, slugs: &[String], order: &TypeOrder) -> Result<LookupResponse> {
		let mut params: Vec<(&str, &str)> = slugs.iter().map(|slug| ("slugs[]", slug.as_str())).collect();
		order_params(order, &mut params);
		self.get_json(&self.lookup_url, &params).await
	}
}

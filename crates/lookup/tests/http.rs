use serde_json::json;
use taglink_lookup::{Error, HttpResolver, Resolver};
use taglink_primitives::TypeOrder;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn order() -> TypeOrder {
	TypeOrder::new(["category", "tag"])
}

#[tokio::test]
async fn search_sends_term_and_order() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/forum/hashtags/search.json"))
		.and(query_param("term", "feat"))
		.and(query_param("order[]", "category"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"results": [
				{"ref": "feature", "text": "Feature", "icon": "folder", "relative_url": "/c/feature/2", "type": "category"},
				{"ref": "feature-request", "text": "feature-request", "icon": "tag", "relative_url": "/tag/feature-request", "type": "tag"}
			]
		})))
		.expect(1)
		.mount(&server)
		.await;

	let resolver = HttpResolver::new(&format!("{}/forum", server.uri())).unwrap();
	let results = resolver.search("feat", &order()).await.unwrap().unwrap();

	let refs: Vec<_> = results.iter().map(|r| r.reference.as_str()).collect();
	assert_eq!(refs, ["feature", "feature-request"]);
	assert_eq!(results[0].relative_url, "/c/feature/2");
}

#[tokio::test]
async fn search_without_results_field_is_none() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/hashtags/search.json"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
		.mount(&server)
		.await;

	let resolver = HttpResolver::new(&server.uri()).unwrap();
	assert_eq!(resolver.search("nothing", &order()).await.unwrap(), None);
}

#[tokio::test]
async fn lookup_groups_entities_by_type() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/hashtags.json"))
		.and(query_param("slugs[]", "bugs"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"category": [
				{"ref": "bugs", "slug": "bugs", "text": "Bugs", "icon": "folder", "relative_url": "/c/bugs/1"}
			],
			"tag": []
		})))
		.expect(1)
		.mount(&server)
		.await;

	let resolver = HttpResolver::new(&server.uri()).unwrap();
	let response = resolver
		.lookup(&["bugs".to_owned(), "unknown".to_owned()], &order())
		.await
		.unwrap();

	assert_eq!(response.keys().collect::<Vec<_>>(), ["category", "tag"]);
	assert_eq!(response["category"][0].canonical_slug(), "bugs");
	assert!(response["tag"].is_empty());
}

#[tokio::test]
async fn server_error_is_soft() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
		.mount(&server)
		.await;

	let resolver = HttpResolver::new(&server.uri()).unwrap();
	let error = resolver.search("feat", &order()).await.unwrap_err();

	assert!(matches!(&error, Error::Status { status: 429, body } if body == "slow down"));
	assert!(!error.is_transport());
}

#[tokio::test]
async fn malformed_body_is_soft() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
		.mount(&server)
		.await;

	let resolver = HttpResolver::new(&server.uri()).unwrap();
	let error = resolver.search("feat", &order()).await.unwrap_err();
	assert!(matches!(error, Error::Decode(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_failure() {
	let server = MockServer::start().await;
	let uri = server.uri();
	drop(server);

	let resolver = HttpResolver::new(&uri).unwrap();
	let error = resolver.search("feat", &order()).await.unwrap_err();
	assert!(error.is_transport());
}

#[test]
fn invalid_endpoint_is_rejected() {
	assert!(matches!(HttpResolver::new("not a url"), Err(Error::InvalidEndpoint(_))));
}

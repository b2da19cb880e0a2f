use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;

use super::endpoint::Endpoint;
use super::error::FetchResult;
use super::transport::Transport;
use crate::catalog::model::{FilterSet, Product, SuggestionList};

/// Typed access to the catalog backend's read endpoints.
#[derive(Clone)]
pub struct CatalogClient {
	transport: Arc<dyn Transport>,
	base_url: Url,
}

impl CatalogClient {
	pub fn new(transport: Arc<dyn Transport>, base_url: Url) -> Self {
		Self {
			transport,
			base_url,
		}
	}

	#[must_use]
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Fetch and decode the JSON body of `endpoint`.
	pub fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> FetchResult<T> {
		let url = endpoint.url(&self.base_url)?;
		let body = self.transport.get(&url)?;
		Ok(serde_json::from_str(&body)?)
	}

	pub fn list_products(&self) -> FetchResult<Vec<Product>> {
		self.fetch(&Endpoint::Products)
	}

	pub fn search_products(&self, text: &str) -> FetchResult<Vec<Product>> {
		self.fetch(&Endpoint::Search(text.to_string()))
	}

	/// Search when `text` is non-empty, otherwise list everything.
	pub fn query_products(&self, text: &str) -> FetchResult<Vec<Product>> {
		self.fetch(&Endpoint::for_product_query(text))
	}

	pub fn categories(&self) -> FetchResult<Vec<String>> {
		self.fetch(&Endpoint::Categories)
	}

	pub fn brands(&self) -> FetchResult<Vec<String>> {
		self.fetch(&Endpoint::Brands)
	}

	pub fn filters(&self) -> FetchResult<FilterSet> {
		self.fetch(&Endpoint::Filters)
	}

	pub fn suggestions(&self, text: &str) -> FetchResult<SuggestionList> {
		self.fetch(&Endpoint::Suggestions(text.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::catalog::api::FetchError;

	struct Canned {
		body: FetchResult<String>,
		seen: Mutex<Vec<String>>,
	}

	impl Transport for Canned {
		fn get(&self, url: &Url) -> FetchResult<String> {
			self.seen.lock().expect("lock").push(url.to_string());
			self.body.clone()
		}
	}

	fn client(body: FetchResult<String>) -> (CatalogClient, Arc<Canned>) {
		let canned = Arc::new(Canned {
			body,
			seen: Mutex::new(Vec::new()),
		});
		let base = Url::parse("http://catalog.test:9000").expect("base");
		(CatalogClient::new(canned.clone(), base), canned)
	}

	#[test]
	fn query_products_picks_endpoint_from_text() {
		let (client, canned) = client(Ok("[]".into()));
		client.query_products("").expect("list");
		client.query_products("usb hub").expect("search");

		let seen = canned.seen.lock().expect("lock").clone();
		assert_eq!(
			seen,
			vec![
				"http://catalog.test:9000/products".to_string(),
				"http://catalog.test:9000/products/search?q=usb%20hub".to_string(),
			]
		);
	}

	#[test]
	fn malformed_json_is_a_decode_error() {
		let (client, _) = client(Ok("{not json".into()));
		let err = client.list_products().expect_err("should fail");
		assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
	}

	#[test]
	fn wrong_shape_is_a_decode_error() {
		let (client, _) = client(Ok(r#"{"products": []}"#.into()));
		assert!(matches!(client.brands(), Err(FetchError::Decode(_))));
	}

	#[test]
	fn transport_errors_pass_through() {
		let (client, _) = client(Err(FetchError::Status(503)));
		assert_eq!(client.suggestions("x"), Err(FetchError::Status(503)));
	}

	#[test]
	fn filters_decode_counts() {
		let body = r#"{
			"categories": [{"category": "Books", "count": 200}],
			"brands": [{"brand": "Sony", "count": 120}, {"brand": "LG", "count": 80}]
		}"#;
		let (client, _) = client(Ok(body.into()));
		let filters = client.filters().expect("filters");
		assert_eq!(filters.categories[0].count, 200);
		assert_eq!(filters.brands[1].brand, "LG");
	}
}

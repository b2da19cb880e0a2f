//! The backend's read endpoints and how their URLs are built.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Url;

use super::error::{FetchError, FetchResult};

/// Characters left unescaped in query values: alphanumerics plus `-_.!~*()`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'(')
	.remove(b')');

/// One of the six GET endpoints exposed by the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
	Products,
	Search(String),
	Categories,
	Brands,
	Filters,
	Suggestions(String),
}

impl Endpoint {
	/// Choose between the search and list-all endpoints for a product query.
	#[must_use]
	pub fn for_product_query(text: &str) -> Self {
		if text.is_empty() {
			Self::Products
		} else {
			Self::Search(text.to_string())
		}
	}

	/// Path component relative to the backend base URL.
	#[must_use]
	pub fn path(&self) -> &'static str {
		match self {
			Self::Products => "/products",
			Self::Search(_) => "/products/search",
			Self::Categories => "/products/categories",
			Self::Brands => "/products/brands",
			Self::Filters => "/products/filters",
			Self::Suggestions(_) => "/products/suggestions",
		}
	}

	/// Raw (unencoded) value of the `q` parameter, if the endpoint takes one.
	#[must_use]
	pub fn query_text(&self) -> Option<&str> {
		match self {
			Self::Search(text) | Self::Suggestions(text) => Some(text),
			_ => None,
		}
	}

	/// Path plus encoded query string, e.g. `/products/search?q=red%20shoe`.
	#[must_use]
	pub fn path_and_query(&self) -> String {
		match self.query_text() {
			Some(text) => format!("{}?q={}", self.path(), encode_query_value(text)),
			None => self.path().to_string(),
		}
	}

	/// Resolve this endpoint against the backend base URL.
	///
	/// Any path prefix on the base URL is preserved.
	pub fn url(&self, base: &Url) -> FetchResult<Url> {
		let root = base.as_str().trim_end_matches('/');
		let raw = format!("{root}{}", self.path_and_query());
		Url::parse(&raw).map_err(|err| FetchError::Url(format!("{raw}: {err}")))
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path_and_query())
	}
}

/// Percent-encode a query value the same way browsers' `encodeURIComponent` does,
/// except that `'` is escaped as well.
#[must_use]
pub fn encode_query_value(text: &str) -> String {
	utf8_percent_encode(text, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn base() -> Url {
		Url::parse("http://localhost:8080").expect("valid base")
	}

	#[test]
	fn empty_text_targets_list_endpoint() {
		assert_eq!(Endpoint::for_product_query(""), Endpoint::Products);
		assert_eq!(
			Endpoint::for_product_query("lamp"),
			Endpoint::Search("lamp".into())
		);
	}

	#[test]
	fn search_text_is_percent_encoded() {
		let url = Endpoint::Search("red shoes & socks".into())
			.url(&base())
			.expect("url");
		assert_eq!(
			url.as_str(),
			"http://localhost:8080/products/search?q=red%20shoes%20%26%20socks"
		);
	}

	#[test]
	fn unreserved_marks_and_unicode_follow_component_rules() {
		assert_eq!(encode_query_value("a-b_c.d!e~f*(g)"), "a-b_c.d!e~f*(g)");
		assert_eq!(encode_query_value("café/50%"), "caf%C3%A9%2F50%25");
		assert_eq!(encode_query_value("1+1=2?"), "1%2B1%3D2%3F");
	}

	#[test]
	fn fixed_endpoints_carry_no_query() {
		for endpoint in [
			Endpoint::Products,
			Endpoint::Categories,
			Endpoint::Brands,
			Endpoint::Filters,
		] {
			let url = endpoint.url(&base()).expect("url");
			assert!(url.query().is_none(), "{endpoint} should not have a query");
		}
	}

	#[test]
	fn base_path_prefix_is_kept() {
		let base = Url::parse("https://shop.example.com/api/").expect("valid base");
		let url = Endpoint::Suggestions("pro".into())
			.url(&base)
			.expect("url");
		assert_eq!(
			url.as_str(),
			"https://shop.example.com/api/products/suggestions?q=pro"
		);
	}
}

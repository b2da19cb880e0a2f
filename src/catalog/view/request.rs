//! Requests issued by the view and the completions fed back into it.

use std::fmt;

use crate::catalog::api::{CatalogClient, Endpoint, FetchError, FetchResult};
use crate::catalog::filter::post_filter;
use crate::catalog::model::{FilterSet, Product, SuggestionList};

/// One independently fetched slice of backend data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
	Products,
	Categories,
	Brands,
	Filters,
	Suggestions,
}

impl Facet {
	pub const ALL: [Facet; 5] = [
		Facet::Products,
		Facet::Categories,
		Facet::Brands,
		Facet::Filters,
		Facet::Suggestions,
	];

	pub(crate) fn index(self) -> usize {
		match self {
			Facet::Products => 0,
			Facet::Categories => 1,
			Facet::Brands => 2,
			Facet::Filters => 3,
			Facet::Suggestions => 4,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Facet::Products => "products",
			Facet::Categories => "categories",
			Facet::Brands => "brands",
			Facet::Filters => "filters",
			Facet::Suggestions => "suggestions",
		}
	}
}

impl fmt::Display for Facet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Search text plus the post-filters captured when a product query is issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
	pub text: String,
	pub category: String,
	pub brand: String,
}

impl ProductQuery {
	pub fn new(text: impl Into<String>, category: impl Into<String>, brand: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			category: category.into(),
			brand: brand.into(),
		}
	}

	/// Search endpoint for non-empty text, list-all otherwise.
	#[must_use]
	pub fn endpoint(&self) -> Endpoint {
		Endpoint::for_product_query(&self.text)
	}

	/// Fetch the products and apply the captured category/brand filters.
	pub fn run(&self, client: &CatalogClient) -> FetchResult<Vec<Product>> {
		let products = client.query_products(&self.text)?;
		Ok(post_filter(products, &self.category, &self.brand))
	}
}

/// What a request asks the backend for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
	Products(ProductQuery),
	Categories,
	Brands,
	Filters,
	Suggestions(String),
}

impl RequestKind {
	#[must_use]
	pub fn facet(&self) -> Facet {
		match self {
			RequestKind::Products(_) => Facet::Products,
			RequestKind::Categories => Facet::Categories,
			RequestKind::Brands => Facet::Brands,
			RequestKind::Filters => Facet::Filters,
			RequestKind::Suggestions(_) => Facet::Suggestions,
		}
	}

	#[must_use]
	pub fn endpoint(&self) -> Endpoint {
		match self {
			RequestKind::Products(query) => query.endpoint(),
			RequestKind::Categories => Endpoint::Categories,
			RequestKind::Brands => Endpoint::Brands,
			RequestKind::Filters => Endpoint::Filters,
			RequestKind::Suggestions(text) => Endpoint::Suggestions(text.clone()),
		}
	}
}

/// A request tagged with the sequence number that orders its completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
	pub seq: u64,
	pub kind: RequestKind,
}

impl FetchRequest {
	#[must_use]
	pub fn facet(&self) -> Facet {
		self.kind.facet()
	}

	/// Perform the request and package the outcome for [`super::CatalogView::apply`].
	pub fn execute(&self, client: &CatalogClient) -> FetchCompletion {
		let payload = match &self.kind {
			RequestKind::Products(query) => Payload::Products(query.run(client)),
			RequestKind::Categories => Payload::Categories(client.categories()),
			RequestKind::Brands => Payload::Brands(client.brands()),
			RequestKind::Filters => Payload::Filters(client.filters()),
			RequestKind::Suggestions(text) => Payload::Suggestions(client.suggestions(text)),
		};
		FetchCompletion {
			seq: self.seq,
			payload,
		}
	}

	/// Complete the request with `err` without contacting the backend.
	#[must_use]
	pub fn fail(&self, err: FetchError) -> FetchCompletion {
		let payload = match self.facet() {
			Facet::Products => Payload::Products(Err(err)),
			Facet::Categories => Payload::Categories(Err(err)),
			Facet::Brands => Payload::Brands(Err(err)),
			Facet::Filters => Payload::Filters(Err(err)),
			Facet::Suggestions => Payload::Suggestions(Err(err)),
		};
		FetchCompletion {
			seq: self.seq,
			payload,
		}
	}
}

/// Decoded outcome of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
	Products(FetchResult<Vec<Product>>),
	Categories(FetchResult<Vec<String>>),
	Brands(FetchResult<Vec<String>>),
	Filters(FetchResult<FilterSet>),
	Suggestions(FetchResult<SuggestionList>),
}

impl Payload {
	#[must_use]
	pub fn facet(&self) -> Facet {
		match self {
			Payload::Products(_) => Facet::Products,
			Payload::Categories(_) => Facet::Categories,
			Payload::Brands(_) => Facet::Brands,
			Payload::Filters(_) => Facet::Filters,
			Payload::Suggestions(_) => Facet::Suggestions,
		}
	}
}

/// A finished request, carrying the sequence number it was issued with.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCompletion {
	pub seq: u64,
	pub payload: Payload,
}

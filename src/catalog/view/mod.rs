//! Catalog view state and the single function that applies fetch results.
//!
//! [`CatalogView`] never performs I/O. Lifecycle and input operations return
//! [`FetchRequest`]s for the runtime to execute; the runtime hands back
//! [`FetchCompletion`]s which [`CatalogView::apply`] folds into state in
//! sequence order, discarding responses that a newer one already replaced.

mod fetched;
mod request;
mod sequence;
#[cfg(test)]
mod tests;

use tracing::{debug, warn};

pub use fetched::Fetched;
pub use request::{Facet, FetchCompletion, FetchRequest, Payload, ProductQuery, RequestKind};
use sequence::Sequencer;

use crate::catalog::api::FetchError;
use crate::catalog::model::{FilterSet, Product, Selection};

static EMPTY_FILTERS: FilterSet = FilterSet {
	categories: Vec::new(),
	brands: Vec::new(),
};

/// All state behind the catalog screen.
#[derive(Debug, Default)]
pub struct CatalogView {
	selection: Selection,
	products: Fetched<Vec<Product>>,
	categories: Fetched<Vec<String>>,
	brands: Fetched<Vec<String>>,
	filters: Fetched<FilterSet>,
	suggestions: Fetched<Vec<String>>,
	sequencer: Sequencer,
	mounted: bool,
}

impl CatalogView {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start from a preset selection, e.g. one supplied on the command line.
	///
	/// No requests are issued; the caller decides when to query.
	pub fn with_selection(selection: Selection) -> Self {
		Self {
			selection,
			..Self::default()
		}
	}

	/// Requests for the initial screen: categories, brands, filter counts and
	/// the unfiltered product list. Returns nothing after the first call.
	pub fn load_initial_data(&mut self) -> Vec<FetchRequest> {
		if self.mounted {
			return Vec::new();
		}
		self.mounted = true;

		vec![
			self.issue(RequestKind::Categories),
			self.issue(RequestKind::Brands),
			self.issue(RequestKind::Filters),
			self.query_products("", "", ""),
		]
	}

	/// Issue a product query. The category and brand are applied to the
	/// response as exact-match post-filters when non-empty.
	pub fn query_products(&mut self, text: &str, category: &str, brand: &str) -> FetchRequest {
		self.issue(RequestKind::Products(ProductQuery::new(text, category, brand)))
	}

	/// Issue a suggestions query, or clear the suggestions for empty text.
	pub fn query_autocomplete(&mut self, text: &str) -> Option<FetchRequest> {
		if text.is_empty() {
			self.sequencer.settle(Facet::Suggestions);
			self.suggestions = Fetched::Loaded(Vec::new());
			return None;
		}
		Some(self.issue(RequestKind::Suggestions(text.to_string())))
	}

	/// The search text changed: refresh products and suggestions.
	pub fn on_search_input(&mut self, text: impl Into<String>) -> Vec<FetchRequest> {
		self.selection.search = text.into();
		let Selection {
			search,
			category,
			brand,
		} = self.selection.clone();

		let mut requests = vec![self.query_products(&search, &category, &brand)];
		requests.extend(self.query_autocomplete(&search));
		requests
	}

	/// The category selection changed: refresh products.
	pub fn on_category_change(&mut self, category: impl Into<String>) -> FetchRequest {
		self.selection.category = category.into();
		let Selection { search, category, brand } = self.selection.clone();
		self.query_products(&search, &category, &brand)
	}

	/// The brand selection changed: refresh products.
	pub fn on_brand_change(&mut self, brand: impl Into<String>) -> FetchRequest {
		self.selection.brand = brand.into();
		let Selection { search, category, brand } = self.selection.clone();
		self.query_products(&search, &category, &brand)
	}

	/// Fold a completion into the view. Returns `false` when it was stale.
	pub fn apply(&mut self, completion: FetchCompletion) -> bool {
		let FetchCompletion { seq, payload } = completion;
		let facet = payload.facet();
		if !self.sequencer.accept(facet, seq) {
			debug!(%facet, seq, "discarding stale response");
			return false;
		}

		match payload {
			Payload::Products(result) => self.products = settle(facet, result),
			Payload::Categories(result) => self.categories = settle(facet, result),
			Payload::Brands(result) => self.brands = settle(facet, result),
			Payload::Filters(result) => self.filters = settle(facet, result),
			Payload::Suggestions(result) => self.suggestions = settle(facet, result),
		}
		true
	}

	/// Whether the newest product query is still unanswered.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.sequencer.is_outstanding(Facet::Products)
	}

	#[must_use]
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	#[must_use]
	pub fn products(&self) -> &[Product] {
		self.products.items()
	}

	#[must_use]
	pub fn categories(&self) -> &[String] {
		self.categories.items()
	}

	#[must_use]
	pub fn brands(&self) -> &[String] {
		self.brands.items()
	}

	/// Aggregate filter counts, empty until loaded or after a failure.
	#[must_use]
	pub fn filters(&self) -> &FilterSet {
		self.filters.value().unwrap_or(&EMPTY_FILTERS)
	}

	#[must_use]
	pub fn suggestions(&self) -> &[String] {
		self.suggestions.items()
	}

	/// The error behind a facet's last failed fetch, if any.
	#[must_use]
	pub fn facet_error(&self, facet: Facet) -> Option<&FetchError> {
		match facet {
			Facet::Products => self.products.error(),
			Facet::Categories => self.categories.error(),
			Facet::Brands => self.brands.error(),
			Facet::Filters => self.filters.error(),
			Facet::Suggestions => self.suggestions.error(),
		}
	}

	/// Facets whose most recent fetch failed.
	#[must_use]
	pub fn failed_facets(&self) -> Vec<Facet> {
		Facet::ALL
			.into_iter()
			.filter(|facet| self.facet_error(*facet).is_some())
			.collect()
	}

	fn issue(&mut self, kind: RequestKind) -> FetchRequest {
		let seq = self.sequencer.issue(kind.facet());
		debug!(seq, endpoint = %kind.endpoint(), "issuing request");
		FetchRequest { seq, kind }
	}
}

fn settle<T>(facet: Facet, result: Result<T, FetchError>) -> Fetched<T> {
	if let Err(err) = &result {
		warn!(%facet, error = %err, "fetch failed; showing no data");
	}
	Fetched::from(result)
}

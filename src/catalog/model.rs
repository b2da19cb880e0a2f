//! Value records exchanged with the catalog backend.
//!
//! Records are decoded verbatim from the JSON payloads. Fields the backend may
//! omit fall back to their defaults so a sparse row still renders.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
	pub id: i64,
	pub name: String,
	pub category: String,
	pub brand: String,
	pub price: f64,
	pub stock_quantity: i64,
	pub availability_status: String,
	pub description: String,
	pub release_date: String,
	pub customer_rating: f64,
	pub colors: String,
	pub sizes: String,
}

impl Product {
	/// Price formatted with two decimal places, as shown in the results table.
	#[must_use]
	pub fn display_price(&self) -> String {
		format!("${:.2}", self.price)
	}

	/// Split a comma separated attribute list such as `colors` or `sizes`.
	#[must_use]
	pub fn variants(list: &str) -> Vec<&str> {
		list.split(',')
			.map(str::trim)
			.filter(|value| !value.is_empty())
			.collect()
	}
}

/// Number of products in a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
	pub category: String,
	pub count: u64,
}

/// Number of products carrying a brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCount {
	pub brand: String,
	pub count: u64,
}

/// Aggregated filter options returned by `/products/filters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
	pub categories: Vec<CategoryCount>,
	pub brands: Vec<BrandCount>,
}

/// Autocomplete candidates for the current search text.
pub type SuggestionList = Vec<String>;

/// The user's current filter inputs. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
	pub search: String,
	pub category: String,
	pub brand: String,
}

impl Selection {
	/// Build a selection from its three parts.
	pub fn new(
		search: impl Into<String>,
		category: impl Into<String>,
		brand: impl Into<String>,
	) -> Self {
		Self {
			search: search.into(),
			category: category.into(),
			brand: brand.into(),
		}
	}

	/// Whether no filter of any kind is active.
	#[must_use]
	pub fn is_unfiltered(&self) -> bool {
		self.search.is_empty() && self.category.is_empty() && self.brand.is_empty()
	}
}

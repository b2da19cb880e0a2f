/// Human-readable labels rendered around the catalog screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title shown on the first row.
	pub title: String,
	/// Placeholder text displayed in the empty search input.
	pub search_placeholder: String,
	/// Option meaning "no category filter".
	pub all_categories: String,
	/// Option meaning "no brand filter".
	pub all_brands: String,
	/// Title rendered above the results table.
	pub table_title: String,
	/// Title used for the detail panel.
	pub detail_panel_title: String,
	/// Message shown instead of the table while products load.
	pub loading: String,
	/// Message shown when the product list is empty.
	pub no_results: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Product Catalog".to_string(),
			search_placeholder: "Search products...".to_string(),
			all_categories: "All Categories".to_string(),
			all_brands: "All Brands".to_string(),
			table_title: "Products".to_string(),
			detail_panel_title: "Product details".to_string(),
			loading: "Loading...".to_string(),
			no_results: "No products".to_string(),
		}
	}
}

/// Column headers of the results table.
pub(crate) const PRODUCT_HEADERS: [&str; 6] = ["Name", "Category", "Brand", "Price", "Stock", "Status"];

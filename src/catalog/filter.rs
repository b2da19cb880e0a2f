//! Client-side narrowing of fetched product lists.

use super::model::Product;

/// Keep products whose category and brand exactly match the given values.
///
/// An empty `category` or `brand` does not filter on that attribute.
#[must_use]
pub fn post_filter(products: Vec<Product>, category: &str, brand: &str) -> Vec<Product> {
	if category.is_empty() && brand.is_empty() {
		return products;
	}
	products
		.into_iter()
		.filter(|product| category.is_empty() || product.category == category)
		.filter(|product| brand.is_empty() || product.brand == brand)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn product(id: i64, category: &str, brand: &str) -> Product {
		Product {
			id,
			category: category.into(),
			brand: brand.into(),
			..Product::default()
		}
	}

	fn sample() -> Vec<Product> {
		vec![product(1, "A", "X"), product(2, "A", "Y"), product(3, "B", "X")]
	}

	fn ids(products: &[Product]) -> Vec<i64> {
		products.iter().map(|p| p.id).collect()
	}

	#[test]
	fn category_then_brand_narrow_the_set() {
		assert_eq!(ids(&post_filter(sample(), "A", "")), vec![1, 2]);
		assert_eq!(ids(&post_filter(sample(), "A", "X")), vec![1]);
	}

	#[test]
	fn empty_filters_keep_everything() {
		assert_eq!(ids(&post_filter(sample(), "", "")), vec![1, 2, 3]);
	}

	#[test]
	fn brand_alone_filters() {
		assert_eq!(ids(&post_filter(sample(), "", "X")), vec![1, 3]);
	}

	#[test]
	fn matching_is_exact_and_case_sensitive() {
		assert!(post_filter(sample(), "a", "").is_empty());
		assert!(post_filter(sample(), "A ", "").is_empty());
	}
}

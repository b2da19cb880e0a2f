use anyhow::Result;
use catalog_browser::catalog::Product;
use catalog_browser::tui::BrowseOutcome;

/// One tab separated line per product.
pub(crate) fn format_product_line(product: &Product) -> String {
	[
		product.id.to_string(),
		product.name.clone(),
		product.category.clone(),
		product.brand.clone(),
		product.display_price(),
		product.stock_quantity.to_string(),
		product.availability_status.clone(),
	]
	.join("\t")
}

/// Plain-text representation of the browse outcome.
pub(crate) fn format_outcome_plain(outcome: &BrowseOutcome) -> String {
	let selection = &outcome.selection;
	let products = match outcome.shown {
		1 => "1 product".to_string(),
		count => format!("{count} products"),
	};
	format!(
		"search: '{}' · category: {} · brand: {} · {products}",
		selection.search,
		filter_label(&selection.category),
		filter_label(&selection.brand),
	)
}

fn filter_label(value: &str) -> &str {
	if value.is_empty() { "any" } else { value }
}

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

pub(crate) fn format_products_plain(products: &[Product]) -> String {
	products
		.iter()
		.map(format_product_line)
		.collect::<Vec<_>>()
		.join("\n")
}

/// Print a product listing, one line per product.
pub(crate) fn print_products_plain(products: &[Product]) {
	if !products.is_empty() {
		println!("{}", format_products_plain(products));
	}
}

/// Print a product listing as a JSON array.
pub(crate) fn print_products_json(products: &[Product]) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(products)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use catalog_browser::catalog::Selection;
	use serde_json::Value;

	use super::*;

	fn lamp() -> Product {
		Product {
			id: 1,
			name: "Lamp".into(),
			category: "Home".into(),
			brand: "Lumo".into(),
			price: 12.5,
			stock_quantity: 3,
			availability_status: "In Stock".into(),
			..Product::default()
		}
	}

	#[test]
	fn outcome_summarises_the_filters() {
		let outcome = BrowseOutcome::new(Selection::new("desk", "Office", ""), 1);
		insta::assert_snapshot!(format_outcome_plain(&outcome), @"search: 'desk' · category: Office · brand: any · 1 product");
	}

	#[test]
	fn listing_is_tab_separated() {
		let desk = Product {
			id: 2,
			name: "Desk".into(),
			category: "Office".into(),
			price: 120.0,
			stock_quantity: 1,
			availability_status: "Low Stock".into(),
			..Product::default()
		};
		let text = format_products_plain(&[lamp(), desk]);
		assert_eq!(
			text,
			"1\tLamp\tHome\tLumo\t$12.50\t3\tIn Stock\n2\tDesk\tOffice\t\t$120.00\t1\tLow Stock"
		);
	}

	#[test]
	fn json_format_includes_selection_and_count() {
		let outcome = BrowseOutcome::new(Selection::new("la", "Home", ""), 3);

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["shown"], 3);
		assert_eq!(value["selection"]["search"], "la");
		assert_eq!(value["selection"]["category"], "Home");
		assert_eq!(value["selection"]["brand"], "");
	}

	#[test]
	fn listing_json_keeps_prices_numeric() {
		let value: Value =
			serde_json::from_str(&serde_json::to_string(&[lamp()]).expect("json")).expect("parse");
		assert_eq!(value[0]["name"], "Lamp");
		assert_eq!(value[0]["price"], 12.5);
	}
}

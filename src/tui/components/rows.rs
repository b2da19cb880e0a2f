use frizbee::Config;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Cell, Row};

use super::highlight::{highlight_for_refs, highlight_line};
use crate::catalog::Product;

/// Build table rows for the product list, emphasising search matches in names.
#[must_use]
pub fn build_product_rows<'a>(
	products: &'a [Product],
	highlight_state: Option<(&str, &Config)>,
	highlight_style: Style,
) -> Vec<Row<'a>> {
	products
		.iter()
		.map(|product| {
			let name_highlight = highlight_state
				.and_then(|(needle, config)| highlight_for_refs(needle, config, &product.name));
			Row::new([
				Cell::from(highlight_line(&product.name, name_highlight, highlight_style)),
				Cell::from(product.category.as_str()),
				Cell::from(product.brand.as_str()),
				Cell::from(Line::from(product.display_price()).right_aligned()),
				Cell::from(Line::from(product.stock_quantity.to_string()).right_aligned()),
				Cell::from(product.availability_status.as_str()),
			])
		})
		.collect()
}

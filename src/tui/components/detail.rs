//! Side pane describing the selected product.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::catalog::Product;
use crate::tui::style::Theme;

/// Lines shown for `product` in the detail pane.
#[must_use]
pub fn detail_lines<'a>(product: &'a Product, theme: &Theme) -> Vec<Line<'a>> {
	let field = |label: &'static str, value: String| {
		Line::from(vec![
			Span::styled(format!("{label:<10}"), theme.header),
			Span::raw(value),
		])
	};

	let mut lines = vec![
		Line::styled(product.name.as_str(), theme.prompt),
		Line::default(),
		field("Category", product.category.clone()),
		field("Brand", product.brand.clone()),
		field("Price", product.display_price()),
		field("Stock", product.stock_quantity.to_string()),
		field("Status", product.availability_status.clone()),
	];
	if product.customer_rating > 0.0 {
		lines.push(field("Rating", format!("{:.1} / 5", product.customer_rating)));
	}
	if !product.release_date.is_empty() {
		lines.push(field("Released", product.release_date.clone()));
	}
	let colors = Product::variants(&product.colors);
	if !colors.is_empty() {
		lines.push(field("Colors", colors.join(", ")));
	}
	let sizes = Product::variants(&product.sizes);
	if !sizes.is_empty() {
		lines.push(field("Sizes", sizes.join(", ")));
	}
	if !product.description.is_empty() {
		lines.push(Line::default());
		lines.push(Line::from(product.description.as_str()));
	}
	lines
}

/// Render the detail pane; an empty pane when nothing is selected.
pub fn render_detail(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	product: Option<&Product>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style(false))
		.title(title.to_string());

	let lines = match product {
		Some(product) => detail_lines(product, theme),
		None => vec![Line::styled("No product selected", theme.empty_style())],
	};
	let paragraph = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: false });
	frame.render_widget(paragraph, area);
}

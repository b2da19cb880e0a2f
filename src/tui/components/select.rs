//! Dropdown-like selector for the category and brand filters.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::catalog::FilterSet;
use crate::tui::style::Theme;

/// One choice of a select control. An empty `value` means "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	pub value: String,
	pub label: String,
}

impl SelectOption {
	fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// "All categories" followed by every category, labelled with its count.
#[must_use]
pub fn category_options(filters: &FilterSet, all_label: &str) -> Vec<SelectOption> {
	std::iter::once(SelectOption::new("", all_label))
		.chain(filters.categories.iter().map(|entry| {
			SelectOption::new(
				entry.category.as_str(),
				format!("{} ({})", entry.category, entry.count),
			)
		}))
		.collect()
}

/// "All brands" followed by every brand, labelled with its count.
#[must_use]
pub fn brand_options(filters: &FilterSet, all_label: &str) -> Vec<SelectOption> {
	std::iter::once(SelectOption::new("", all_label))
		.chain(filters.brands.iter().map(|entry| {
			SelectOption::new(
				entry.brand.as_str(),
				format!("{} ({})", entry.brand, entry.count),
			)
		}))
		.collect()
}

/// Value `step` positions away from `current`, wrapping around.
///
/// A current value missing from `options` counts as the first option.
#[must_use]
pub fn cycle(options: &[SelectOption], current: &str, step: isize) -> Option<String> {
	if options.is_empty() {
		return None;
	}
	let len = options.len() as isize;
	let position = options
		.iter()
		.position(|option| option.value == current)
		.unwrap_or(0) as isize;
	let next = (position + step).rem_euclid(len) as usize;
	Some(options[next].value.clone())
}

/// Argument bundle for rendering a select control.
pub struct SelectContext<'a> {
	pub title: &'a str,
	pub options: &'a [SelectOption],
	pub current: &'a str,
	pub focused: bool,
	pub theme: &'a Theme,
}

/// Render a bordered control showing the current option between arrows.
pub fn render_select(frame: &mut Frame, area: Rect, ctx: SelectContext<'_>) {
	let SelectContext {
		title,
		options,
		current,
		focused,
		theme,
	} = ctx;

	let label = options
		.iter()
		.find(|option| option.value == current)
		.map(|option| option.label.clone())
		.unwrap_or_else(|| current.to_string());

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style(focused))
		.title(title.to_string());

	let arrow_style = if focused && options.len() > 1 {
		theme.prompt
	} else {
		theme.empty_style()
	};
	let line = Line::from(vec![
		Span::styled("◂ ", arrow_style),
		Span::raw(label),
		Span::styled(" ▸", arrow_style),
	]);
	frame.render_widget(Paragraph::new(line).block(block), area);
}

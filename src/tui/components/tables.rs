use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use super::scrollbar::render_scrollbar;
use crate::tui::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Title for the bordered table.
	pub title: String,
	/// Whether the table's pane has keyboard focus.
	pub focused: bool,
}

/// Widths of the product table columns.
#[must_use]
pub fn product_column_widths() -> Vec<Constraint> {
	vec![
		Constraint::Fill(3),
		Constraint::Fill(2),
		Constraint::Fill(2),
		Constraint::Length(10),
		Constraint::Length(6),
		Constraint::Fill(2),
	]
}

/// Number of body rows visible in a bordered table of height `height`.
#[must_use]
pub fn visible_rows(height: u16) -> usize {
	usize::from(height.saturating_sub(2)).saturating_sub(TABLE_HEADER_ROWS)
}

/// Render a bordered table, adding a scrollbar when rows overflow.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style(spec.focused))
		.title(spec.title);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header = Row::new(spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>())
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let available_rows = usize::from(inner.height).saturating_sub(TABLE_HEADER_ROWS);
	let total_rows = spec.rows.len();
	let needs_scrollbar = total_rows > available_rows && available_rows > 0;

	let table_area = if needs_scrollbar {
		let max_offset = total_rows.saturating_sub(available_rows);
		*scrollbar_state = scrollbar_state
			.content_length(max_offset.saturating_add(1))
			.viewport_content_length(1)
			.position(table_state.offset().min(max_offset));
		render_scrollbar(frame, inner, scrollbar_state, theme)
	} else {
		inner
	};

	let highlight_style = if spec.focused {
		theme.row_highlight
	} else {
		Style::default()
	};
	let table = Table::new(spec.rows, spec.widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(highlight_style)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	render_header_separator(frame, table_area, theme);
}

/// Render a centered message inside a bordered block, used in place of the table.
pub fn render_message(frame: &mut Frame, area: Rect, title: &str, message: Line<'_>, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style(false))
		.title(title.to_string());
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.height == 0 {
		return;
	}
	let middle = Rect {
		y: inner.y + inner.height / 2,
		height: 1,
		..inner
	};
	frame.render_widget(Paragraph::new(message).centered(), middle);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width <= 2 {
		return;
	}
	let sep = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	let middle = "─".repeat(usize::from(area.width) - 2);
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled(middle, theme.border_style(false)),
		Span::raw(" "),
	]);
	frame.render_widget(Paragraph::new(line), sep);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn visible_rows_excludes_borders_and_header() {
		assert_eq!(visible_rows(10), 6);
		assert_eq!(visible_rows(3), 0);
		assert_eq!(visible_rows(0), 0);
	}
}

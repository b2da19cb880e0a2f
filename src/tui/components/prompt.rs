use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::tui::input::SearchInput;
use crate::tui::style::Theme;

/// Argument bundle for rendering the search prompt.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a SearchInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Status shown at the right edge of the prompt.
pub struct ProgressState<'a> {
	/// Text describing the current state, e.g. a result count.
	pub status_text: &'a str,
	/// Whether a product query is still outstanding.
	pub loading: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Render the search prompt with optional placeholder and status.
pub fn render_input(frame: &mut ratatui::Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		placeholder,
		area,
		theme,
	} = input;

	search_input.render_textarea(frame, area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, area, placeholder_text, theme);
	}

	render_status(frame, area, &progress, theme);
}

fn render_placeholder(frame: &mut ratatui::Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let display_text: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width,
	);
}

fn render_status(frame: &mut ratatui::Frame, area: Rect, progress: &ProgressState<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 || progress.status_text.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if progress.loading {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	}
	line.spans
		.push(Span::styled(progress.status_text.to_string(), muted_style));

	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Keep clear of the typed text.
	let row = area.top();
	let last_char_x = (area.left()..area.right())
		.filter(|x| {
			buffer
				.cell((*x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn render(text: &str, status: &str, width: u16) -> String {
		let backend = TestBackend::new(width, 1);
		let mut terminal = Terminal::new(backend).expect("terminal");
		let input = SearchInput::new(text);
		let theme = Theme::default();
		let throbber = ThrobberState::default();
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_input(
					frame,
					InputContext {
						search_input: &input,
						placeholder: Some("Search products..."),
						area,
						theme: &theme,
					},
					ProgressState {
						status_text: status,
						loading: false,
						throbber_state: &throbber,
					},
				);
			})
			.expect("draw");
		let buffer = terminal.backend().buffer();
		(0..width)
			.map(|x| buffer[(x, 0)].symbol().to_string())
			.collect()
	}

	#[test]
	fn placeholder_and_status_share_the_row() {
		let row = render("", "12 products", 40);
		assert!(row.starts_with("Search products..."));
		assert!(row.ends_with("12 products"));
	}

	#[test]
	fn status_yields_to_long_input() {
		let row = render("a very long query that fills", "12 products", 32);
		assert!(row.starts_with("a very long query that fills"));
		assert!(!row.contains("12 products"));
	}
}

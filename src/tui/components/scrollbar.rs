//! Shared scrollbar rendering component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::tui::style::Theme;

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Render a themed vertical scrollbar on the right edge of `area` and return
/// the area left for content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_style(false));

	let bar = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, bar, scrollbar_state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn points_on_the_far_edge_are_outside() {
		let area = Rect::new(2, 3, 4, 2);
		assert!(point_in_rect(2, 3, area));
		assert!(point_in_rect(5, 4, area));
		assert!(!point_in_rect(6, 4, area));
		assert!(!point_in_rect(5, 5, area));
		assert!(!point_in_rect(0, 0, Rect::default()));
	}
}

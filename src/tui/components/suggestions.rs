//! Autocomplete popup listed under the search input.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use super::highlight::{highlight_config, highlight_for_refs, highlight_line};
use crate::tui::style::Theme;

/// Most suggestions shown at once.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// Area for the popup: directly below `anchor`, clipped to `bounds`.
#[must_use]
pub fn popup_area(anchor: Rect, bounds: Rect, count: usize) -> Option<Rect> {
	if count == 0 {
		return None;
	}
	let rows = count.min(MAX_VISIBLE_SUGGESTIONS) as u16 + 2;
	let y = anchor.y.saturating_add(anchor.height);
	let available = bounds.bottom().saturating_sub(y);
	if available < 3 {
		return None;
	}
	Some(Rect {
		x: anchor.x,
		y,
		width: anchor.width.min(bounds.right().saturating_sub(anchor.x)),
		height: rows.min(available),
	})
}

/// Render the suggestion list over whatever is beneath it.
pub fn render_suggestions(
	frame: &mut Frame,
	area: Rect,
	suggestions: &[String],
	query: &str,
	selected: Option<usize>,
	theme: &Theme,
) {
	let config = highlight_config();
	let items: Vec<ListItem> = suggestions
		.iter()
		.map(|suggestion| {
			let indices = highlight_for_refs(query, &config, suggestion);
			ListItem::new(highlight_line(suggestion, indices, theme.highlight))
		})
		.collect();

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style(true));
	let list = List::new(items)
		.block(block)
		.highlight_style(theme.row_highlight);

	let mut state = ListState::default().with_selected(selected);
	frame.render_widget(Clear, area);
	frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn popup_sits_below_the_anchor() {
		let anchor = Rect::new(2, 1, 30, 1);
		let bounds = Rect::new(0, 0, 80, 24);
		let area = popup_area(anchor, bounds, 3).expect("fits");
		assert_eq!(area, Rect::new(2, 2, 30, 5));
	}

	#[test]
	fn popup_is_capped_and_clipped() {
		let anchor = Rect::new(0, 1, 20, 1);
		let area = popup_area(anchor, Rect::new(0, 0, 20, 40), 50).expect("fits");
		assert_eq!(area.height as usize, MAX_VISIBLE_SUGGESTIONS + 2);

		let tight = popup_area(anchor, Rect::new(0, 0, 20, 6), 50).expect("fits");
		assert_eq!(tight.height, 4);
		assert!(popup_area(anchor, Rect::new(0, 0, 20, 3), 5).is_none());
		assert!(popup_area(anchor, Rect::new(0, 0, 20, 24), 0).is_none());
	}
}

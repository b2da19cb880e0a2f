//! State management for the results table.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::tui::components::tables::TABLE_HEADER_ROWS;

/// Aggregate state for the results table and its interactions.
#[derive(Default)]
pub(crate) struct ResultsState {
	/// Selection state for the results table.
	pub table_state: TableState,
	/// Scrollbar state for the results table.
	pub scrollbar_state: ScrollbarState,
	/// Last known results area on screen.
	pub area: Option<Rect>,
	/// Whether the mouse is currently hovering the results table.
	pub hovered: bool,
}

impl ResultsState {
	/// Keep the selected row inside `0..len`, selecting the first row when
	/// rows appear and nothing when the list empties.
	pub fn ensure_selection(&mut self, len: usize) {
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Move the selection by `delta` rows, clamped to the list.
	pub fn move_by(&mut self, delta: isize, len: usize) {
		if len == 0 {
			self.table_state.select(None);
			return;
		}
		let current = self.table_state.selected().unwrap_or(0) as isize;
		let target = (current + delta).clamp(0, len as isize - 1);
		self.table_state.select(Some(target as usize));
	}

	pub fn select_first(&mut self, len: usize) {
		self.table_state.select((len > 0).then_some(0));
	}

	pub fn select_last(&mut self, len: usize) {
		self.table_state.select(len.checked_sub(1));
	}

	/// Rows that fit in the last rendered table, at least one.
	pub fn page_rows(&self) -> usize {
		self.area
			.map(|area| usize::from(area.height.saturating_sub(2)).saturating_sub(TABLE_HEADER_ROWS))
			.unwrap_or(0)
			.max(1)
	}

	/// Update hover state based on mouse position.
	pub fn update_hover(&mut self, column: u16, row: u16) {
		self.hovered = self
			.area
			.is_some_and(|area| crate::tui::components::point_in_rect(column, row, area));
	}

	/// Select the row under a mouse click. Returns `true` if a row was hit.
	pub fn select_at(&mut self, row: u16, len: usize) -> bool {
		let Some(area) = self.area else {
			return false;
		};
		// Border, then header and separator.
		let body_start_y = area.y.saturating_add(1 + TABLE_HEADER_ROWS as u16);
		let body_end_y = area.y.saturating_add(area.height.saturating_sub(1));
		if row < body_start_y || row >= body_end_y {
			return false;
		}

		let index = self
			.table_state
			.offset()
			.saturating_add(usize::from(row - body_start_y));
		if index >= len {
			return false;
		}
		self.table_state.select(Some(index));
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selection_follows_the_list_length() {
		let mut results = ResultsState::default();
		results.ensure_selection(3);
		assert_eq!(results.table_state.selected(), Some(0));

		results.table_state.select(Some(2));
		results.ensure_selection(2);
		assert_eq!(results.table_state.selected(), Some(1));

		results.ensure_selection(0);
		assert_eq!(results.table_state.selected(), None);
	}

	#[test]
	fn movement_is_clamped() {
		let mut results = ResultsState::default();
		results.move_by(-1, 5);
		assert_eq!(results.table_state.selected(), Some(0));
		results.move_by(10, 5);
		assert_eq!(results.table_state.selected(), Some(4));
		results.select_first(5);
		assert_eq!(results.table_state.selected(), Some(0));
		results.select_last(0);
		assert_eq!(results.table_state.selected(), None);
	}

	#[test]
	fn clicks_map_to_rows_below_the_header() {
		let mut results = ResultsState {
			area: Some(Rect::new(0, 5, 40, 10)),
			..ResultsState::default()
		};
		assert!(!results.select_at(7, 4));
		assert!(results.select_at(9, 4));
		assert_eq!(results.table_state.selected(), Some(1));
		assert!(!results.select_at(12, 4));
		assert!(!results.select_at(14, 10));
	}
}

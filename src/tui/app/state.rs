//! Core state container for the terminal application's front-end.

use throbber_widgets_tui::ThrobberState;

use super::results::ResultsState;
use crate::catalog::{CatalogView, FetchRuntime, Product, Selection};
use crate::tui::config::UiLabels;
use crate::tui::input::SearchInput;
use crate::tui::style::{StyleConfig, Theme};

/// Terminal width from which the detail pane opens on its own.
pub(crate) const DETAIL_PANE_MIN_WIDTH: u16 = 100;

/// The control that receives key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	Search,
	Category,
	Brand,
	Results,
}

impl Focus {
	const ORDER: [Self; 4] = [Self::Search, Self::Category, Self::Brand, Self::Results];

	#[must_use]
	pub fn next(self) -> Self {
		self.step(1)
	}

	#[must_use]
	pub fn previous(self) -> Self {
		self.step(Self::ORDER.len() - 1)
	}

	fn step(self, by: usize) -> Self {
		let index = Self::ORDER
			.iter()
			.position(|focus| *focus == self)
			.unwrap_or(0);
		Self::ORDER[(index + by) % Self::ORDER.len()]
	}
}

/// Whether the detail pane is shown, and whether the user chose that.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DetailState {
	pub enabled: bool,
	/// Set once the pane was configured or toggled; disables the width rule.
	pub pinned: bool,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Catalog data and the selection it was fetched for.
	pub view: CatalogView,
	/// Text input widget for the search text.
	pub search_input: SearchInput<'a>,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) fetch: FetchRuntime,
	pub(crate) focus: Focus,
	/// Highlighted entry of the suggestion popup.
	pub(crate) suggestion_index: Option<usize>,
	pub(crate) results: ResultsState,
	pub(crate) detail: DetailState,
}

impl<'a> App<'a> {
	/// Construct an [`App`] starting from `selection`. Nothing is fetched
	/// until [`App::mount`] runs.
	pub fn new(fetch: FetchRuntime, selection: Selection) -> Self {
		let search_input = SearchInput::new(selection.search.clone());
		Self {
			view: CatalogView::with_selection(selection),
			search_input,
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			throbber_state: ThrobberState::default(),
			fetch,
			focus: Focus::default(),
			suggestion_index: None,
			results: ResultsState::default(),
			detail: DetailState::default(),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	/// Force the detail pane on or off regardless of terminal width.
	pub fn set_detail_pane(&mut self, enabled: bool) {
		self.detail = DetailState {
			enabled,
			pinned: true,
		};
	}

	/// Open the detail pane on wide terminals unless the user decided.
	pub(crate) fn update_detail_responsive(&mut self, width: u16) {
		if !self.detail.pinned {
			self.detail.enabled = width >= DETAIL_PANE_MIN_WIDTH;
		}
	}

	pub(crate) fn toggle_detail(&mut self) {
		self.set_detail_pane(!self.detail.enabled);
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.search_input.set_focused(focus == Focus::Search);
		if focus != Focus::Search {
			self.suggestion_index = None;
		}
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// The product under the table cursor.
	#[must_use]
	pub fn selected_product(&self) -> Option<&Product> {
		let index = self.results.table_state.selected()?;
		self.view.products().get(index)
	}

	/// Whether the suggestion popup is showing.
	pub(crate) fn suggestions_visible(&self) -> bool {
		self.focus == Focus::Search
			&& !self.search_input.text().is_empty()
			&& !self.view.suggestions().is_empty()
	}
}

use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::widgets::TableState;

use super::{App, Focus};
use crate::catalog::FetchRequest;
use crate::tui::components::{brand_options, category_options, cycle};
use crate::tui::outcome::BrowseOutcome;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome())),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome())),
			KeyCode::Char('p') if ctrl => self.toggle_detail(),
			KeyCode::Tab => self.set_focus(self.focus.next()),
			KeyCode::BackTab => self.set_focus(self.focus.previous()),
			_ => match self.focus {
				Focus::Search => self.handle_search_key(key),
				Focus::Category => self.handle_category_key(key),
				Focus::Brand => self.handle_brand_key(key),
				Focus::Results => self.handle_results_key(key),
			},
		}
		Ok(None)
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		self.results.update_hover(mouse.column, mouse.row);
		if !self.results.hovered {
			return;
		}
		let len = self.view.products().len();
		match mouse.kind {
			MouseEventKind::ScrollUp => self.results.move_by(-1, len),
			MouseEventKind::ScrollDown => self.results.move_by(1, len),
			MouseEventKind::Down(MouseButton::Left) => {
				if self.results.select_at(mouse.row, len) {
					self.set_focus(Focus::Results);
				}
			}
			_ => {}
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up if self.suggestions_visible() => self.move_suggestion(-1),
			KeyCode::Down if self.suggestions_visible() => self.move_suggestion(1),
			KeyCode::Down => self.set_focus(Focus::Results),
			KeyCode::Enter => match self.highlighted_suggestion() {
				Some(suggestion) => self.accept_suggestion(suggestion),
				None => self.set_focus(Focus::Results),
			},
			_ => {
				if self.search_input.input(key) {
					self.search_changed();
				}
			}
		}
	}

	fn handle_category_key(&mut self, key: KeyEvent) {
		let Some(step) = select_step(key.code) else {
			return;
		};
		let options = category_options(self.view.filters(), &self.ui.all_categories);
		let current = self.view.selection().category.clone();
		if let Some(value) = cycle(&options, &current, step)
			&& value != current
		{
			let request = self.view.on_category_change(value);
			self.query_changed(request);
		}
	}

	fn handle_brand_key(&mut self, key: KeyEvent) {
		let Some(step) = select_step(key.code) else {
			return;
		};
		let options = brand_options(self.view.filters(), &self.ui.all_brands);
		let current = self.view.selection().brand.clone();
		if let Some(value) = cycle(&options, &current, step)
			&& value != current
		{
			let request = self.view.on_brand_change(value);
			self.query_changed(request);
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent) {
		let len = self.view.products().len();
		let page = self.results.page_rows() as isize;
		match key.code {
			KeyCode::Up => self.results.move_by(-1, len),
			KeyCode::Down => self.results.move_by(1, len),
			KeyCode::PageUp => self.results.move_by(-page, len),
			KeyCode::PageDown => self.results.move_by(page, len),
			KeyCode::Home => self.results.select_first(len),
			KeyCode::End => self.results.select_last(len),
			KeyCode::Enter => self.open_detail(),
			KeyCode::Char(_) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
				// Typing from the table goes back to the search box.
				self.set_focus(Focus::Search);
				self.handle_search_key(key);
			}
			_ => {}
		}
	}

	fn search_changed(&mut self) {
		self.suggestion_index = None;
		let text = self.search_input.text().to_string();
		let requests = self.view.on_search_input(text);
		self.reset_results();
		self.submit(requests);
	}

	fn query_changed(&mut self, request: FetchRequest) {
		self.reset_results();
		self.submit([request]);
	}

	fn reset_results(&mut self) {
		self.results.table_state = TableState::default().with_selected(Some(0));
	}

	fn move_suggestion(&mut self, delta: isize) {
		let len = self.view.suggestions().len();
		if len == 0 {
			self.suggestion_index = None;
			return;
		}
		self.suggestion_index = match (self.suggestion_index, delta < 0) {
			(None, false) => Some(0),
			(None, true) => Some(len - 1),
			(Some(0), true) => None,
			(Some(index), true) => Some(index - 1),
			(Some(index), false) => Some((index + 1).min(len - 1)),
		};
	}

	fn highlighted_suggestion(&self) -> Option<String> {
		if !self.suggestions_visible() {
			return None;
		}
		let index = self.suggestion_index?;
		self.view.suggestions().get(index).cloned()
	}

	fn accept_suggestion(&mut self, suggestion: String) {
		self.search_input.set_text(suggestion);
		self.search_changed();
	}

	/// Show the highlighted product in the detail pane and keep it open.
	fn open_detail(&mut self) {
		if self.selected_product().is_some() {
			self.set_detail_pane(true);
		}
	}

	fn outcome(&self) -> BrowseOutcome {
		BrowseOutcome::new(self.view.selection().clone(), self.view.products().len())
	}
}

fn select_step(code: KeyCode) -> Option<isize> {
	match code {
		KeyCode::Up | KeyCode::Left => Some(-1),
		KeyCode::Down | KeyCode::Right => Some(1),
		_ => None,
	}
}

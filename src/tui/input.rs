//! Single-line text input for the search query.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Search box backed by a one-line [`TextArea`].
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the input. Returns `true` when the text changed.
	///
	/// Keys that would insert a line break are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_newline(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Replace the text, e.g. when accepting a suggestion.
	pub fn set_text(&mut self, text: impl Into<String>) {
		*self = Self::new(text);
	}

	/// Show the cursor only while the input has focus.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	/// Draw the input into `area`.
	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn is_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_reports_changes() {
		let mut input = SearchInput::new("");
		assert!(input.input(press(KeyCode::Char('t'))));
		assert!(input.input(press(KeyCode::Char('v'))));
		assert_eq!(input.text(), "tv");
		assert!(!input.input(press(KeyCode::Left)), "cursor moves do not edit");
		assert!(input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "v");
	}

	#[test]
	fn enter_never_inserts_a_line() {
		let mut input = SearchInput::new("lamp");
		assert!(!input.input(press(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "lamp");
	}

	#[test]
	fn set_text_places_cursor_at_end() {
		let mut input = SearchInput::new("");
		input.set_text("Product 1");
		input.input(press(KeyCode::Char('2')));
		assert_eq!(input.text(), "Product 12");
	}
}

//! Built-in colour themes and lookup by name or alias.

use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Style for headers, borders and separators.
	pub header: Style,
	/// Style for the selected table row.
	pub row_highlight: Style,
	/// Style for the prompt and focused control borders.
	pub prompt: Style,
	/// Style for placeholders, hints and empty states.
	pub empty: Style,
	/// Style for characters matching the search text.
	pub highlight: Style,
}

impl Theme {
	/// Style used for dimmed placeholder and status text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Border style for a control, brighter when it has focus.
	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused {
			self.prompt
		} else {
			Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// A named theme together with its alternate names.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

fn slate() -> Theme {
	Theme {
		header: Style::new().fg(Color::Rgb(148, 163, 184)),
		row_highlight: Style::new()
			.bg(Color::Rgb(51, 65, 85))
			.add_modifier(Modifier::BOLD),
		prompt: Style::new().fg(Color::Rgb(56, 189, 248)),
		empty: Style::new().fg(Color::Rgb(100, 116, 139)),
		highlight: Style::new()
			.fg(Color::Rgb(250, 204, 21))
			.add_modifier(Modifier::BOLD),
	}
}

fn light() -> Theme {
	Theme {
		header: Style::new().fg(Color::Rgb(71, 85, 105)),
		row_highlight: Style::new()
			.bg(Color::Rgb(226, 232, 240))
			.add_modifier(Modifier::BOLD),
		prompt: Style::new().fg(Color::Rgb(2, 132, 199)),
		empty: Style::new().fg(Color::Rgb(148, 163, 184)),
		highlight: Style::new()
			.fg(Color::Rgb(194, 65, 12))
			.add_modifier(Modifier::BOLD),
	}
}

fn mono() -> Theme {
	Theme {
		header: Style::new(),
		row_highlight: Style::new().add_modifier(Modifier::REVERSED),
		prompt: Style::new().add_modifier(Modifier::BOLD),
		empty: Style::new().add_modifier(Modifier::DIM),
		highlight: Style::new().add_modifier(Modifier::UNDERLINED),
	}
}

/// Return the built-in themes bundled with the application. The first entry
/// is the default.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration::new("slate", slate()).alias("dark"),
		ThemeRegistration::new("light", light()).alias("day"),
		ThemeRegistration::new("mono", mono())
			.alias("plain")
			.alias("no-color"),
	]
}

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	slate()
}

/// Look up a theme by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtin_themes()
		.into_iter()
		.find(|registration| registration.matches(name.trim()))
		.map(|registration| registration.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<String> {
	builtin_themes()
		.into_iter()
		.map(|registration| registration.name)
		.collect()
}

//! Visual styling utilities.
//!
//! Themes represent the colour schemes applied to the terminal UI. Additional
//! styling knobs live on [`StyleConfig`] alongside the active theme.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}

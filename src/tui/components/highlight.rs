//! Emphasis of characters that match the search text.

use std::mem;

use frizbee::{Config, match_indices};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Character indices in `text` matched by `needle`, if any.
#[must_use]
pub fn highlight_for_refs(needle: &str, config: &Config, text: &str) -> Option<Vec<usize>> {
	if text.is_empty() || needle.is_empty() {
		return None;
	}
	match_indices(needle, text, config).map(|m| m.indices)
}

/// Matcher configuration used for highlighting.
#[must_use]
pub fn highlight_config() -> Config {
	Config {
		prefilter: false,
		..Config::default()
	}
}

/// Build a line where the characters at `indices` use `highlight_style`.
#[must_use]
pub fn highlight_line(text: &str, indices: Option<Vec<usize>>, highlight_style: Style) -> Line<'static> {
	let Some(mut sorted) = indices.filter(|indices| !indices.is_empty()) else {
		return Line::from(text.to_string());
	};
	sorted.sort_unstable();
	let mut next = sorted.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();

	for (idx, ch) in text.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				let style = if highlighted {
					highlight_style
				} else {
					Style::default()
				};
				spans.push(Span::styled(mem::take(&mut buffer), style));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}
	if !buffer.is_empty() {
		let style = if highlighted {
			highlight_style
		} else {
			Style::default()
		};
		spans.push(Span::styled(buffer, style));
	}
	Line::from(spans)
}

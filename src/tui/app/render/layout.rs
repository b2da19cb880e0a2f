use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScreenLayout {
	pub title: Rect,
	pub input: Rect,
	pub category: Rect,
	pub brand: Rect,
	pub results: Rect,
	pub detail: Option<Rect>,
	pub footer: Rect,
}

/// Split `area` into the catalog screen's regions.
pub(crate) fn screen_layout(area: Rect, detail: bool) -> ScreenLayout {
	let area = area.inner(Margin {
		vertical: 0,
		horizontal: 1,
	});
	let [title, input, selects, body, footer] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Length(3),
		Constraint::Min(3),
		Constraint::Length(1),
	])
	.areas(area);

	let [category, brand] =
		Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
			.spacing(1)
			.areas(selects);

	let (results, detail) = if detail {
		let [results, detail] =
			Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
				.areas(body);
		(results, Some(detail))
	} else {
		(body, None)
	};

	ScreenLayout {
		title,
		input,
		category,
		brand,
		results,
		detail,
		footer,
	}
}

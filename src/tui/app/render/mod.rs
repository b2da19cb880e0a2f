pub(crate) mod layout;

use layout::{ScreenLayout, screen_layout};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::{App, Focus};
use crate::tui::components::highlight::highlight_config;
use crate::tui::components::{
	InputContext, ProgressState, SelectContext, TableSpec, brand_options, build_product_rows,
	category_options, popup_area, product_column_widths, render_detail, render_input,
	render_message, render_select, render_suggestions, render_table,
};
use crate::tui::config::PRODUCT_HEADERS;

const PROMPT: &str = "❯ ";

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let layout = screen_layout(frame.area(), self.detail.enabled);

		self.render_title(frame, layout.title);
		self.render_prompt(frame, layout.input);
		self.render_selects(frame, &layout);
		self.render_results(frame, layout.results);
		if let Some(area) = layout.detail {
			render_detail(
				frame,
				area,
				&self.ui.detail_panel_title,
				self.selected_product(),
				&self.style.theme,
			);
		}
		self.render_footer(frame, layout.footer);

		if self.suggestions_visible()
			&& let Some(area) = popup_area(
				layout.input,
				frame.area(),
				self.view.suggestions().len(),
			) {
			render_suggestions(
				frame,
				area,
				self.view.suggestions(),
				self.search_input.text(),
				self.suggestion_index,
				&self.style.theme,
			);
		}
	}

	fn render_title(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let status = self.facet_status();
		let [left, right] = Layout::horizontal([
			Constraint::Fill(1),
			Constraint::Length(status.width() as u16),
		])
		.areas(area);
		frame.render_widget(Paragraph::new(Span::styled(self.ui.title.as_str(), theme.header)), left);
		frame.render_widget(Paragraph::new(Span::styled(status, theme.empty_style())), right);
	}

	/// Counts of the loaded lookup lists. A failed list counts as empty.
	fn facet_status(&self) -> String {
		format!(
			"{} categories · {} brands",
			self.view.categories().len(),
			self.view.brands().len()
		)
	}

	fn render_prompt(&self, frame: &mut Frame, area: Rect) {
		let [prompt_area, input_area] =
			Layout::horizontal([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
		frame.render_widget(
			Paragraph::new(Span::styled(PROMPT, self.style.theme.prompt)),
			prompt_area,
		);

		let status_text = if self.view.is_loading() {
			self.ui.loading.clone()
		} else {
			match self.view.products().len() {
				1 => "1 product".to_string(),
				count => format!("{count} products"),
			}
		};
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				placeholder: Some(&self.ui.search_placeholder),
				area: input_area,
				theme: &self.style.theme,
			},
			ProgressState {
				status_text: &status_text,
				loading: self.view.is_loading(),
				throbber_state: &self.throbber_state,
			},
		);
	}

	fn render_selects(&self, frame: &mut Frame, layout: &ScreenLayout) {
		let filters = self.view.filters();
		let selection = self.view.selection();
		let categories = category_options(filters, &self.ui.all_categories);
		let brands = brand_options(filters, &self.ui.all_brands);
		render_select(
			frame,
			layout.category,
			SelectContext {
				title: "Category",
				options: &categories,
				current: &selection.category,
				focused: self.focus == Focus::Category,
				theme: &self.style.theme,
			},
		);
		render_select(
			frame,
			layout.brand,
			SelectContext {
				title: "Brand",
				options: &brands,
				current: &selection.brand,
				focused: self.focus == Focus::Brand,
				theme: &self.style.theme,
			},
		);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		self.results.area = Some(area);
		let theme = self.style.theme;

		if self.view.is_loading() {
			let message = Line::styled(self.ui.loading.as_str(), theme.empty_style());
			render_message(frame, area, &self.ui.table_title, message, &theme);
			return;
		}
		let products = self.view.products();
		if products.is_empty() {
			let message = Line::styled(self.ui.no_results.as_str(), theme.empty_style());
			render_message(frame, area, &self.ui.table_title, message, &theme);
			return;
		}

		let query = self.search_input.text().trim().to_string();
		let config = highlight_config();
		let highlight_state = (!query.is_empty()).then_some((query.as_str(), &config));
		let rows = build_product_rows(products, highlight_state, theme.highlight);
		let spec = TableSpec {
			headers: PRODUCT_HEADERS.iter().map(|header| header.to_string()).collect(),
			widths: product_column_widths(),
			rows,
			title: format!("{} ({})", self.ui.table_title, products.len()),
			focused: self.focus == Focus::Results,
		};
		render_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			spec,
			&theme,
		);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let hints = match self.focus {
			Focus::Search => "type to search · ↑↓ suggestions · enter accept · tab next",
			Focus::Category | Focus::Brand => "←→ change filter · tab next · shift+tab back",
			Focus::Results => "↑↓ pgup pgdn move · enter details · tab next",
		};
		let line = Line::from(vec![
			Span::styled(hints, self.style.theme.empty_style()),
			Span::styled(" · ctrl+p details · esc quit", self.style.theme.empty_style()),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}
}

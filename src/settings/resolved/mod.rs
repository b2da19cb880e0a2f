use std::time::Duration;

use catalog_browser::catalog::Selection;
use catalog_browser::tui::style::Theme;
use reqwest::Url;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

use super::raw::RawConfig;

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub(crate) const DEFAULT_WORKERS: usize = 4;
pub(crate) const DEFAULT_THEME: &str = "slate";

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub base_url: Url,
	/// Per-request timeout; `None` waits indefinitely.
	pub timeout: Option<Duration>,
	pub workers: usize,
	pub theme_name: String,
	pub theme: Theme,
	/// Search text and filters the browser starts from.
	pub selection: Selection,
	/// `None` lets the terminal width decide.
	pub detail_pane: Option<bool>,
}

impl ResolvedConfig {
	pub(super) fn from_raw(raw: RawConfig, sources: &ConfigSources) -> Result<Self, ConfigError> {
		let RawConfig { backend, ui } = raw;

		let base_url = validation::parse_base_url(
			backend.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
			sources.source_for_base_url(),
		)?;
		let timeout = backend
			.timeout_secs
			.map(|secs| validation::timeout(secs, sources.source_for_timeout()))
			.transpose()?;
		let workers = validation::workers(
			backend.workers.unwrap_or(DEFAULT_WORKERS),
			sources.source_for_workers(),
		)?;
		let theme_name = ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = validation::theme(&theme_name, sources.source_for_theme())?;

		let selection = Selection::new(
			ui.initial_query.unwrap_or_default(),
			ui.initial_category.unwrap_or_default(),
			ui.initial_brand.unwrap_or_default(),
		);

		Ok(Self {
			base_url,
			timeout,
			workers,
			theme_name,
			theme,
			selection,
			detail_pane: ui.detail_pane,
		})
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}

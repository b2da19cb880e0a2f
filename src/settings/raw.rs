use serde::Deserialize;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) backend: BackendSection,
	pub(super) ui: UiSection,
}

/// Backend connection options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BackendSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
	pub(super) workers: Option<usize>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) initial_category: Option<String>,
	pub(super) initial_brand: Option<String>,
	pub(super) detail_pane: Option<bool>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values, recording
	/// which flags supplied the validated settings.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) -> ConfigSources {
		let mut sources = ConfigSources::default();

		if let Some(url) = cli.base_url.clone() {
			self.backend.base_url = Some(url);
			sources.backend_base_url = Some(SettingSource::CliFlag("--base-url"));
		}
		if let Some(timeout) = cli.timeout {
			self.backend.timeout_secs = Some(timeout);
			sources.backend_timeout = Some(SettingSource::CliFlag("--timeout"));
		}
		if let Some(workers) = cli.workers {
			self.backend.workers = Some(workers);
			sources.backend_workers = Some(SettingSource::CliFlag("--workers"));
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
			sources.ui_theme = Some(SettingSource::CliFlag("--theme"));
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(category) = cli.category.clone() {
			self.ui.initial_category = Some(category);
		}
		if let Some(brand) = cli.brand.clone() {
			self.ui.initial_brand = Some(brand);
		}

		sources
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ResolvedConfig, ConfigError> {
		ResolvedConfig::from_raw(self, sources)
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn cli_overrides_take_precedence() {
		let cli = CliArgs::parse_from([
			"catalog",
			"--base-url",
			"http://cli.test",
			"--timeout",
			"5",
			"--workers",
			"2",
			"--theme",
			"mono",
			"-q",
			"lamp",
			"--category",
			"Home",
			"--brand",
			"Lumo",
		]);

		let mut config = RawConfig::default();
		config.backend.base_url = Some("http://file.test".into());
		let sources = config.apply_cli_overrides(&cli);

		assert_eq!(config.backend.base_url.as_deref(), Some("http://cli.test"));
		assert_eq!(config.backend.timeout_secs, Some(5));
		assert_eq!(config.backend.workers, Some(2));
		assert_eq!(config.ui.theme.as_deref(), Some("mono"));
		assert_eq!(config.ui.initial_query.as_deref(), Some("lamp"));
		assert_eq!(config.ui.initial_category.as_deref(), Some("Home"));
		assert_eq!(config.ui.initial_brand.as_deref(), Some("Lumo"));
		assert_eq!(
			sources.source_for_base_url().to_string(),
			"CLI flag `--base-url`"
		);
	}

	#[test]
	fn file_values_survive_without_flags() {
		let cli = CliArgs::parse_from(["catalog"]);
		let mut config = RawConfig::default();
		config.ui.theme = Some("light".into());
		let sources = config.apply_cli_overrides(&cli);

		assert_eq!(config.ui.theme.as_deref(), Some("light"));
		assert_eq!(
			sources.source_for_theme().to_string(),
			"configuration key `ui.theme`"
		);
	}
}

use std::fmt;

/// Where a validated setting came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) backend_base_url: Option<SettingSource>,
	pub(crate) backend_timeout: Option<SettingSource>,
	pub(crate) backend_workers: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_base_url(&self) -> SettingSource {
		self.backend_base_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("backend.base_url"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.backend_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("backend.timeout_secs"))
	}

	pub(crate) fn source_for_workers(&self) -> SettingSource {
		self.backend_workers
			.clone()
			.unwrap_or(SettingSource::ConfigKey("backend.workers"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}

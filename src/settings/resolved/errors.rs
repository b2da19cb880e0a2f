use thiserror::Error;

use super::SettingSource;

/// A setting that failed validation, naming where its value came from.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("backend.base_url from {origin} is not a usable backend address ({reason}): {value}")]
	BaseUrl {
		value: String,
		origin: SettingSource,
		reason: String,
	},

	/// Worker counts and timeouts need at least one unit.
	#[error("{key} from {origin} must be greater than zero (value: 0)")]
	Zero {
		key: &'static str,
		origin: SettingSource,
	},

	#[error("unknown theme `{name}` from {origin}; expected one of {available}")]
	UnknownTheme {
		name: String,
		origin: SettingSource,
		available: String,
	},
}

impl ConfigError {
	/// Configuration key of the rejected setting.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::BaseUrl { .. } => "backend.base_url",
			Self::Zero { key, .. } => key,
			Self::UnknownTheme { .. } => "ui.theme",
		}
	}
}

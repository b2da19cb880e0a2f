use std::time::Duration;

use catalog_browser::tui::style::{self, Theme};
use reqwest::Url;

use super::{ConfigError, SettingSource};

pub(super) fn parse_base_url(value: &str, origin: SettingSource) -> Result<Url, ConfigError> {
	let invalid = |reason: String| ConfigError::BaseUrl {
		value: value.to_string(),
		origin: origin.clone(),
		reason,
	};

	let url = Url::parse(value.trim()).map_err(|err| invalid(err.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid("scheme must be http or https".into()));
	}
	if url.host_str().is_none_or(str::is_empty) {
		return Err(invalid("missing host".into()));
	}
	Ok(url)
}

pub(super) fn timeout(secs: u64, origin: SettingSource) -> Result<Duration, ConfigError> {
	if secs == 0 {
		return Err(ConfigError::Zero {
			key: "backend.timeout_secs",
			origin,
		});
	}
	Ok(Duration::from_secs(secs))
}

pub(super) fn workers(count: usize, origin: SettingSource) -> Result<usize, ConfigError> {
	if count == 0 {
		return Err(ConfigError::Zero {
			key: "backend.workers",
			origin,
		});
	}
	Ok(count)
}

pub(super) fn theme(name: &str, origin: SettingSource) -> Result<Theme, ConfigError> {
	style::by_name(name).ok_or_else(|| ConfigError::UnknownTheme {
		name: name.to_string(),
		origin,
		available: style::names().join(", "),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(name: &'static str) -> SettingSource {
		SettingSource::ConfigKey(name)
	}

	#[test]
	fn base_url_must_be_http() {
		assert!(parse_base_url("http://localhost:8080", key("backend.base_url")).is_ok());
		assert!(parse_base_url("https://shop.example/api/", key("backend.base_url")).is_ok());

		let err = parse_base_url("ftp://shop.example", key("backend.base_url")).unwrap_err();
		assert_eq!(err.key(), "backend.base_url");
		assert!(err.to_string().contains("scheme must be http or https"));
		assert!(err.to_string().ends_with("ftp://shop.example"));
		assert!(parse_base_url("localhost:8080", key("backend.base_url")).is_err());
		assert!(parse_base_url("not a url", key("backend.base_url")).is_err());
	}

	#[test]
	fn validation_rejects_zero_workers() {
		let err = workers(0, SettingSource::CliFlag("--workers")).unwrap_err();
		assert_eq!(err.key(), "backend.workers");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let err = timeout(0, key("backend.timeout_secs")).unwrap_err();
		assert!(err.to_string().contains("configuration key `backend.timeout_secs`"));
		assert_eq!(timeout(2, key("backend.timeout_secs")).ok(), Some(Duration::from_secs(2)));
	}

	#[test]
	fn theme_aliases_are_accepted() {
		assert!(theme("dark", key("ui.theme")).is_ok());
		let err = theme("neon", key("ui.theme")).unwrap_err();
		assert!(matches!(&err, ConfigError::UnknownTheme { name, .. } if name == "neon"));
		assert!(err.to_string().contains("expected one of slate, light, mono"));
	}
}

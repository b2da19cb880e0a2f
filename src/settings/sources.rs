use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use catalog_browser::app_dirs;
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;

/// Prefix of environment overrides such as `CATALOG__BACKEND__BASE_URL`.
pub(super) const ENV_PREFIX: &str = "CATALOG";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".catalog.toml"));
		files.push(current_dir.join("catalog.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".catalog.toml")));
		assert!(files.iter().any(|path| path.ends_with("catalog.toml")));
	}

	#[test]
	fn explicit_file_is_merged() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("custom.toml");
		fs::write(&path, "[backend]\nbase_url = \"http://files.test:9000\"\n").expect("write");

		let cli = CliArgs::parse_from([
			"catalog",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		let config = build_config(&cli).expect("config");
		assert_eq!(
			config.get_string("backend.base_url").expect("key"),
			"http://files.test:9000"
		);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let cli = CliArgs::parse_from(["catalog", "--no-config", "--config", "/nonexistent/catalog.toml"]);
		assert!(build_config(&cli).is_err());
	}
}

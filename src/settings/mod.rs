//! Configuration loading and resolution utilities.
//!
//! [`load`] layers defaults, config files, `CATALOG__*` environment variables
//! and CLI flags, then validates the result into a [`ResolvedConfig`].

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};

use crate::cli::CliArgs;
use raw::RawConfig;
pub use resolved::ResolvedConfig;

pub(crate) use resolved::DEFAULT_BASE_URL;

/// Resolve the backend and UI settings for this invocation.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = sources::build_config(cli)?
		.try_deserialize()
		.context("configuration does not match the [backend] and [ui] sections")?;
	let sources = raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(&sources)?;
	Ok(resolved)
}

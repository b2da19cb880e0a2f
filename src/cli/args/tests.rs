use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_leave_everything_to_configuration() {
	let parsed = CliArgs::parse_from(["catalog"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.config.is_empty());
	assert!(!parsed.list);
	assert!(parsed.timeout.is_none());
	assert!(parsed.workers.is_none());
}

#[test]
fn repeated_config_flags_accumulate() {
	let parsed = CliArgs::parse_from(["catalog", "-c", "a.toml", "--config", "b.toml", "-o", "json"]);
	assert_eq!(parsed.config.len(), 2);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn workers_must_be_numeric() {
	assert!(CliArgs::try_parse_from(["catalog", "--workers", "many"]).is_err());
}

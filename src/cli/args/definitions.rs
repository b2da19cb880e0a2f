use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `catalog` binary.
#[derive(Parser, Debug)]
#[command(
	name = "catalog",
	version,
	long_version = long_version(),
	about = "Browse a product catalog backend from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long = "base-url",
		value_name = "URL",
		env = "CATALOG_BASE_URL",
		help = "Backend base URL (default: http://localhost:8080)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_name = "SECONDS",
		help = "Per-request timeout in seconds (default: none)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'w',
		long,
		value_name = "COUNT",
		help = "Number of background fetch workers (default: 4)"
	)]
	pub(crate) workers: Option<usize>,
	#[arg(
		short = 'q',
		long,
		value_name = "TEXT",
		help = "Start with this search text (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Start filtered to this category (default: all)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Start filtered to this brand (default: all)"
	)]
	pub(crate) brand: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long = "list-themes", help = "List the built-in themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration and exit"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long,
		help = "Print matching products without starting the interface"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for the result"
	)]
	pub(crate) output: OutputFormat,
}

use catalog_browser::logging;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

use crate::settings::DEFAULT_BASE_URL;

/// Version banner naming the default backend and where logs are written.
pub(super) fn long_version() -> &'static str {
	let log_file = logging::log_file().map(|path| path.display().to_string());
	Box::leak(version_details(log_file).into_boxed_str())
}

fn version_details(log_file: anyhow::Result<String>) -> String {
	let log_file = log_file.unwrap_or_else(|err| format!("disabled ({err})"));
	[
		format!("catalog {}", env!("CARGO_PKG_VERSION")),
		String::new(),
		format!("default backend: {DEFAULT_BASE_URL}"),
		format!("log file: {log_file}"),
		format!("log filter: ${}", logging::LOG_ENV),
	]
	.join("\n")
}

/// Help colours: green headings, cyan flags, yellow placeholders.
pub(super) fn cli_styles() -> Styles {
	let heading = AnsiColor::Green.on_default().effects(Effects::BOLD);
	Styles::styled()
		.header(heading)
		.usage(heading)
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use catalog_browser::{logging, tui};
use cli::{
	OutputFormat, parse_cli, print_json, print_plain, print_products_json, print_products_plain,
};
use workflow::BrowseWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
		return Ok(());
	}

	// Logging is best effort; the browser works without a log file.
	let _log_guard = match logging::initialize() {
		Ok(guard) => Some(guard),
		Err(err) => {
			eprintln!("catalog: logging disabled: {err:#}");
			None
		}
	};

	let workflow = BrowseWorkflow::from_config(resolved)?;
	if cli.list {
		let products = workflow.list();
		return match cli.output {
			OutputFormat::Plain => {
				print_products_plain(&products);
				Ok(())
			}
			OutputFormat::Json => print_products_json(&products),
		};
	}

	let outcome = workflow.run()?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

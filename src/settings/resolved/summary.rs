use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Backend: {}", config.base_url);
	match config.timeout {
		Some(timeout) => {
			let _ = writeln!(out, "  Timeout: {}s", timeout.as_secs());
		}
		None => {
			let _ = writeln!(out, "  Timeout: none");
		}
	}
	let _ = writeln!(out, "  Workers: {}", config.workers);
	let _ = writeln!(out, "  UI theme: {}", config.theme_name);
	let _ = writeln!(
		out,
		"  Detail pane: {}",
		match config.detail_pane {
			Some(true) => "always",
			Some(false) => "never",
			None => "(auto)",
		}
	);
	let selection = &config.selection;
	if !selection.search.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", selection.search);
	}
	if !selection.category.is_empty() {
		let _ = writeln!(out, "  Initial category: {}", selection.category);
	}
	if !selection.brand.is_empty() {
		let _ = writeln!(out, "  Initial brand: {}", selection.brand);
	}
	out
}

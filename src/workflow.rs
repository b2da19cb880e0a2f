use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_browser::catalog::{CatalogClient, CatalogView, Facet, HttpTransport, Product};
use catalog_browser::tui::{self, BrowseOptions, BrowseOutcome};
use tracing::{debug, info};

use crate::settings::ResolvedConfig;

/// Coordinates building the backend client and running either the
/// interactive browser or a one-shot listing.
pub(crate) struct BrowseWorkflow {
	client: CatalogClient,
	options: BrowseOptions,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			base_url,
			timeout,
			workers,
			theme,
			selection,
			detail_pane,
			..
		} = config;

		let transport = HttpTransport::new(timeout).context("failed to build the HTTP client")?;
		info!(%base_url, ?timeout, workers, "catalog backend configured");
		let client = CatalogClient::new(Arc::new(transport), base_url);

		Ok(Self {
			client,
			options: BrowseOptions {
				selection,
				theme,
				detail_pane,
				workers,
			},
		})
	}

	pub(crate) fn run(self) -> Result<BrowseOutcome> {
		tui::run(self.client, self.options)
	}

	/// Fetch the products for the configured selection on the calling thread.
	///
	/// A failed fetch yields an empty list, as it would in the browser.
	pub(crate) fn list(self) -> Vec<Product> {
		let selection = self.options.selection;
		let mut view = CatalogView::with_selection(selection.clone());
		let request = view.query_products(&selection.search, &selection.category, &selection.brand);
		view.apply(request.execute(&self.client));

		if let Some(err) = view.facet_error(Facet::Products) {
			debug!(error = %err, "listing finished without products");
		}
		view.products().to_vec()
	}
}

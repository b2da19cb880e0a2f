//! Coordination between the view, the fetch workers and the widgets.

use tracing::info;

use super::App;
use crate::catalog::{Facet, FetchCompletion, FetchRequest};

impl App<'_> {
	/// Issue the initial requests, plus a query for a preset selection.
	pub fn mount(&mut self) {
		let mut requests = self.view.load_initial_data();
		if requests.is_empty() {
			return;
		}
		let selection = self.view.selection().clone();
		if !selection.is_unfiltered() {
			requests.push(self.view.query_products(
				&selection.search,
				&selection.category,
				&selection.brand,
			));
		}
		info!(requests = requests.len(), "loading catalog");
		self.submit(requests);
	}

	pub(crate) fn submit(&mut self, requests: impl IntoIterator<Item = FetchRequest>) {
		self.fetch.submit(requests);
	}

	/// Apply every completion that has arrived. Returns `true` if any changed
	/// the view.
	pub(crate) fn pump_fetch_results(&mut self) -> bool {
		let mut changed = false;
		while let Ok(completion) = self.fetch.try_recv() {
			changed |= self.apply_completion(completion);
		}
		changed
	}

	pub(crate) fn apply_completion(&mut self, completion: FetchCompletion) -> bool {
		let facet = completion.payload.facet();
		if !self.view.apply(completion) {
			return false;
		}
		match facet {
			Facet::Products => {
				let len = self.view.products().len();
				self.results.ensure_selection(len);
			}
			Facet::Suggestions => self.clamp_suggestion_index(),
			Facet::Categories | Facet::Brands | Facet::Filters => {}
		}
		true
	}

	fn clamp_suggestion_index(&mut self) {
		let len = self.view.suggestions().len();
		self.suggestion_index = self.suggestion_index.filter(|index| *index < len);
	}
}

use serde::Serialize;

use crate::catalog::Selection;

/// Where a browsing session ended, returned when the UI exits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseOutcome {
	/// Search text and filters in effect at exit.
	pub selection: Selection,
	/// Number of products the results table was showing.
	pub shown: usize,
}

impl BrowseOutcome {
	#[must_use]
	pub fn new(selection: Selection, shown: usize) -> Self {
		Self { selection, shown }
	}
}

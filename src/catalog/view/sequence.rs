use super::request::Facet;

/// Hands out request sequence numbers and remembers, per facet, the newest
/// issued and newest applied one.
#[derive(Debug, Default)]
pub(crate) struct Sequencer {
	next: u64,
	issued: [u64; 5],
	applied: [u64; 5],
}

impl Sequencer {
	pub(crate) fn issue(&mut self, facet: Facet) -> u64 {
		self.next = self.next.saturating_add(1);
		self.issued[facet.index()] = self.next;
		self.next
	}

	/// Issue a number that is immediately considered applied. Used when a facet
	/// is resolved locally and any in-flight request must be ignored.
	pub(crate) fn settle(&mut self, facet: Facet) -> u64 {
		let seq = self.issue(facet);
		self.applied[facet.index()] = seq;
		seq
	}

	/// Record `seq` as applied unless a newer completion already was.
	pub(crate) fn accept(&mut self, facet: Facet, seq: u64) -> bool {
		let applied = &mut self.applied[facet.index()];
		if seq <= *applied {
			return false;
		}
		*applied = seq;
		true
	}

	pub(crate) fn is_outstanding(&self, facet: Facet) -> bool {
		self.issued[facet.index()] > self.applied[facet.index()]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn older_completions_are_rejected_per_facet() {
		let mut seq = Sequencer::default();
		let first = seq.issue(Facet::Products);
		let other = seq.issue(Facet::Suggestions);
		let second = seq.issue(Facet::Products);

		assert!(seq.accept(Facet::Products, second));
		assert!(!seq.accept(Facet::Products, first));
		assert!(seq.accept(Facet::Suggestions, other));
		assert!(!seq.is_outstanding(Facet::Products));
	}

	#[test]
	fn settled_facets_ignore_in_flight_requests() {
		let mut seq = Sequencer::default();
		let in_flight = seq.issue(Facet::Suggestions);
		seq.settle(Facet::Suggestions);
		assert!(!seq.accept(Facet::Suggestions, in_flight));
		assert!(!seq.is_outstanding(Facet::Suggestions));
	}
}

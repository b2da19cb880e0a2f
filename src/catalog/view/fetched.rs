use crate::catalog::api::{FetchError, FetchResult};

/// State of one facet: not yet answered, answered, or failed.
///
/// Failures render as empty data but keep their reason.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
	Pending,
	Loaded(T),
	Failed(FetchError),
}

impl<T> Default for Fetched<T> {
	fn default() -> Self {
		Self::Pending
	}
}

impl<T> From<FetchResult<T>> for Fetched<T> {
	fn from(result: FetchResult<T>) -> Self {
		match result {
			Ok(value) => Self::Loaded(value),
			Err(err) => Self::Failed(err),
		}
	}
}

impl<T> Fetched<T> {
	#[must_use]
	pub fn value(&self) -> Option<&T> {
		match self {
			Self::Loaded(value) => Some(value),
			_ => None,
		}
	}

	#[must_use]
	pub fn error(&self) -> Option<&FetchError> {
		match self {
			Self::Failed(err) => Some(err),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		matches!(self, Self::Pending)
	}
}

impl<T> Fetched<Vec<T>> {
	/// Loaded items, or an empty slice when pending or failed.
	#[must_use]
	pub fn items(&self) -> &[T] {
		self.value().map(Vec::as_slice).unwrap_or(&[])
	}
}

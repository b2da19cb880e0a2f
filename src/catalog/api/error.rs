//! Failure reasons for catalog requests.

use thiserror::Error;

/// Why a request to the catalog backend produced no usable data.
///
/// The view renders every variant as an empty facet; the distinction is kept
/// for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
	/// The request never produced a response (connection refused, timeout, ...).
	#[error("request failed: {0}")]
	Transport(String),

	/// The backend answered with a non-success status code.
	#[error("backend returned HTTP {0}")]
	Status(u16),

	/// The response body was not the expected JSON shape.
	#[error("undecodable response: {0}")]
	Decode(String),

	/// The configured base URL could not be combined with an endpoint path.
	#[error("invalid endpoint url: {0}")]
	Url(String),
}

impl From<reqwest::Error> for FetchError {
	fn from(err: reqwest::Error) -> Self {
		match err.status() {
			Some(status) => Self::Status(status.as_u16()),
			None => Self::Transport(err.to_string()),
		}
	}
}

impl From<serde_json::Error> for FetchError {
	fn from(err: serde_json::Error) -> Self {
		Self::Decode(err.to_string())
	}
}

/// Result type for catalog requests.
pub type FetchResult<T> = Result<T, FetchError>;

//! Wire access to the backend.
//!
//! [`Transport`] is the seam between the catalog client and the network so the
//! view and runtime can be exercised against canned responses.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use tracing::debug;

use super::error::{FetchError, FetchResult};

/// Performs a GET request and returns the response body.
pub trait Transport: Send + Sync {
	/// Fetch `url`, failing on transport errors and non-success statuses.
	fn get(&self, url: &Url) -> FetchResult<String>;
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	/// Build a transport. `timeout` of `None` waits indefinitely.
	pub fn new(timeout: Option<Duration>) -> FetchResult<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("catalog-browser/", env!("CARGO_PKG_VERSION")))
			.build()?;
		Ok(Self { client })
	}
}

impl Transport for HttpTransport {
	fn get(&self, url: &Url) -> FetchResult<String> {
		debug!(%url, "GET");
		let response = self.client.get(url.clone()).send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status.as_u16()));
		}
		Ok(response.text()?)
	}
}

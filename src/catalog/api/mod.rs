//! HTTP access to the catalog backend.

mod client;
mod endpoint;
mod error;
mod transport;

pub use client::CatalogClient;
pub use endpoint::{Endpoint, encode_query_value};
pub use error::{FetchError, FetchResult};
pub use transport::{HttpTransport, Transport};

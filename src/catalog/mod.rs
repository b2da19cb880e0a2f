//! Catalog domain: backend records, HTTP access, view state and fetch workers.

pub mod api;
pub mod filter;
pub mod model;
pub mod runtime;
pub mod view;

pub use api::{CatalogClient, Endpoint, FetchError, FetchResult, HttpTransport, Transport};
pub use filter::post_filter;
pub use model::{BrandCount, CategoryCount, FilterSet, Product, Selection, SuggestionList};
pub use runtime::FetchRuntime;
pub use view::{CatalogView, Facet, FetchCompletion, FetchRequest, Fetched, Payload};

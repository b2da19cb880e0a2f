//! Terminal client for a product catalog backend.
//!
//! [`catalog`] holds the backend records, the HTTP client and the
//! [`CatalogView`](catalog::CatalogView) state machine that turns user input
//! into fetch requests. [`tui`] renders that state with `ratatui` and runs the
//! fetches on background workers.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod tui;

pub use catalog::{CatalogClient, CatalogView, HttpTransport, Product, Selection};
pub use tui::{BrowseOptions, BrowseOutcome, run};

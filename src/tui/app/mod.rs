//! Core application state and behavior for the catalog browser.
//!
//! The [`App`] type wraps a [`CatalogView`](crate::catalog::CatalogView) with
//! the widgets and focus state of the terminal screen. Supporting modules
//! split the implementation into input handling, fetch coordination and
//! rendering.

mod actions;
mod fetch;
mod render;
mod results;
mod state;

pub use state::{App, Focus};

//! Interactive terminal front-end for the catalog.
//!
//! [`run`] owns the terminal for the duration of a session and hands back a
//! [`BrowseOutcome`] describing the filters in effect when it closed.

pub mod app;
pub mod components;
pub mod config;
pub mod input;
pub mod outcome;
pub mod runtime;
pub mod style;

pub use app::{App, Focus};
pub use outcome::BrowseOutcome;
pub use runtime::{BrowseOptions, run};

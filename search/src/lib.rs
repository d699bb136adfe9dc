//! Incremental search coordination over the creature catalog.
//!
//! # Design
//!
//! - The catalog index is fetched once and filtered locally per query.
//! - Every triggered search mints a monotonically increasing generation id;
//!   only the latest generation may touch the visible results or the
//!   loading flag.
//! - A background worker fetches candidates strictly one at a time in
//!   catalog order, appending each successful record immediately so results
//!   render progressively.
//! - Cancellation is cooperative: the worker re-reads the latest generation
//!   id before every fetch pair and again before every state mutation.
//!
//! # Non-blocking API
//!
//! - `set_query()` / `set_catalog()`: trigger a new search generation
//! - `results()`: point-in-time snapshot of records and loading flag
//! - the notify callback fires whenever the visible state changes

mod config;
mod coordinator;
mod query;
mod results;
mod source;

pub use config::SearchConfig;
pub use coordinator::{Generation, SearchCoordinator};
pub use query::SearchQuery;
pub use results::SearchResults;
pub use source::DetailSource;

//! The Vellum engine: history index, document API, and stream adapter.
//!
//! [`Database`] is the composing type: it owns the version store, the
//! sequencer, and the derived [`HistoryIndex`], and exposes both access
//! paths over the one flat namespace: exact-key reads and name-indexed
//! history.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
pub mod index;
pub mod stream;

pub use database::{Database, LatestEntry, Update};
pub use index::HistoryIndex;

//! # Vellum
//!
//! Embeddable versioned document store.
//!
//! Vellum keeps a flat, append-only key→value namespace. Every write mints
//! a new, uniquely and monotonically ordered version key; versions sharing
//! a document name form a history chain; and the whole namespace can be
//! bulk-exported and re-imported as a raw entry stream for replication,
//! backup, or seeding.
//!
//! ## Quick Start
//!
//! ```
//! use vellumdb::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let db = Vellum::ephemeral();
//!
//! // Every write is a new version.
//! let first = db.create("note", "draft")?;
//! let second = db.update(first.as_str(), "final")?;
//!
//! // Old versions stay readable; the chain is ordered oldest-first.
//! assert_eq!(db.read(first.as_str())?.as_str(), Some("draft"));
//! assert_eq!(db.history("note")?, vec![first, second.key.clone()]);
//! assert_eq!(db.latest("note")?.key, second.key);
//!
//! // Bulk transfer works on the raw namespace, names and history aside.
//! let everything = db.source()?;
//! let replica = Vellum::ephemeral();
//! replica.sink(everything)?;
//! replica.rebuild_index()?;
//! assert_eq!(replica.docs()?, vec!["note".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! - **Version keys** are `timestamp-seq-name` strings whose lexicographic
//!   order equals chronological order; the codec lives in [`key`].
//! - **Append-only**: keys are written once, never mutated or deleted.
//! - **One store, two access paths**: exact-key reads and name-indexed
//!   history are views over the same flat namespace, which is what makes
//!   the raw stream round-trip exact.
//! - **Explicit wiring**: backends are injected through the builder; there
//!   is no ambient global store.

#![warn(missing_docs)]

mod database;

pub mod prelude;

// Re-export main entry points
pub use database::{Vellum, VellumBuilder};

// Re-export the working types from the member crates
pub use vellum_core::key;
pub use vellum_core::{Error, Payload, RawEntry, Result, Sequencer, Stamp, VersionKey};
pub use vellum_engine::{Database, LatestEntry, Update};
pub use vellum_storage::{Backend, MemoryBackend, VersionStore};

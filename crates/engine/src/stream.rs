//! Bulk transfer of the raw namespace.
//!
//! The stream adapter moves bare `(key, value)` entries in and out of the
//! version store for backup, restore, and fixture seeding. It deliberately
//! bypasses name validation and the history index: imported data may carry
//! any key shape, and rebuilding the index is the consumer's explicit step
//! ([`Database::rebuild_index`]).

use crate::database::Database;
use tracing::debug;
use vellum_core::{RawEntry, Result};

impl Database {
    /// Ingest raw entries, in any order, straight into the version store.
    ///
    /// Each entry is written append-only; an existing key fails the whole
    /// call with [`vellum_core::Error::DuplicateKey`]. Entries written
    /// before the failure stay; there is no transaction boundary here.
    /// Returns the number of entries written.
    pub fn sink<I>(&self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let mut written = 0usize;
        for entry in entries {
            self.store.put(&entry.key, entry.value)?;
            written += 1;
        }
        debug!(written, "ingested raw entries");
        Ok(written)
    }

    /// Emit every stored entry as raw `(key, value)` pairs.
    ///
    /// Order is backend-defined. Consumers must not assume chronological
    /// or per-name grouping.
    pub fn source(&self) -> Result<Vec<RawEntry>> {
        self.store.scan_all()
    }
}

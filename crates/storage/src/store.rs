//! The append-only version store.
//!
//! A thin, append-only view over an injected backend. This is the single
//! source of truth for the whole namespace; the history index and stream
//! adapter are both views over it.

use crate::backend::Backend;
use std::sync::Arc;
use tracing::trace;
use vellum_core::{Error, Payload, RawEntry, Result};

/// The flat key→value map holding every version.
///
/// Keys are written exactly once and never mutated or deleted. The
/// duplicate-key check is a safety net: sequencer-minted keys are unique by
/// construction, so hitting it signals a caller bug rather than an expected
/// race.
#[derive(Clone)]
pub struct VersionStore {
    backend: Arc<dyn Backend>,
}

impl VersionStore {
    /// Build a version store over the given backend.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Write a value under a fresh key.
    ///
    /// Fails with [`Error::DuplicateKey`] when the key already holds a
    /// value; the stored value is left untouched.
    pub fn put(&self, key: &str, value: Payload) -> Result<()> {
        if self.backend.put_if_absent(key, value)? {
            trace!(key, "stored entry");
            Ok(())
        } else {
            Err(Error::DuplicateKey(key.to_string()))
        }
    }

    /// Fetch the value stored under an exact key.
    ///
    /// Fails with [`Error::NotFound`] when the key is absent.
    pub fn get(&self, key: &str) -> Result<Payload> {
        self.backend
            .get(key)?
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    /// Every stored entry, in backend-defined order.
    pub fn scan_all(&self) -> Result<Vec<RawEntry>> {
        self.backend.scan_all()
    }
}

impl std::fmt::Debug for VersionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionStore").finish_non_exhaustive()
    }
}

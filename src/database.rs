//! Main entry point for Vellum.
//!
//! This module provides the [`Vellum`] handle, the primary entry point for
//! all store operations, and the [`VellumBuilder`] for configuration.

use std::sync::Arc;
use vellum_core::{Payload, RawEntry, Result, VersionKey};
use vellum_engine::{Database, LatestEntry, Update};
use vellum_storage::{Backend, MemoryBackend};

/// A handle to a Vellum store.
///
/// Cheap to clone and safe to share across threads; every clone talks to
/// the same underlying store. Construct one per deployment with
/// [`Vellum::ephemeral`] or [`Vellum::builder`]; there is no global
/// instance.
///
/// # Example
///
/// ```
/// use vellumdb::prelude::*;
///
/// # fn main() -> Result<()> {
/// let db = Vellum::ephemeral();
///
/// let key = db.create("greeting", "hello")?;
/// assert_eq!(db.read(key.as_str())?.as_str(), Some("hello"));
///
/// let update = db.update(key.as_str(), "hello again")?;
/// assert_eq!(db.history("greeting")?, vec![key, update.key]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Vellum {
    inner: Arc<Database>,
}

impl Vellum {
    /// Open a store over the default in-memory backend.
    ///
    /// All data lives exactly as long as the last handle; dropping it is
    /// the only teardown. Use the builder to inject a different backend.
    pub fn ephemeral() -> Self {
        Self {
            inner: Arc::new(Database::new(Arc::new(MemoryBackend::new()))),
        }
    }

    /// Create a builder for store configuration.
    pub fn builder() -> VellumBuilder {
        VellumBuilder::new()
    }

    /// Create the first version of a document. See [`Database::create`].
    pub fn create(&self, name: &str, value: impl Into<Payload>) -> Result<VersionKey> {
        self.inner.create(name, value)
    }

    /// Read the payload stored under an exact key. See [`Database::read`].
    pub fn read(&self, key: &str) -> Result<Payload> {
        self.inner.read(key)
    }

    /// Write a new version superseding `prev_key`. See [`Database::update`].
    pub fn update(&self, prev_key: &str, value: impl Into<Payload>) -> Result<Update> {
        self.inner.update(prev_key, value)
    }

    /// The version history of a document, oldest first.
    pub fn history(&self, name: &str) -> Result<Vec<VersionKey>> {
        self.inner.history(name)
    }

    /// The newest version of a document, with its payload.
    pub fn latest(&self, name: &str) -> Result<LatestEntry> {
        self.inner.latest(name)
    }

    /// All distinct document names with at least one version, sorted.
    pub fn docs(&self) -> Result<Vec<String>> {
        self.inner.docs()
    }

    /// Bulk-ingest raw entries, bypassing names and history. See
    /// [`Database::sink`].
    pub fn sink<I>(&self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = RawEntry>,
    {
        self.inner.sink(entries)
    }

    /// Emit the whole raw namespace as entries. See [`Database::source`].
    pub fn source(&self) -> Result<Vec<RawEntry>> {
        self.inner.source()
    }

    /// Rebuild the history index from a full scan, the explicit step
    /// after seeding through [`Vellum::sink`].
    pub fn rebuild_index(&self) -> Result<()> {
        self.inner.rebuild_index()
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vellumdb::prelude::*;
///
/// # fn main() -> Result<()> {
/// // Inject a backend explicitly and warm the index at open, e.g. when
/// // the backend was seeded by an earlier import.
/// let backend = Arc::new(MemoryBackend::new());
/// let db = Vellum::builder().backend(backend).warm_index().open()?;
/// assert!(db.docs()?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct VellumBuilder {
    backend: Option<Arc<dyn Backend>>,
    warm_index: bool,
}

impl VellumBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given backend instead of the default in-memory one.
    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Rebuild the history index eagerly at open instead of on the first
    /// name-indexed read.
    pub fn warm_index(mut self) -> Self {
        self.warm_index = true;
        self
    }

    /// Open the store.
    pub fn open(self) -> Result<Vellum> {
        let backend = self
            .backend
            .unwrap_or_else(|| Arc::new(MemoryBackend::new()));
        let db = Vellum {
            inner: Arc::new(Database::new(backend)),
        };
        if self.warm_index {
            db.rebuild_index()?;
        }
        Ok(db)
    }
}

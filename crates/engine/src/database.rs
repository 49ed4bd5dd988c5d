//! The document API: create, read, update, history, latest, docs.
//!
//! `Database` composes the sequencer, key codec, version store, and history
//! index into the versioned-document surface. Every write mints a fresh
//! key; nothing is ever mutated in place.

use crate::index::HistoryIndex;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;
use vellum_core::key;
use vellum_core::{Error, Payload, Result, Sequencer, VersionKey};
use vellum_storage::{Backend, VersionStore};

/// Receipt for a successful `update`: the new key and the one it
/// supersedes.
///
/// `prev` is communication to the caller only; no supersession relation is
/// persisted; the authoritative ordering is derived from the keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// The freshly minted version key
    pub key: VersionKey,
    /// The key the new version supersedes
    pub prev: VersionKey,
}

/// The newest version of a document, with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestEntry {
    /// Key of the newest version
    pub key: VersionKey,
    /// Its stored payload
    pub value: Payload,
}

/// A versioned document store over an injected backend.
///
/// Shared-handle friendly: all methods take `&self`, and the store is
/// usually held in an `Arc` and cloned across threads. There is no global
/// instance; construct one per deployment and pass it around explicitly.
pub struct Database {
    pub(crate) store: VersionStore,
    index: HistoryIndex,
    sequencer: Sequencer,
    /// Orders document writes against scan-and-rebuild passes: writers hold
    /// it shared across put+record, rebuilds hold it exclusively, so a
    /// rebuild never overwrites a chain with a scan that missed an
    /// in-flight write.
    rebuild_lock: RwLock<()>,
}

impl Database {
    /// Open a database over the given backend.
    ///
    /// The history index starts cold and is warmed by the first
    /// name-indexed read, or eagerly via [`Database::rebuild_index`].
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            store: VersionStore::new(backend),
            index: HistoryIndex::new(),
            sequencer: Sequencer::new(),
            rebuild_lock: RwLock::new(()),
        }
    }

    /// Create the first version of a document.
    ///
    /// Fails with [`Error::InvalidName`] when the name is itself a
    /// well-formed version key (the flat namespace carries no name/key tag,
    /// so such a name would be unresolvable), is empty, or contains the
    /// segment delimiter. Validation happens before any write.
    pub fn create(&self, name: &str, value: impl Into<Payload>) -> Result<VersionKey> {
        if key::validate(name) {
            return Err(Error::InvalidName {
                name: name.to_string(),
                reason: "name is itself a well-formed version key".to_string(),
            });
        }
        let stamp = self.sequencer.next();
        let minted = VersionKey::mint(stamp, name)?;
        let _shared = self.rebuild_lock.read();
        self.store.put(minted.as_str(), value.into())?;
        self.index.record_version(name, minted.clone());
        debug!(name, key = %minted, "created document");
        Ok(minted)
    }

    /// Read the payload stored under an exact key.
    ///
    /// Pure delegation to the version store: the key's name needs no
    /// history entries, so raw imported entries are readable too.
    pub fn read(&self, key: &str) -> Result<Payload> {
        self.store.get(key)
    }

    /// Write a new version superseding `prev_key`.
    ///
    /// Fails with [`Error::MalformedKey`] when `prev_key` is not
    /// well-formed and [`Error::NotFound`] when it does not exist. There is
    /// no check that `prev_key` is still the newest version of its name:
    /// concurrent updates from stale reads all succeed, and the sequencer's
    /// total order alone decides which one is `latest`.
    pub fn update(&self, prev_key: &str, value: impl Into<Payload>) -> Result<Update> {
        let prev = VersionKey::parse(prev_key)?;
        // Existence check before minting; the payload itself is not needed.
        self.store.get(prev_key)?;

        let stamp = self.sequencer.next();
        let minted = VersionKey::mint(stamp, prev.name())?;
        let _shared = self.rebuild_lock.read();
        self.store.put(minted.as_str(), value.into())?;
        self.index.record_version(prev.name(), minted.clone());
        debug!(key = %minted, prev = %prev, "updated document");
        Ok(Update { key: minted, prev })
    }

    /// The full version history of a document, oldest first.
    ///
    /// Fails with [`Error::NotFound`] for unknown names.
    pub fn history(&self, name: &str) -> Result<Vec<VersionKey>> {
        self.ensure_index()?;
        self.index.history_of(name)
    }

    /// The newest version of a document, with its payload.
    pub fn latest(&self, name: &str) -> Result<LatestEntry> {
        self.ensure_index()?;
        let key = self.index.latest_of(name)?;
        let value = self.store.get(key.as_str())?;
        Ok(LatestEntry { key, value })
    }

    /// All distinct document names with at least one version, sorted.
    pub fn docs(&self) -> Result<Vec<String>> {
        self.ensure_index()?;
        Ok(self.index.names())
    }

    /// Rebuild the history index from a full scan of the store.
    ///
    /// The explicit recovery step after a raw import through the stream
    /// sink, which bypasses the index by design.
    pub fn rebuild_index(&self) -> Result<()> {
        let _exclusive = self.rebuild_lock.write();
        self.rebuild_index_locked()
    }

    /// Warm the index on first use, double-checked under the rebuild lock.
    fn ensure_index(&self) -> Result<()> {
        if self.index.is_warmed() {
            return Ok(());
        }
        let _exclusive = self.rebuild_lock.write();
        if self.index.is_warmed() {
            return Ok(());
        }
        self.rebuild_index_locked()
    }

    fn rebuild_index_locked(&self) -> Result<()> {
        let entries = self.store.scan_all()?;
        debug!(entries = entries.len(), "rebuilding history index");
        self.index.rebuild_from(entries);
        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("index_warmed", &self.index.is_warmed())
            .finish_non_exhaustive()
    }
}

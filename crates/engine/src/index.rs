//! The history index: document name → ordered version-key chain.
//!
//! A derived structure over the version store, never authoritative on its
//! own: it can always be rebuilt by scanning the store, parsing each key's
//! name segment, and sorting each group. Key order is chronological order
//! by construction, so the sort *is* the chain order.

use dashmap::DashMap;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicBool, Ordering};
use vellum_core::{Error, RawEntry, Result, VersionKey};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Maps each document name to its version keys, oldest first.
///
/// Appends to different names never contend; appends to the same name
/// serialize on the shard entry lock, preserving chain order.
#[derive(Debug, Default)]
pub struct HistoryIndex {
    chains: DashMap<String, Vec<VersionKey>, FxBuildHasher>,
    warmed: AtomicBool,
}

impl HistoryIndex {
    /// Create an empty, cold index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the index has been populated from the store at least once.
    ///
    /// A cold index must be rebuilt by a scan before name-indexed reads can
    /// be answered; incremental appends work either way.
    pub fn is_warmed(&self) -> bool {
        self.warmed.load(Ordering::Acquire)
    }

    /// Append a freshly minted key to its name's chain. Amortized O(1).
    pub fn record_version(&self, name: &str, key: VersionKey) {
        let mut chain = self.chains.entry(name.to_string()).or_default();
        // A rebuild that raced this write may have recorded the key already,
        // or recorded a later one first. Repair in place so the chain stays
        // sorted and duplicate-free.
        let out_of_order = matches!(chain.last(), Some(last) if *last >= key);
        if out_of_order {
            let at = chain.partition_point(|existing| *existing < key);
            if chain.get(at) != Some(&key) {
                chain.insert(at, key);
            }
        } else {
            chain.push(key);
        }
    }

    /// The full chain for a name, oldest first.
    ///
    /// Fails with [`Error::NotFound`] when the name has no recorded
    /// versions.
    pub fn history_of(&self, name: &str) -> Result<Vec<VersionKey>> {
        self.chains
            .get(name)
            .filter(|chain| !chain.is_empty())
            .map(|chain| chain.value().clone())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// The newest version key recorded under a name.
    pub fn latest_of(&self, name: &str) -> Result<VersionKey> {
        self.chains
            .get(name)
            .and_then(|chain| chain.last().cloned())
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// All names with at least one version, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .chains
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Replace the whole index from a raw scan of the store.
    ///
    /// Entries whose keys do not conform to the codec (legacy keys seeded
    /// through the raw stream) are skipped; they are readable by exact key
    /// but belong to no history chain. Marks the index warmed.
    pub fn rebuild_from(&self, entries: Vec<RawEntry>) {
        let mut groups: FxHashMap<String, Vec<VersionKey>> = FxHashMap::default();
        for entry in entries {
            if let Ok(key) = VersionKey::parse(&entry.key) {
                groups.entry(key.name().to_string()).or_default().push(key);
            }
        }

        self.chains.clear();
        for (name, mut chain) in groups {
            chain.sort();
            self.chains.insert(name, chain);
        }
        self.warmed.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_core::clock::Stamp;

    fn key(ms: u64, seq: u64, name: &str) -> VersionKey {
        VersionKey::mint(Stamp { wall_ms: ms, seq }, name).unwrap()
    }

    #[test]
    fn record_and_history() {
        let index = HistoryIndex::new();
        let k1 = key(1, 0, "doc");
        let k2 = key(2, 0, "doc");
        index.record_version("doc", k1.clone());
        index.record_version("doc", k2.clone());

        assert_eq!(index.history_of("doc").unwrap(), vec![k1, k2.clone()]);
        assert_eq!(index.latest_of("doc").unwrap(), k2);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let index = HistoryIndex::new();
        assert!(index.history_of("ghost").unwrap_err().is_not_found());
        assert!(index.latest_of("ghost").unwrap_err().is_not_found());
    }

    #[test]
    fn names_are_distinct_and_sorted() {
        let index = HistoryIndex::new();
        index.record_version("dit", key(1, 0, "dit"));
        index.record_version("dat", key(2, 0, "dat"));
        index.record_version("dit", key(3, 0, "dit"));

        assert_eq!(index.names(), vec!["dat".to_string(), "dit".to_string()]);
    }

    #[test]
    fn out_of_order_record_is_repaired() {
        let index = HistoryIndex::new();
        let k1 = key(1, 0, "doc");
        let k2 = key(2, 0, "doc");
        let k3 = key(3, 0, "doc");

        index.record_version("doc", k1.clone());
        index.record_version("doc", k3.clone());
        index.record_version("doc", k2.clone());

        assert_eq!(index.history_of("doc").unwrap(), vec![k1, k2, k3]);
    }

    #[test]
    fn duplicate_record_is_ignored() {
        let index = HistoryIndex::new();
        let k = key(1, 0, "doc");
        index.record_version("doc", k.clone());
        index.record_version("doc", k.clone());

        assert_eq!(index.history_of("doc").unwrap(), vec![k]);
    }

    #[test]
    fn rebuild_groups_sorts_and_skips_legacy_keys() {
        let index = HistoryIndex::new();
        assert!(!index.is_warmed());

        let k1 = key(1, 0, "dit");
        let k2 = key(2, 0, "dit");
        let k3 = key(1, 5, "dat");
        let entries = vec![
            // Scan order is backend-defined; feed newest first.
            RawEntry::new(k2.as_str(), "b"),
            RawEntry::new(k1.as_str(), "a"),
            RawEntry::new(k3.as_str(), "c"),
            // Legacy key shape: readable, but never indexed.
            RawEntry::new("1k178m1unww-00000000000-arf", "barf"),
        ];
        index.rebuild_from(entries);

        assert!(index.is_warmed());
        assert_eq!(index.history_of("dit").unwrap(), vec![k1, k2]);
        assert_eq!(index.history_of("dat").unwrap(), vec![k3]);
        assert_eq!(index.names(), vec!["dat".to_string(), "dit".to_string()]);
        assert!(index.history_of("arf").unwrap_err().is_not_found());
    }

    #[test]
    fn rebuild_replaces_previous_state() {
        let index = HistoryIndex::new();
        index.record_version("stale", key(1, 0, "stale"));

        index.rebuild_from(vec![RawEntry::new(key(2, 0, "fresh").as_str(), "v")]);

        assert!(index.history_of("stale").unwrap_err().is_not_found());
        assert_eq!(index.history_of("fresh").unwrap().len(), 1);
    }

    #[test]
    fn concurrent_appends_to_distinct_names() {
        use std::sync::Arc;
        use std::thread;

        let index = Arc::new(HistoryIndex::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let index = Arc::clone(&index);
                thread::spawn(move || {
                    let name = format!("doc{t}");
                    for i in 0..100 {
                        index.record_version(&name, key(i, t, &name));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(index.names().len(), 8);
        for t in 0..8u64 {
            let chain = index.history_of(&format!("doc{t}")).unwrap();
            assert_eq!(chain.len(), 100);
            assert!(chain.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

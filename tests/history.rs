//! Version chains: update, history, latest.

use vellumdb::prelude::*;
use vellumdb::key;

#[test]
fn update_entry_and_read_both_versions() {
    let db = Vellum::ephemeral();

    let first = db.create("some", "stuff").unwrap();
    let update = db.update(first.as_str(), "things").unwrap();

    assert!(key::validate(update.key.as_str()));
    assert!(key::validate(update.prev.as_str()));
    assert_eq!(update.prev, first);
    assert_ne!(update.key, first);

    // The older version is still readable with its original value.
    assert_eq!(db.read(update.prev.as_str()).unwrap().as_str(), Some("stuff"));
    assert_eq!(db.read(update.key.as_str()).unwrap().as_str(), Some("things"));

    let versions = db.history("some").unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0], update.prev);
    assert_eq!(versions[1], update.key);
}

#[test]
fn latest_flips_after_update() {
    let db = Vellum::ephemeral();

    let first = db.create("some", "stuff").unwrap();
    let latest = db.latest("some").unwrap();
    assert_eq!(latest.key, first);
    assert_eq!(latest.value.as_str(), Some("stuff"));

    let update = db.update(first.as_str(), "things").unwrap();
    let latest = db.latest("some").unwrap();
    assert_eq!(latest.key, update.key);
    assert_eq!(latest.value.as_str(), Some("things"));
}

#[test]
fn history_grows_one_key_per_write() {
    let db = Vellum::ephemeral();

    let mut tip = db.create("doc", "v0").unwrap();
    for i in 1..=9 {
        tip = db.update(tip.as_str(), format!("v{i}")).unwrap().key;
    }

    let versions = db.history("doc").unwrap();
    assert_eq!(versions.len(), 10);
    assert!(versions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(versions.last(), Some(&db.latest("doc").unwrap().key));
}

#[test]
fn chains_of_different_names_are_independent() {
    let db = Vellum::ephemeral();

    let a = db.create("alpha", "a1").unwrap();
    let b = db.create("beta", "b1").unwrap();
    db.update(a.as_str(), "a2").unwrap();

    assert_eq!(db.history("alpha").unwrap().len(), 2);
    assert_eq!(db.history("beta").unwrap(), vec![b]);
}

#[test]
fn update_requires_well_formed_existing_prev() {
    let db = Vellum::ephemeral();
    db.create("doc", "v").unwrap();

    // Structurally broken prev key: rejected before any lookup.
    assert!(db.update("nonsense", "v2").unwrap_err().is_malformed_key());

    // Well-formed but absent: not found.
    let err = db.update("000000001-000000000-doc", "v2").unwrap_err();
    assert!(err.is_not_found());

    // Neither attempt left a trace in the chain.
    assert_eq!(db.history("doc").unwrap().len(), 1);
}

#[test]
fn stale_prev_updates_diverge_and_sequence_order_wins() {
    let db = Vellum::ephemeral();
    let root = db.create("doc", "base").unwrap();

    // Two updates both superseding the same stale version: no rejection.
    let left = db.update(root.as_str(), "left").unwrap();
    let right = db.update(root.as_str(), "right").unwrap();
    assert_eq!(left.prev, root);
    assert_eq!(right.prev, root);

    // The chain holds all three, and the newest mint is latest.
    assert_eq!(db.history("doc").unwrap(), vec![root, left.key, right.key.clone()]);
    let latest = db.latest("doc").unwrap();
    assert_eq!(latest.key, right.key);
    assert_eq!(latest.value.as_str(), Some("right"));
}

#[test]
fn history_of_unknown_name_is_not_found() {
    let db = Vellum::ephemeral();
    assert!(db.history("ghost").unwrap_err().is_not_found());
    assert!(db.latest("ghost").unwrap_err().is_not_found());
}

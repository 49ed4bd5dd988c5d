//! Create/read basics over a fresh store.

use vellumdb::prelude::*;
use vellumdb::key;

// ============================================================================
// Create and read new entries
// ============================================================================

#[test]
fn create_and_read_new_entries() {
    let db = Vellum::ephemeral();

    let first = db.create("dit", "deze").unwrap();
    assert!(key::validate(first.as_str()));

    let second = db.create("dat", "die").unwrap();
    assert!(key::validate(second.as_str()));

    assert_eq!(db.read(first.as_str()).unwrap().as_str(), Some("deze"));
    assert_eq!(db.read(second.as_str()).unwrap().as_str(), Some("die"));

    let docs = db.docs().unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs.contains(&"dit".to_string()));
    assert!(docs.contains(&"dat".to_string()));
}

#[test]
fn create_returns_strictly_increasing_keys() {
    let db = Vellum::ephemeral();
    let keys: Vec<VersionKey> = (0..50)
        .map(|i| db.create("doc", format!("v{i}")).unwrap())
        .collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));

    // Also across different names: the stamp prefix dominates.
    let a = db.create("aaa", "x").unwrap();
    let z = db.create("zzz", "y").unwrap();
    assert!(a < z);
}

#[test]
fn docs_counts_names_not_versions() {
    let db = Vellum::ephemeral();
    let k = db.create("some", "v1").unwrap();
    db.update(k.as_str(), "v2").unwrap();
    db.update(k.as_str(), "v3").unwrap();
    db.create("other", "w").unwrap();

    assert_eq!(db.docs().unwrap(), vec!["other".to_string(), "some".to_string()]);
}

// ============================================================================
// Name validation
// ============================================================================

#[test]
fn name_cannot_be_a_well_formed_key() {
    let db = Vellum::ephemeral();

    let err = db.create("qds74e412-000000000-entry", "stuff").unwrap_err();
    assert!(err.is_invalid_name());

    // Nothing was written.
    assert!(db.docs().unwrap().is_empty());
    assert!(db.source().unwrap().is_empty());
}

#[test]
fn name_cannot_be_empty_or_carry_the_delimiter() {
    let db = Vellum::ephemeral();
    assert!(db.create("", "v").unwrap_err().is_invalid_name());
    assert!(db.create("two-part", "v").unwrap_err().is_invalid_name());
}

// ============================================================================
// Lookups
// ============================================================================

#[test]
fn read_unknown_key_is_not_found() {
    let db = Vellum::ephemeral();
    let err = db.read("qds74e412-000000000-entry").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn payloads_are_opaque_bytes() {
    let db = Vellum::ephemeral();

    let doc = serde_json::json!({"title": "notes", "tags": ["a", "b"]});
    let bytes = serde_json::to_vec(&doc).unwrap();
    let key = db.create("profile", bytes.clone()).unwrap();

    let stored = db.read(key.as_str()).unwrap();
    assert_eq!(stored.as_bytes(), bytes.as_slice());

    let parsed: serde_json::Value = serde_json::from_slice(stored.as_bytes()).unwrap();
    assert_eq!(parsed, doc);
}

//! The storage backend contract.
//!
//! Everything above this trait is written against these three primitives;
//! persistence selection (in-memory, filesystem, anything else) lives
//! behind it and is injected explicitly. There is no ambient default store.

use vellum_core::{Payload, RawEntry, Result};

/// Primitive key/value storage provided by a backend collaborator.
///
/// Implementations must be safe to share across threads. Backend I/O
/// failures are surfaced unchanged through [`vellum_core::Error`]; the core
/// never retries.
pub trait Backend: Send + Sync {
    /// Store `value` under `key` if, and only if, the key is absent.
    ///
    /// Returns `false` when the key already holds a value, leaving the
    /// stored value untouched. The check-and-insert must be atomic per key:
    /// of two racing writers exactly one sees `true`.
    fn put_if_absent(&self, key: &str, value: Payload) -> Result<bool>;

    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Payload>>;

    /// Produce every stored entry. Order is backend-defined; callers that
    /// need chronological order must sort explicitly.
    fn scan_all(&self) -> Result<Vec<RawEntry>>;
}

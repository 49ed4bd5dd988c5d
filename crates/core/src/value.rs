//! Opaque payloads and raw entries.
//!
//! The store never inspects payloads: a [`Payload`] is a bag of bytes chosen
//! by the caller. [`RawEntry`] is the `(key, value)` pair as seen by the
//! bulk stream path, with no name or history semantics attached.

use serde::{Deserialize, Serialize};

/// An opaque value payload.
///
/// Payloads are stored and returned verbatim. Conversions exist for the
/// common sources so call sites can pass string or byte literals directly:
///
/// ```
/// use vellum_core::Payload;
///
/// let p: Payload = "deze".into();
/// assert_eq!(p.as_bytes(), b"deze");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Wrap raw bytes as a payload.
    pub fn new(bytes: Vec<u8>) -> Self {
        Payload(bytes)
    }

    /// Borrow the payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the payload, returning the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// View the payload as UTF-8, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload(bytes.to_vec())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload(s.into_bytes())
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload(s.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A bare `(key, value)` pair from the raw namespace.
///
/// The key is a plain string, not a parsed version key: the stream path
/// must carry any key shape the namespace holds, including legacy keys
/// that predate the current codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// The raw key, stored verbatim
    pub key: String,
    /// The opaque value payload
    pub value: Payload,
}

impl RawEntry {
    /// Build an entry from any key/value sources.
    pub fn new(key: impl Into<String>, value: impl Into<Payload>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

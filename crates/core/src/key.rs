//! Version key codec.
//!
//! A version key is three segments joined by `-`:
//!
//! ```text
//! qds74e412-000000000-entry
//! \_______/ \_______/ \___/
//!  timestamp    seq    name
//! ```
//!
//! The timestamp is wall-clock milliseconds in base36, zero-padded to nine
//! characters; the seq segment is the same-tick disambiguator, also nine
//! base36 characters. Zero-padding makes lexicographic key order equal
//! chronological order. The name segment is the document slug and may not
//! contain the delimiter, so a well-formed key always splits into exactly
//! three segments and parses unambiguously.
//!
//! The codec is pure: [`validate`] and [`parse`] never touch storage, and a
//! syntactically valid key need not exist in any store.

use crate::clock::Stamp;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Segment delimiter within a key.
pub const DELIMITER: char = '-';

/// Fixed width of the base36 timestamp segment.
pub const TIMESTAMP_WIDTH: usize = 9;

/// Fixed width of the base36 seq segment.
pub const SEQ_WIDTH: usize = 9;

const RADIX: u32 = 36;

/// A well-formed version key.
///
/// Construction is only possible through [`VersionKey::mint`] and
/// [`VersionKey::parse`], so holding a `VersionKey` guarantees the string
/// decomposes into its three segments. Ordering is plain string ordering,
/// which by construction is chronological for minted keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionKey(String);

/// The decoded segments of a version key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    /// Wall-clock milliseconds since the Unix epoch
    pub timestamp_ms: u64,
    /// Same-tick disambiguator
    pub seq: u64,
    /// Document name slug
    pub name: String,
}

impl VersionKey {
    /// Construct a key from a stamp and a document name.
    ///
    /// Fails with [`Error::InvalidName`] when the name is empty or contains
    /// the delimiter and could therefore not be parsed back out of the key.
    pub fn mint(stamp: Stamp, name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidName {
                name: name.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        if name.contains(DELIMITER) {
            return Err(Error::InvalidName {
                name: name.to_string(),
                reason: format!("name contains segment delimiter '{}'", DELIMITER),
            });
        }
        let ts = encode_base36(stamp.wall_ms, TIMESTAMP_WIDTH)?;
        let seq = encode_base36(stamp.seq, SEQ_WIDTH)?;
        Ok(VersionKey(format!("{ts}{DELIMITER}{seq}{DELIMITER}{name}")))
    }

    /// Accept a candidate string as a version key.
    ///
    /// Fails with [`Error::MalformedKey`] when [`validate`] is false.
    pub fn parse(candidate: &str) -> Result<Self> {
        if !validate(candidate) {
            return Err(Error::MalformedKey(candidate.to_string()));
        }
        Ok(VersionKey(candidate.to_string()))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name segment of the key.
    pub fn name(&self) -> &str {
        // Both stamp segments are fixed-width, so the name starts at a
        // fixed offset past the two delimiters.
        &self.0[TIMESTAMP_WIDTH + SEQ_WIDTH + 2..]
    }

    /// Consume the key, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<VersionKey> for String {
    fn from(key: VersionKey) -> Self {
        key.0
    }
}

/// Check whether a string is a well-formed version key.
///
/// Purely syntactic: exactly three segments, fixed-width base36 stamp
/// segments, non-empty name. No store access.
pub fn validate(candidate: &str) -> bool {
    let mut segments = candidate.split(DELIMITER);
    let (ts, seq, name) = match (segments.next(), segments.next(), segments.next()) {
        (Some(ts), Some(seq), Some(name)) => (ts, seq, name),
        _ => return false,
    };
    if segments.next().is_some() {
        // A fourth segment means the name would carry the delimiter.
        return false;
    }
    is_base36_segment(ts, TIMESTAMP_WIDTH) && is_base36_segment(seq, SEQ_WIDTH) && !name.is_empty()
}

/// Decode a candidate key into its segments.
///
/// Fails with [`Error::MalformedKey`] when [`validate`] is false.
pub fn parse(candidate: &str) -> Result<ParsedKey> {
    if !validate(candidate) {
        return Err(Error::MalformedKey(candidate.to_string()));
    }
    let ts = &candidate[..TIMESTAMP_WIDTH];
    let seq = &candidate[TIMESTAMP_WIDTH + 1..TIMESTAMP_WIDTH + 1 + SEQ_WIDTH];
    let name = &candidate[TIMESTAMP_WIDTH + SEQ_WIDTH + 2..];

    // Nine base36 digits always fit in u64, and validate() vetted the
    // character set, so the radix conversion cannot fail.
    let timestamp_ms = u64::from_str_radix(ts, RADIX)
        .map_err(|e| Error::Internal(format!("validated segment failed to decode: {e}")))?;
    let seq = u64::from_str_radix(seq, RADIX)
        .map_err(|e| Error::Internal(format!("validated segment failed to decode: {e}")))?;

    Ok(ParsedKey {
        timestamp_ms,
        seq,
        name: name.to_string(),
    })
}

fn is_base36_segment(segment: &str, width: usize) -> bool {
    segment.len() == width
        && segment
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}

fn encode_base36(mut value: u64, width: usize) -> Result<String> {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut buf = vec![b'0'; width];
    let mut pos = width;
    while value > 0 {
        if pos == 0 {
            return Err(Error::Internal(format!(
                "value {value} does not fit in a {width}-character key segment"
            )));
        }
        pos -= 1;
        buf[pos] = DIGITS[(value % u64::from(RADIX)) as usize];
        value /= u64::from(RADIX);
    }
    // buf is ASCII by construction.
    String::from_utf8(buf).map_err(|e| Error::Internal(e.to_string()))
}

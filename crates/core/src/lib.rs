//! Core types for the Vellum versioned document store.
//!
//! This crate holds the leaf pieces everything else is built from:
//! - [`error`]: the canonical [`Error`] type and [`Result`] alias
//! - [`key`]: the version key codec (mint, validate, parse)
//! - [`clock`]: the monotonic [`Sequencer`] producing collision-free stamps
//! - [`value`]: opaque [`Payload`]s and raw [`RawEntry`] pairs

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod error;
pub mod key;
pub mod value;

pub use clock::{Sequencer, Stamp};
pub use error::{Error, Result};
pub use key::{ParsedKey, VersionKey};
pub use value::{Payload, RawEntry};

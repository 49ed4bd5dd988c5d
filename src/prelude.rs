//! Convenient imports for Vellum.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```
//! use vellumdb::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let db = Vellum::ephemeral();
//! db.create("key", "value")?;
//! # Ok(())
//! # }
//! ```

// Main entry point
pub use crate::database::{Vellum, VellumBuilder};

// Error handling
pub use crate::{Error, Result};

// Core types
pub use crate::{Payload, RawEntry, VersionKey};

// Document API receipts
pub use crate::{LatestEntry, Update};

// Backend contract and the default backend
pub use crate::{Backend, MemoryBackend};

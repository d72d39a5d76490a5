//! Storage layer
//!
//! Persists resume state into a key-value medium.
//!
//! ## Architecture
//!
//! - **backend**: the media (`FileStorage` on disk, `MemoryStorage` in memory)
//! - **persistence**: serializes the `{ resumeData, selectedTemplate }` pair
//!   under a fixed key and restores it at startup

pub mod backend;
pub mod error;
pub mod persistence;

pub use backend::{validate_key, FileStorage, KeyValueStorage, MemoryStorage};
pub use error::{Access, StorageError, StorageResult};
pub use persistence::{Persistence, DEFAULT_STORAGE_KEY};

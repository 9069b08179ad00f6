//! Storage layer
//!
//! The whole book collection lives in one JSON file ("the slot"). Every
//! mutation rewrites it wholesale; there is no incremental persistence.
//! Writes go through a temp-file-and-rename sequence so the slot is never
//! left half-written.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::ShelfPersistence;

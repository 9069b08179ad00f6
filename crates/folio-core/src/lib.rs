//! Folio Core Library
//!
//! This crate provides the core functionality for Folio, a local-first
//! bookshelf for drafting and organizing manuscripts.
//!
//! # Architecture
//!
//! The in-memory collection is the source of truth. Every mutation
//! rewrites a single JSON slot on disk; views (selection, filtering,
//! sorting, tag listing) are computed from the live collection on read.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = BookStore::open()?;
//!
//! // Add a book
//! let book = store.create_book(BookPreset {
//!     title: Some("Field Notes".into()),
//!     ..Default::default()
//! });
//!
//! // Query the filtered view
//! store.set_keyword_filter("notes");
//! let visible = store.filtered_books();
//! ```
//!
//! # Modules
//!
//! - `store`: the book store (main entry point)
//! - `models`: Book record, status enum, preset/patch field sets
//! - `filter`: typed filter state and the library presets
//! - `seed`: starter books for first runs
//! - `storage`: JSON slot persistence
//! - `config`: application configuration
//! - `time`: human-oriented timestamp formatting

pub mod config;
pub mod filter;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;
pub mod time;

pub use config::Config;
pub use filter::{BookFilters, Library, LibraryFilter, StatusFilter, TagFilter, LIBRARIES};
pub use models::{Book, BookPatch, BookPreset, BookStatus};
pub use seed::seed_books;
pub use storage::{ShelfPersistence, StorageError, StorageResult};
pub use store::BookStore;
pub use time::{format_date_label, format_relative_time};

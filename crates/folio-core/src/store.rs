//! The book store
//!
//! `BookStore` owns the authoritative in-memory collection, the active
//! filter state, and the current selection. Views are computed from the
//! live collection on every read; every collection mutation rewrites the
//! storage slot before returning.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = BookStore::open()?;  // Seeds the shelf on first run
//!
//! store.set_library_filter(LibraryFilter::Favorites);
//! for book in store.filtered_books() {
//!     println!("{}", book.title);
//! }
//! ```
//!
//! Lookups with an unknown id are silent no-ops; storage write failures
//! are logged and suppressed. The only fallible entry point is `open()`,
//! which can fail on configuration loading.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::Config;
use crate::filter::{BookFilters, Library, LibraryFilter, StatusFilter, TagFilter, LIBRARIES};
use crate::models::{Book, BookPatch, BookPreset, BookStatus};
use crate::seed::seed_books;
use crate::storage::ShelfPersistence;

/// Authoritative holder of the book collection and UI filter state
pub struct BookStore {
    books: Vec<Book>,
    filters: BookFilters,
    selected_id: Option<String>,
    persistence: ShelfPersistence,
}

impl BookStore {
    /// Open the store using the default configuration
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Ok(Self::with_config(config))
    }

    /// Open the store with a specific configuration
    ///
    /// Reads the collection slot; an absent, unparseable, or empty slot
    /// falls back to the starter books. Read failures are logged, never
    /// surfaced.
    pub fn with_config(config: Config) -> Self {
        let persistence = ShelfPersistence::new(config);

        let books = match persistence.load() {
            Ok(Some(books)) if !books.is_empty() => books,
            Ok(_) => seed_books(),
            Err(e) => {
                warn!("Could not read book collection, starting from seeds: {}", e);
                seed_books()
            }
        };

        let selected_id = books.first().map(|b| b.id.clone());

        Self {
            books,
            filters: BookFilters::default(),
            selected_id,
            persistence,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        self.persistence.config()
    }

    /// The full collection, in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the collection
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Look up a book by id
    pub fn get_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// The active filter state
    pub fn filters(&self) -> &BookFilters {
        &self.filters
    }

    /// The static library preset list
    pub fn libraries(&self) -> &'static [Library] {
        &LIBRARIES
    }

    /// The recognized status values
    pub fn status_options(&self) -> &'static [BookStatus] {
        &BookStatus::ALL
    }

    // ==================== Derived views ====================

    /// The currently selected book, if the selection points at a live id
    pub fn selected_book(&self) -> Option<&Book> {
        let id = self.selected_id.as_deref()?;
        self.books.iter().find(|b| b.id == id)
    }

    /// The collection filtered by all four predicates, newest first
    pub fn filtered_books(&self) -> Vec<&Book> {
        let mut books: Vec<&Book> = self
            .books
            .iter()
            .filter(|b| self.filters.matches(b))
            .collect();
        books.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        books
    }

    /// Distinct tags across the whole collection, alphabetical
    pub fn available_tags(&self) -> Vec<String> {
        let tags: BTreeSet<&String> = self.books.iter().flat_map(|b| b.tags.iter()).collect();
        tags.into_iter().cloned().collect()
    }

    // ==================== Filter actions ====================

    pub fn set_keyword_filter(&mut self, keyword: impl Into<String>) {
        self.filters.keyword = keyword.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filters.status = status;
    }

    pub fn set_tag_filter(&mut self, tag: TagFilter) {
        self.filters.tag = tag;
    }

    pub fn set_library_filter(&mut self, library: LibraryFilter) {
        self.filters.library = library;
    }

    /// Restore every filter to its default
    pub fn reset_filters(&mut self) {
        self.filters = BookFilters::default();
    }

    // ==================== Selection ====================

    /// Set or clear the selection
    ///
    /// No existence check: selecting an unknown id just makes
    /// `selected_book()` return `None`.
    pub fn select_book(&mut self, id: Option<&str>) {
        self.selected_id = id.map(str::to_string);
    }

    // ==================== Collection actions ====================

    /// Create a book at the front of the collection and select it
    pub fn create_book(&mut self, preset: BookPreset) -> &Book {
        let book = Book::new(preset);
        self.selected_id = Some(book.id.clone());
        self.books.insert(0, book);
        self.persist();
        &self.books[0]
    }

    /// Merge a patch into an existing book, keeping its position
    ///
    /// No-op when the id is unknown.
    pub fn update_book(&mut self, id: &str, patch: BookPatch) {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return;
        };
        book.apply_patch(patch);
        self.persist();
    }

    /// Remove a book
    ///
    /// When the removed book was selected, the selection moves to the new
    /// first book, or clears if the collection is now empty. No-op when
    /// the id is unknown.
    pub fn delete_book(&mut self, id: &str) {
        let Some(index) = self.books.iter().position(|b| b.id == id) else {
            return;
        };
        self.books.remove(index);

        if self.books.is_empty() {
            self.selected_id = None;
        } else if self.selected_id.as_deref() == Some(id) {
            self.selected_id = Some(self.books[0].id.clone());
        }
        self.persist();
    }

    /// Copy a book to the front of the collection and select the copy
    ///
    /// Returns the copy, or `None` when the id is unknown.
    pub fn duplicate_book(&mut self, id: &str) -> Option<&Book> {
        let copy = self.books.iter().find(|b| b.id == id)?.duplicate();
        self.selected_id = Some(copy.id.clone());
        self.books.insert(0, copy);
        self.persist();
        Some(&self.books[0])
    }

    /// Flip a book's favorite flag
    ///
    /// No-op when the id is unknown.
    pub fn toggle_favorite(&mut self, id: &str) {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return;
        };
        book.toggle_favorite();
        self.persist();
    }

    /// Rewrite the slot with the current collection
    ///
    /// Write failures are logged and suppressed; the in-memory state stays
    /// authoritative either way.
    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.books) {
            warn!("Failed to persist book collection: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            default_author: None,
            log_file: None,
        }
    }

    fn test_store(temp_dir: &TempDir) -> BookStore {
        BookStore::with_config(test_config(temp_dir))
    }

    fn preset(title: &str) -> BookPreset {
        BookPreset {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_run_seeds_the_shelf() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        assert_eq!(store.book_count(), 3);
        // Initial selection is the first book
        assert_eq!(
            store.selected_book().map(|b| b.id.clone()),
            Some(store.books()[0].id.clone())
        );
        // Construction alone does not write the slot
        assert!(!test_config(&temp_dir).books_path().exists());
    }

    #[test]
    fn test_empty_slot_falls_back_to_seeds() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(test_config(&temp_dir).books_path(), "[]").unwrap();

        let store = test_store(&temp_dir);
        assert_eq!(store.book_count(), 3);
    }

    #[test]
    fn test_malformed_slot_falls_back_to_seeds() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(test_config(&temp_dir).books_path(), "not json at all").unwrap();

        let store = test_store(&temp_dir);
        assert_eq!(store.book_count(), 3);
    }

    #[test]
    fn test_create_book_front_inserts_and_selects() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let before = store.book_count();

        let id = store.create_book(preset("Brand New")).id.clone();

        assert_eq!(store.book_count(), before + 1);
        assert_eq!(store.books()[0].id, id);
        assert_eq!(store.selected_book().map(|b| b.id.as_str()), Some(id.as_str()));
    }

    #[test]
    fn test_create_book_persists_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let created = {
            let mut store = test_store(&temp_dir);
            store.create_book(preset("Persisted")).clone()
        };

        let reopened = test_store(&temp_dir);
        let found = reopened.get_book(&created.id).expect("book should survive reopen");
        assert_eq!(*found, created);
    }

    #[test]
    fn test_ids_stay_unique_through_operations() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        store.create_book(preset("A"));
        store.create_book(preset("B"));
        let first_id = store.books()[0].id.clone();
        store.duplicate_book(&first_id);
        store.duplicate_book(&first_id);

        let ids: HashSet<_> = store.books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), store.book_count());
    }

    #[test]
    fn test_update_book_refreshes_timestamp_and_keeps_position() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let target_id = store.books()[1].id.clone();
        let before = store.books()[1].updated_at;
        std::thread::sleep(std::time::Duration::from_millis(10));

        store.update_book(
            &target_id,
            BookPatch {
                title: Some("Renamed in place".to_string()),
                ..Default::default()
            },
        );

        let book = &store.books()[1];
        assert_eq!(book.id, target_id, "position must be preserved");
        assert_eq!(book.title, "Renamed in place");
        assert!(book.updated_at > before);
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let snapshot: Vec<Book> = store.books().to_vec();

        store.update_book(
            "no-such-id",
            BookPatch {
                title: Some("ignored".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(store.books(), snapshot.as_slice());
        // A no-op does not touch the slot either
        assert!(!test_config(&temp_dir).books_path().exists());
    }

    #[test]
    fn test_delete_selected_moves_selection_to_first() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let selected = store.selected_book().unwrap().id.clone();
        store.delete_book(&selected);

        let new_first = store.books()[0].id.clone();
        assert_eq!(store.selected_book().map(|b| b.id.clone()), Some(new_first));
    }

    #[test]
    fn test_delete_unselected_keeps_selection() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let selected = store.selected_book().unwrap().id.clone();
        let other = store.books()[2].id.clone();
        store.delete_book(&other);

        assert_eq!(store.selected_book().map(|b| b.id.clone()), Some(selected));
    }

    #[test]
    fn test_delete_last_book_clears_selection() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let ids: Vec<String> = store.books().iter().map(|b| b.id.clone()).collect();
        for id in ids {
            store.delete_book(&id);
        }

        assert_eq!(store.book_count(), 0);
        assert!(store.selected_book().is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_a_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let selected = store.selected_book().unwrap().id.clone();
        let before = store.book_count();

        store.delete_book("no-such-id");

        assert_eq!(store.book_count(), before);
        assert_eq!(store.selected_book().map(|b| b.id.clone()), Some(selected));
    }

    #[test]
    fn test_duplicate_book_is_a_selected_draft_copy() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let source = store
            .get_book("bk-editor-diaries")
            .expect("seed book present")
            .clone();

        let copy = store.duplicate_book(&source.id).expect("source exists").clone();

        assert_ne!(copy.id, source.id);
        assert_eq!(copy.title, format!("{} - copy", source.title));
        assert_eq!(copy.status, BookStatus::Draft);
        assert_eq!(store.books()[0].id, copy.id);
        assert_eq!(store.selected_book().map(|b| b.id.clone()), Some(copy.id.clone()));

        // Deep copy: editing the duplicate leaves the source untouched
        store.update_book(
            &copy.id,
            BookPatch {
                content: Some("rewritten".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(store.get_book(&source.id).unwrap().content, source.content);
    }

    #[test]
    fn test_duplicate_unknown_id_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        assert!(store.duplicate_book("no-such-id").is_none());
    }

    #[test]
    fn test_toggle_favorite_twice_restores_flag() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let id = store.books()[0].id.clone();
        let original = store.books()[0].favorite;
        let t0 = store.books()[0].updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        store.toggle_favorite(&id);
        assert_eq!(store.get_book(&id).unwrap().favorite, !original);
        let t1 = store.get_book(&id).unwrap().updated_at;
        assert!(t1 > t0);

        std::thread::sleep(std::time::Duration::from_millis(10));
        store.toggle_favorite(&id);
        assert_eq!(store.get_book(&id).unwrap().favorite, original);
        assert!(store.get_book(&id).unwrap().updated_at > t1);
    }

    #[test]
    fn test_selected_book_with_dangling_selection() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        store.select_book(Some("never-existed"));
        assert!(store.selected_book().is_none());

        store.select_book(None);
        assert!(store.selected_book().is_none());
    }

    #[test]
    fn test_favorites_library_selects_exactly_the_favorites() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        store.set_library_filter(LibraryFilter::Favorites);

        let favorites: HashSet<&str> = store
            .books()
            .iter()
            .filter(|b| b.favorite)
            .map(|b| b.id.as_str())
            .collect();
        let filtered: HashSet<&str> = store.filtered_books().iter().map(|b| b.id.as_str()).collect();

        assert!(!favorites.is_empty(), "seeds include favorites");
        assert_eq!(filtered, favorites);
    }

    #[test]
    fn test_filtered_books_sorted_by_updated_at_descending() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let t1 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let t3 = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

        // Pin the three seed books to t1, t3, t2 in collection order
        let ids: Vec<String> = store.books().iter().map(|b| b.id.clone()).collect();
        for (id, ts) in ids.iter().zip([t1, t3, t2]) {
            store.update_book(
                id,
                BookPatch {
                    updated_at: Some(ts),
                    ..Default::default()
                },
            );
        }

        let order: Vec<_> = store.filtered_books().iter().map(|b| b.updated_at).collect();
        assert_eq!(order, vec![t3, t2, t1]);
    }

    #[test]
    fn test_keyword_matches_tags_case_insensitively() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        // The seed shelf carries a book tagged "UX"
        store.set_keyword_filter("ux");
        let filtered = store.filtered_books();
        assert!(filtered.iter().any(|b| b.id == "bk-editor-diaries"));
    }

    #[test]
    fn test_filters_combine_and_reset() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        store.set_status_filter(StatusFilter::Only(BookStatus::InProgress));
        store.set_tag_filter(TagFilter::Named("pkm".to_string()));
        assert_eq!(store.filtered_books().len(), 1);

        // Contradictory library/status combination yields nothing
        store.set_library_filter(LibraryFilter::Archive);
        assert!(store.filtered_books().is_empty());

        store.reset_filters();
        assert_eq!(store.filtered_books().len(), store.book_count());
    }

    #[test]
    fn test_available_tags_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        store.create_book(BookPreset {
            tags: Some(vec!["pkm".to_string(), "fresh".to_string()]),
            ..Default::default()
        });

        let tags = store.available_tags();
        assert_eq!(
            tags.iter().filter(|t| t.as_str() == "pkm").count(),
            1,
            "shared tag appears once"
        );
        assert!(tags.contains(&"fresh".to_string()));
        // Alphabetical order
        let mut sorted = tags.clone();
        sorted.sort();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn test_status_options_and_libraries_are_static() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        assert_eq!(store.status_options().len(), 4);
        assert_eq!(store.libraries().len(), 4);
    }
}

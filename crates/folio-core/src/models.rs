//! Data models for Folio
//!
//! Defines the core data structures: Book, BookStatus, and the partial
//! field sets used when creating and patching books.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Writing status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    Draft,
    InProgress,
    Finalized,
    Archived,
}

impl BookStatus {
    /// Every recognized status, in display order
    pub const ALL: [BookStatus; 4] = [
        BookStatus::Draft,
        BookStatus::InProgress,
        BookStatus::Finalized,
        BookStatus::Archived,
    ];

    /// The wire/CLI spelling of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Draft => "draft",
            BookStatus::InProgress => "in-progress",
            BookStatus::Finalized => "finalized",
            BookStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(BookStatus::Draft),
            "in-progress" => Ok(BookStatus::InProgress),
            "finalized" => Ok(BookStatus::Finalized),
            "archived" => Ok(BookStatus::Archived),
            other => anyhow::bail!(
                "unrecognized status '{}' (expected draft, in-progress, finalized, archived)",
                other
            ),
        }
    }
}

/// A single book record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier, assigned at creation and never changed
    pub id: String,
    /// Working title
    pub title: String,
    /// Author name (free text, no uniqueness)
    pub author: String,
    /// Shelf category (free text)
    pub category: String,
    /// Writing status
    pub status: BookStatus,
    /// Marked as a favorite
    pub favorite: bool,
    /// Ordered tag list; duplicates are not rejected
    pub tags: Vec<String>,
    /// Short description shown in listings
    pub summary: String,
    /// Markdown body
    pub content: String,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Create a new book from a preset, filling defaults for missing fields
    pub fn new(preset: BookPreset) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: preset.title.unwrap_or_else(|| "Untitled book".to_string()),
            author: preset
                .author
                .unwrap_or_else(|| "Unknown author".to_string()),
            category: preset
                .category
                .unwrap_or_else(|| "Uncategorized".to_string()),
            status: preset.status.unwrap_or(BookStatus::Draft),
            favorite: false,
            tags: preset
                .tags
                .unwrap_or_else(|| vec!["uncategorized".to_string()]),
            summary: preset.summary.unwrap_or_else(|| {
                "Capture ideas quickly and sketch the chapter structure.".to_string()
            }),
            content: preset
                .content
                .unwrap_or_else(|| "# New chapter\n\nStart writing down your ideas...\n".to_string()),
            updated_at: Utc::now(),
        }
    }

    /// Merge a patch into this book in place
    ///
    /// Refreshes `updated_at` unless the patch carries an explicit timestamp.
    pub fn apply_patch(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(favorite) = patch.favorite {
            self.favorite = favorite;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.updated_at = patch.updated_at.unwrap_or_else(Utc::now);
    }

    /// Field-by-field copy with a fresh identity
    ///
    /// The copy owns its own tag list and content string, shares nothing
    /// with the source, gets a new id, a " - copy" title suffix, draft
    /// status, and a fresh timestamp.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: format!("{} - copy", self.title),
            author: self.author.clone(),
            category: self.category.clone(),
            status: BookStatus::Draft,
            favorite: self.favorite,
            tags: self.tags.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            updated_at: Utc::now(),
        }
    }

    /// Flip the favorite flag and refresh the timestamp
    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
        self.updated_at = Utc::now();
    }
}

/// Optional fields accepted when creating a book
///
/// Anything left as `None` falls back to the documented default.
#[derive(Debug, Clone, Default)]
pub struct BookPreset {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub status: Option<BookStatus>,
    pub tags: Option<Vec<String>>,
    pub summary: Option<String>,
    pub content: Option<String>,
}

/// Optional fields accepted when patching a book
///
/// `updated_at` overrides the automatic timestamp refresh when present.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub status: Option<BookStatus>,
    pub favorite: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

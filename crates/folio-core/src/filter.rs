//! Filtering for the book collection
//!
//! Each filter field has its own closed type and its own setter on the
//! store, so there is no stringly-typed filter key to get wrong. A filter
//! *value* that matches nothing (a tag no book carries, a contradictory
//! library/status combination) is still legal and just yields an empty view.

use crate::models::{Book, BookStatus};

/// Status predicate: everything, or exactly one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookStatus),
}

impl StatusFilter {
    fn accepts(&self, book: &Book) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => book.status == *status,
        }
    }
}

/// Tag predicate: everything, or books carrying one named tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Named(String),
}

impl TagFilter {
    fn accepts(&self, book: &Book) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Named(tag) => book.tags.iter().any(|t| t == tag),
        }
    }
}

/// Named preset groupings, independent of the raw status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibraryFilter {
    #[default]
    All,
    Favorites,
    Drafts,
    Archive,
}

impl LibraryFilter {
    fn accepts(&self, book: &Book) -> bool {
        match self {
            LibraryFilter::All => true,
            LibraryFilter::Favorites => book.favorite,
            LibraryFilter::Drafts => book.status == BookStatus::Draft,
            LibraryFilter::Archive => book.status == BookStatus::Archived,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryFilter::All => "all",
            LibraryFilter::Favorites => "favorites",
            LibraryFilter::Drafts => "draft",
            LibraryFilter::Archive => "archive",
        }
    }
}

impl std::fmt::Display for LibraryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LibraryFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(LibraryFilter::All),
            "favorites" => Ok(LibraryFilter::Favorites),
            "draft" => Ok(LibraryFilter::Drafts),
            "archive" => Ok(LibraryFilter::Archive),
            other => anyhow::bail!(
                "unrecognized library '{}' (expected all, favorites, draft, archive)",
                other
            ),
        }
    }
}

/// A library preset as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Library {
    pub filter: LibraryFilter,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The static preset list; not persisted, not user-editable
pub const LIBRARIES: [Library; 4] = [
    Library {
        filter: LibraryFilter::All,
        label: "All books",
        icon: "📚",
    },
    Library {
        filter: LibraryFilter::Favorites,
        label: "Favorites",
        icon: "⭐",
    },
    Library {
        filter: LibraryFilter::Drafts,
        label: "Drafts",
        icon: "📝",
    },
    Library {
        filter: LibraryFilter::Archive,
        label: "Archive",
        icon: "🗂️",
    },
];

/// The active filter state, one per store
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookFilters {
    pub keyword: String,
    pub status: StatusFilter,
    pub tag: TagFilter,
    pub library: LibraryFilter,
}

impl BookFilters {
    /// Whether a book passes all four active predicates
    pub fn matches(&self, book: &Book) -> bool {
        self.keyword_accepts(book)
            && self.status.accepts(book)
            && self.tag.accepts(book)
            && self.library.accepts(book)
    }

    fn keyword_accepts(&self, book: &Book) -> bool {
        let keyword = self.keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return true;
        }
        let joined_tags = book.tags.join(" ");
        let haystacks = [
            book.title.as_str(),
            book.summary.as_str(),
            book.author.as_str(),
            joined_tags.as_str(),
        ];
        haystacks
            .iter()
            .any(|field| field.to_lowercase().contains(&keyword))
    }
}

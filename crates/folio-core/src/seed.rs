//! Starter books
//!
//! Used when no valid collection exists on disk, so a first run opens onto
//! a populated shelf instead of an empty one. Every call returns freshly
//! owned records; nothing here aliases the live collection.

use chrono::{DateTime, Utc};

use crate::models::{Book, BookStatus};

/// Parse a known-good RFC 3339 constant, falling back to now
fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// The ordered starter collection
pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: "bk-ai-playbook".to_string(),
            title: "The AI Writing Playbook".to_string(),
            author: "Mara Lin".to_string(),
            category: "Craft".to_string(),
            status: BookStatus::Draft,
            favorite: true,
            tags: vec!["AI".to_string(), "writing".to_string(), "method".to_string()],
            summary: "A repeatable drafting loop for long-form writing in the \
                      AI era: prompts, outlines, and a knowledge pipeline."
                .to_string(),
            content: "# The AI Writing Playbook\n\n\
                      ## Goals\n\
                      - Build a repeatable drafting loop\n\
                      - Keep prompt templates next to the outline\n\n\
                      ## Checklist\n\
                      1. Define the reader\n\
                      2. Slice chapters into scenes\n\
                      3. Gather source material\n\
                      4. Draft, then tighten\n\n\
                      > Writing a book is designing an experience.\n"
                .to_string(),
            updated_at: ts("2025-11-01T12:12:00Z"),
        },
        Book {
            id: "bk-digital-garden".to_string(),
            title: "Digital Garden Field Notes".to_string(),
            author: "Lydia Moss".to_string(),
            category: "Knowledge management".to_string(),
            status: BookStatus::InProgress,
            favorite: false,
            tags: vec!["pkm".to_string(), "notes".to_string()],
            summary: "From capture to publication: how note fragments grow \
                      into essays and essays into a book."
                .to_string(),
            content: "# Digital Garden Field Notes\n\n\
                      ### Three layers\n\
                      - Seeds: loose fragments\n\
                      - Branches: themed essays\n\
                      - Fruit: the published whole\n\n\
                      ### Cadence\n\
                      - Morning review, daily\n\
                      - Theme pass, weekly\n\
                      - Publish retro, monthly\n"
                .to_string(),
            updated_at: ts("2025-10-24T09:30:00Z"),
        },
        Book {
            id: "bk-editor-diaries".to_string(),
            title: "Editor Experience Diaries".to_string(),
            author: "Theo Quill".to_string(),
            category: "Product design".to_string(),
            status: BookStatus::Finalized,
            favorite: true,
            tags: vec!["UX".to_string(), "editor".to_string(), "frontend".to_string()],
            summary: "Interaction patterns, performance tricks, and hard \
                      lessons from building a writing editor."
                .to_string(),
            content: "# Editor Experience Diaries\n\n\
                      ## Ground rules\n\
                      1. Keep input and preview in lockstep\n\
                      2. Ship a command palette early\n\
                      3. Track the document outline\n\n\
                      ## Performance notes\n\
                      - Virtualize long chapter lists\n\
                      - Lazy-load heavy panels\n"
                .to_string(),
            updated_at: ts("2025-09-15T15:45:00Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let books = seed_books();
        assert_eq!(books.len(), 3);

        let ids: HashSet<_> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), books.len(), "seed ids must be unique");

        for book in &books {
            assert!(!book.title.is_empty());
            assert!(!book.author.is_empty());
            assert!(!book.tags.is_empty());
            assert!(!book.summary.is_empty());
            assert!(!book.content.is_empty());
        }
    }

    #[test]
    fn test_seed_calls_are_independent() {
        let mut first = seed_books();
        first[0].title.push_str(" (edited)");
        let second = seed_books();
        assert_eq!(second[0].title, "The AI Writing Playbook");
    }

    #[test]
    fn test_seed_timestamps_parse() {
        let books = seed_books();
        // Fixed dates, newest first in the seed order
        assert!(books[0].updated_at > books[1].updated_at);
        assert!(books[1].updated_at > books[2].updated_at);
    }
}

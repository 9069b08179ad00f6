//! Book command handlers

use anyhow::{bail, Context, Result};

use folio_core::{
    BookPatch, BookPreset, BookStatus, BookStore, LibraryFilter, StatusFilter, TagFilter,
};

use crate::editor::{confirm, edit_text};
use crate::output::{short_id, Output};

/// Create a new book
#[allow(clippy::too_many_arguments)]
pub fn create(
    store: &mut BookStore,
    title: Option<String>,
    author: Option<String>,
    category: Option<String>,
    status: Option<String>,
    tags: Vec<String>,
    summary: Option<String>,
    output: &Output,
) -> Result<()> {
    let status = status.map(|s| s.parse::<BookStatus>()).transpose()?;
    let author = author.or_else(|| store.config().default_author.clone());

    let book = store.create_book(BookPreset {
        title,
        author,
        category,
        status,
        tags: if tags.is_empty() { None } else { Some(tags) },
        summary,
        content: None,
    });

    let message = format!("Created book {} - {}", short_id(&book.id), book.title);
    output.success(&message);
    Ok(())
}

/// List books through the store's filtered view
pub fn list(
    store: &mut BookStore,
    keyword: Option<String>,
    status: Option<String>,
    tag: Option<String>,
    library: Option<String>,
    output: &Output,
) -> Result<()> {
    if let Some(keyword) = keyword {
        store.set_keyword_filter(keyword);
    }
    if let Some(status) = status {
        let filter = if status == "all" {
            StatusFilter::All
        } else {
            StatusFilter::Only(status.parse()?)
        };
        store.set_status_filter(filter);
    }
    if let Some(tag) = tag {
        let filter = if tag == "all" {
            TagFilter::All
        } else {
            TagFilter::Named(tag)
        };
        store.set_tag_filter(filter);
    }
    if let Some(library) = library {
        store.set_library_filter(library.parse::<LibraryFilter>()?);
    }

    output.print_books(&store.filtered_books());
    Ok(())
}

/// Show one book in full
pub fn show(store: &mut BookStore, id: String, output: &Output) -> Result<()> {
    let book_id = resolve_book_id(store, &id)?;
    store.select_book(Some(book_id.as_str()));

    let book = store
        .selected_book()
        .with_context(|| format!("Book not found: {}", id))?;
    output.print_book(book);
    Ok(())
}

/// Patch a book's fields, or open its content in $EDITOR
#[allow(clippy::too_many_arguments)]
pub fn edit(
    store: &mut BookStore,
    id: String,
    title: Option<String>,
    author: Option<String>,
    category: Option<String>,
    status: Option<String>,
    summary: Option<String>,
    tags: Vec<String>,
    output: &Output,
) -> Result<()> {
    let book_id = resolve_book_id(store, &id)?;

    let no_field_flags = title.is_none()
        && author.is_none()
        && category.is_none()
        && status.is_none()
        && summary.is_none()
        && tags.is_empty();

    let patch = if no_field_flags {
        let book = store
            .get_book(&book_id)
            .with_context(|| format!("Book not found: {}", id))?;
        let edited = edit_text(&book.content).context("Failed to edit book content")?;
        BookPatch {
            content: Some(edited),
            ..Default::default()
        }
    } else {
        BookPatch {
            title,
            author,
            category,
            status: status.map(|s| s.parse::<BookStatus>()).transpose()?,
            summary,
            tags: if tags.is_empty() { None } else { Some(tags) },
            ..Default::default()
        }
    };

    store.update_book(&book_id, patch);
    output.success(&format!("Updated book {}", short_id(&book_id)));
    Ok(())
}

/// Delete a book, with confirmation on a TTY
pub fn delete(store: &mut BookStore, id: String, output: &Output) -> Result<()> {
    let book_id = resolve_book_id(store, &id)?;
    let title = store
        .get_book(&book_id)
        .with_context(|| format!("Book not found: {}", id))?
        .title
        .clone();

    if output.should_prompt() {
        println!("Delete book: {} - {}", short_id(&book_id), title);
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.delete_book(&book_id);
    output.success(&format!("Deleted book: {}", short_id(&book_id)));
    Ok(())
}

/// Duplicate a book as a fresh draft
pub fn duplicate(store: &mut BookStore, id: String, output: &Output) -> Result<()> {
    let book_id = resolve_book_id(store, &id)?;
    let copy = store
        .duplicate_book(&book_id)
        .with_context(|| format!("Book not found: {}", id))?;

    let message = format!("Created copy {} - {}", short_id(&copy.id), copy.title);
    output.success(&message);
    Ok(())
}

/// Toggle a book's favorite flag
pub fn favorite(store: &mut BookStore, id: String, output: &Output) -> Result<()> {
    let book_id = resolve_book_id(store, &id)?;
    store.toggle_favorite(&book_id);

    let book = store
        .get_book(&book_id)
        .with_context(|| format!("Book not found: {}", id))?;
    let verb = if book.favorite { "Favorited" } else { "Unfavorited" };
    output.success(&format!("{} {}", verb, book.title));
    Ok(())
}

/// Resolve a book ID (full id or unique prefix)
fn resolve_book_id(store: &BookStore, id: &str) -> Result<String> {
    if store.get_book(id).is_some() {
        return Ok(id.to_string());
    }

    let matches: Vec<_> = store
        .books()
        .iter()
        .filter(|b| b.id.starts_with(id))
        .collect();

    match matches.len() {
        0 => bail!("No book found matching: {}", id),
        1 => Ok(matches[0].id.clone()),
        _ => {
            eprintln!("Multiple books match '{}':", id);
            for book in &matches {
                eprintln!("  {} - {}", book.id, book.title);
            }
            bail!("Ambiguous ID. Please provide more characters.");
        }
    }
}

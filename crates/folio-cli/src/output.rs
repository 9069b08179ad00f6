//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use folio_core::{format_date_label, format_relative_time, Book, Library};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single book in full
    pub fn print_book(&self, book: &Book) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:        {}", book.id);
                println!("Title:     {}", book.title);
                println!("Author:    {}", book.author);
                println!("Category:  {}", book.category);
                println!("Status:    {}", book.status);
                println!("Favorite:  {}", if book.favorite { "yes" } else { "no" });
                if !book.tags.is_empty() {
                    println!("Tags:      {}", book.tags.join(", "));
                }
                println!(
                    "Updated:   {} ({})",
                    format_date_label(book.updated_at),
                    format_relative_time(book.updated_at)
                );
                if !book.summary.is_empty() {
                    println!();
                    println!("{}", book.summary);
                }
                if !book.content.is_empty() {
                    println!();
                    println!("────────────────────────────────────────");
                    println!("{}", book.content);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(book).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", book.id);
            }
        }
    }

    /// Print a book listing
    pub fn print_books(&self, books: &[&Book]) {
        match self.format {
            OutputFormat::Human => {
                if books.is_empty() {
                    println!("No books found.");
                    return;
                }
                for book in books {
                    let star = if book.favorite { " ★" } else { "" };
                    println!(
                        "{} | {}{} | {} | {}",
                        short_id(&book.id),
                        truncate(&book.title, 35),
                        star,
                        book.status,
                        format_relative_time(book.updated_at)
                    );
                }
                println!("\n{} book(s)", books.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(books).unwrap());
            }
            OutputFormat::Quiet => {
                for book in books {
                    println!("{}", book.id);
                }
            }
        }
    }

    /// Print the distinct tag list
    pub fn print_tags(&self, tags: &[String]) {
        match self.format {
            OutputFormat::Human => {
                if tags.is_empty() {
                    println!("No tags found.");
                    return;
                }
                for tag in tags {
                    println!("{}", tag);
                }
                println!("\n{} tag(s)", tags.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(tags).unwrap());
            }
            OutputFormat::Quiet => {
                for tag in tags {
                    println!("{}", tag);
                }
            }
        }
    }

    /// Print the library preset list
    pub fn print_libraries(&self, libraries: &[Library]) {
        match self.format {
            OutputFormat::Human => {
                for library in libraries {
                    println!("{}  {:9} {}", library.icon, library.filter, library.label);
                }
            }
            OutputFormat::Json => {
                let json: Vec<_> = libraries
                    .iter()
                    .map(|l| {
                        serde_json::json!({
                            "id": l.filter.as_str(),
                            "label": l.label,
                            "icon": l.icon,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&json).unwrap());
            }
            OutputFormat::Quiet => {
                for library in libraries {
                    println!("{}", library.filter);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }
}

/// Leading id fragment used in listings
pub fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

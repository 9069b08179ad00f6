//! Status command handler

use anyhow::Result;

use folio_core::BookStore;

use crate::output::{Output, OutputFormat};

/// Show shelf status information
pub fn show(store: &BookStore, output: &Output) -> Result<()> {
    let config = store.config();
    let books_path = config.books_path();

    match output.format {
        OutputFormat::Json => {
            let by_status: Vec<_> = store
                .status_options()
                .iter()
                .map(|status| {
                    let count = store.books().iter().filter(|b| b.status == *status).count();
                    serde_json::json!({"status": status.as_str(), "count": count})
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "books_file": books_path,
                    "books_file_exists": books_path.exists(),
                    "counts": {
                        "books": store.book_count(),
                        "tags": store.available_tags().len(),
                        "by_status": by_status
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.book_count());
        }
        OutputFormat::Human => {
            println!("Folio Status");
            println!("============");
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
            println!(
                "  Slot:     {} ({})",
                books_path.display(),
                if books_path.exists() {
                    "present"
                } else {
                    "not written yet"
                }
            );
            println!();
            println!("Shelf:");
            println!("  Books: {}", store.book_count());
            println!("  Tags:  {}", store.available_tags().len());
            println!();
            println!("By status:");
            for status in store.status_options() {
                let count = store.books().iter().filter(|b| b.status == *status).count();
                println!("  {:12} {}", format!("{}:", status), count);
            }
        }
    }

    Ok(())
}

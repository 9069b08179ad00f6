//! Tag command handlers

use anyhow::Result;

use folio_core::BookStore;

use crate::output::Output;

/// List every distinct tag on the shelf
pub fn list(store: &BookStore, output: &Output) -> Result<()> {
    output.print_tags(&store.available_tags());
    Ok(())
}
